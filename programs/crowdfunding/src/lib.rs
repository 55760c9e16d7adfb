use anchor_lang::prelude::*;

declare_id!("E9JvpKoPBCFP8Y5h2XLnRk8EintPJE43AF7Rk5G6DnKx");

// Подробные логи только для отладочных сборок
#[cfg(debug_assertions)]
macro_rules! debug_msg {
    ($($arg:tt)*) => {
        msg!($($arg)*)
    };
}

#[cfg(not(debug_assertions))]
macro_rules! debug_msg {
    ($($arg:tt)*) => {};
}

pub mod constants;
pub mod errors;
pub mod events;
pub mod pda;
pub mod state;
pub mod contexts;
pub mod instructions;

#[cfg(test)]
mod test_utils;

pub use contexts::*;

#[program]
pub mod crowdfunding {
    use super::*;

    /// Создание новой кампании по сбору средств
    pub fn create(ctx: Context<Create>, name: String, description: String) -> Result<()> {
        instructions::create::create_campaign(ctx, name, description)
    }

    /// Пожертвование лампортов в кампанию
    pub fn donate(ctx: Context<Donate>, amount: u64) -> Result<()> {
        instructions::donate::donate_to_campaign(ctx, amount)
    }

    /// Вывод собранных средств администратором кампании
    pub fn withdraw(ctx: Context<Withdraw>, amount: u64) -> Result<()> {
        instructions::withdraw::withdraw_from_campaign(ctx, amount)
    }
}

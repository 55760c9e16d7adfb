use anchor_lang::prelude::*;
use crate::constants::*;
use crate::errors::CrowdfundingError;

/// Аккаунт кампании по сбору средств.
///
/// Порядок полей задает бинарный формат аккаунта и совпадает с IDL,
/// поэтому новые поля можно добавлять только в конец.
#[account]
#[derive(Debug, PartialEq, Eq)]
pub struct Campaign {
    /// Название, задается один раз при создании
    pub name: String,

    /// Описание, задается один раз при создании
    pub description: String,

    /// Сколько лампортов всего было пожертвовано (только растет)
    pub amount_donated: u64,

    /// Создатель кампании, единственный, кто может выводить средства
    pub admin: Pubkey,
}

impl Campaign {
    // Размер без дискриминатора, строки занимают максимум сразу
    pub const SPACE: usize = 4 + MAX_NAME_LENGTH + // name
                             4 + MAX_DESCRIPTION_LENGTH + // description
                             8 + // amount_donated
                             32; // admin

    pub const ACCOUNT_SIZE: usize = DISCRIMINATOR_SIZE + Self::SPACE;

    pub fn new(admin: Pubkey, name: String, description: String) -> Self {
        Self {
            name,
            description,
            amount_donated: 0,
            admin,
        }
    }

    /// Учитывает пожертвование и возвращает новую общую сумму
    pub fn record_donation(&mut self, amount: u64) -> Result<u64> {
        self.amount_donated = self
            .amount_donated
            .checked_add(amount)
            .ok_or(CrowdfundingError::ArithmeticOverflow)?;
        Ok(self.amount_donated)
    }

    /// Записывает дискриминатор и поля кампании в только что выделенный аккаунт
    pub fn store(&self, info: &AccountInfo) -> Result<()> {
        // После выделения аккаунт должен принадлежать программе
        require_keys_eq!(*info.owner, crate::ID, CrowdfundingError::AllocationFailed);

        let mut data = info.try_borrow_mut_data()?;
        let mut writer: &mut [u8] = &mut data[..];
        self.try_serialize(&mut writer)
    }
}

/// Доступный для вывода баланс: все лампорты аккаунта за вычетом ренты
pub fn held_balance(lamports: u64, reserve: u64) -> u64 {
    lamports.saturating_sub(reserve)
}

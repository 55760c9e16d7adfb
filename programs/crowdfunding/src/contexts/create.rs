use anchor_lang::prelude::*;
use crate::constants::CAMPAIGN_SEED;

#[derive(Accounts)]
pub struct Create<'info> {
    /// CHECK: Адрес проверяется по seeds, аккаунт выделяется и записывается в инструкции
    #[account(
        mut,
        seeds = [CAMPAIGN_SEED, user.key().as_ref()],
        bump
    )]
    pub campaign: UncheckedAccount<'info>,

    /// Создатель кампании, оплачивает ренту
    #[account(mut)]
    pub user: Signer<'info>,

    pub system_program: Program<'info, System>,
}

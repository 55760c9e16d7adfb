use anchor_lang::prelude::*;
use crate::state::Campaign;

#[derive(Accounts)]
pub struct Withdraw<'info> {
    #[account(mut)]
    pub campaign: Account<'info, Campaign>,

    /// Должен совпадать с campaign.admin
    #[account(mut)]
    pub user: Signer<'info>,
}

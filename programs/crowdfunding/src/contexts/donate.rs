use anchor_lang::prelude::*;
use crate::state::Campaign;

#[derive(Accounts)]
pub struct Donate<'info> {
    #[account(mut)]
    pub campaign: Account<'info, Campaign>,

    /// Жертвователь, может быть кем угодно
    #[account(mut)]
    pub user: Signer<'info>,

    pub system_program: Program<'info, System>,
}

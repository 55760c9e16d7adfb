use anchor_lang::prelude::*;

#[event]
pub struct CampaignCreated {
    pub campaign: Pubkey,
    pub admin: Pubkey,
    pub name: String,
}

#[event]
pub struct DonationReceived {
    pub campaign: Pubkey,
    pub donor: Pubkey,
    pub amount: u64,
    /// Общая сумма пожертвований после этого перевода
    pub amount_donated: u64,
}

#[event]
pub struct FundsWithdrawn {
    pub campaign: Pubkey,
    pub admin: Pubkey,
    pub amount: u64,
    /// Доступный для вывода остаток после перевода
    pub held_balance: u64,
}

use anchor_lang::prelude::*;
use crate::errors::CrowdfundingError;
use crate::state::Campaign;

/// Проверяет, что подписант является администратором кампании
pub fn verify_admin(campaign: &Campaign, signer: &Pubkey) -> Result<()> {
    require_keys_eq!(campaign.admin, *signer, CrowdfundingError::Unauthorized);
    Ok(())
}

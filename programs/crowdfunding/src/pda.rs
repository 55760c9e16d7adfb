use anchor_lang::prelude::*;
use anchor_lang::solana_program::pubkey::MAX_SEED_LEN;
use crate::constants::CAMPAIGN_SEED;
use crate::errors::CrowdfundingError;

/// Вычисляет PDA из `(tag, owner[, salt])` и возвращает адрес вместе с bump.
///
/// Перебор bump идет от 255 вниз до первого адреса вне кривой ed25519.
/// Ошибка `DerivationExhausted` означает неверную конфигурацию семян и
/// не должна повторяться с теми же входными данными.
pub fn derive_address(
    tag: &[u8],
    owner: &Pubkey,
    salt: Option<&[u8]>,
    program_id: &Pubkey,
) -> Result<(Pubkey, u8)> {
    require!(tag.len() <= MAX_SEED_LEN, CrowdfundingError::DerivationExhausted);

    let mut seeds: Vec<&[u8]> = vec![tag, owner.as_ref()];
    if let Some(salt) = salt {
        require!(salt.len() <= MAX_SEED_LEN, CrowdfundingError::DerivationExhausted);
        seeds.push(salt);
    }

    Pubkey::try_find_program_address(&seeds, program_id)
        .ok_or_else(|| error!(CrowdfundingError::DerivationExhausted))
}

/// Адрес кампании администратора: одна кампания на одного админа, без соли
pub fn derive_campaign_address(admin: &Pubkey, program_id: &Pubkey) -> Result<(Pubkey, u8)> {
    derive_address(CAMPAIGN_SEED, admin, None, program_id)
}

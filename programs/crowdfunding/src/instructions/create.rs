use anchor_lang::prelude::*;
use crate::constants::CAMPAIGN_SEED;
use crate::contexts::Create;
use crate::events::CampaignCreated;
use crate::instructions::utils::*;
use crate::state::Campaign;

/// Записывает новую кампанию в уже выделенный аккаунт
pub fn init_campaign_record(
    campaign_info: &AccountInfo,
    admin: Pubkey,
    name: String,
    description: String,
) -> Result<Campaign> {
    let campaign = Campaign::new(admin, name, description);
    campaign.store(campaign_info)?;
    Ok(campaign)
}

/// Создание новой кампании по сбору средств
pub fn create_campaign(ctx: Context<Create>, name: String, description: String) -> Result<()> {
    // Проверка входных данных до любых изменений
    validate_campaign_text(&name, &description)?;

    let user_key = ctx.accounts.user.key();
    let campaign_info = ctx.accounts.campaign.to_account_info();

    // Адрес уже сверен с PDA (CAMPAIGN_SEED, user) ограничением seeds
    let campaign_key = campaign_info.key();
    let bump = ctx.bumps.campaign;

    // Повторное создание по тому же адресу запрещено
    ensure_uninitialized(&campaign_info)?;

    let rent_minimum = Rent::get()?.minimum_balance(Campaign::ACCOUNT_SIZE);
    check_allocation_funds(
        ctx.accounts.user.lamports(),
        campaign_info.lamports(),
        rent_minimum,
    )?;
    debug_msg!("Рента кампании: {} лампортов, bump: {}", rent_minimum, bump);

    let bump_seed = [bump];
    let signer_seeds: &[&[&[u8]]] = &[&[CAMPAIGN_SEED, user_key.as_ref(), &bump_seed]];

    allocate_campaign_account(
        &ctx.accounts.user.to_account_info(),
        &campaign_info,
        &ctx.accounts.system_program.to_account_info(),
        signer_seeds,
        rent_minimum,
    )?;

    let campaign = init_campaign_record(&campaign_info, user_key, name, description)?;

    emit!(CampaignCreated {
        campaign: campaign_key,
        admin: user_key,
        name: campaign.name.clone(),
    });

    msg!("Кампания успешно создана: {}, админ: {}", campaign_key, user_key);
    Ok(())
}

use anchor_lang::prelude::*;
use crate::contexts::Donate;
use crate::errors::CrowdfundingError;
use crate::events::DonationReceived;
use crate::instructions::utils::{check_donor_funds, transfer_sol};
use crate::state::Campaign;

/// Проверяет пожертвование и учитывает его в записи кампании.
/// Возвращает новую общую сумму, лампорты при этом не переводятся.
pub fn apply_donation(campaign: &mut Campaign, donor_lamports: u64, amount: u64) -> Result<u64> {
    require!(amount > 0, CrowdfundingError::ZeroAmount);
    check_donor_funds(donor_lamports, amount)?;
    campaign.record_donation(amount)
}

/// Пожертвование лампортов в кампанию
pub fn donate_to_campaign(ctx: Context<Donate>, amount: u64) -> Result<()> {
    let campaign_info = ctx.accounts.campaign.to_account_info();
    let donor_info = ctx.accounts.user.to_account_info();

    let amount_donated = apply_donation(&mut ctx.accounts.campaign, donor_info.lamports(), amount)?;
    debug_msg!(
        "Баланс кампании до перевода: {} лампортов",
        campaign_info.lamports()
    );

    // Переводим SOL от жертвователя на аккаунт кампании,
    // обновленная запись сохраняется при выходе из инструкции
    transfer_sol(
        &donor_info,
        &campaign_info,
        amount,
        &ctx.accounts.system_program.to_account_info(),
    )?;

    emit!(DonationReceived {
        campaign: campaign_info.key(),
        donor: donor_info.key(),
        amount,
        amount_donated,
    });

    msg!(
        "Пожертвование {} лампортов получено, всего собрано: {}",
        amount,
        amount_donated
    );
    Ok(())
}

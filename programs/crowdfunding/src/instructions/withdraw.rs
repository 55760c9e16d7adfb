use anchor_lang::prelude::*;
use crate::contexts::Withdraw;
use crate::errors::CrowdfundingError;
use crate::events::FundsWithdrawn;
use crate::instructions::auth::verify_admin;
use crate::instructions::utils::move_lamports;
use crate::state::{held_balance, Campaign};

/// Выводит `amount` лампортов админу и возвращает оставшийся доступный баланс.
///
/// `reserve` - рента, которая должна остаться на аккаунте кампании.
pub fn process_withdrawal(
    campaign: &Campaign,
    campaign_info: &AccountInfo,
    user_info: &AccountInfo,
    amount: u64,
    reserve: u64,
) -> Result<u64> {
    require!(amount > 0, CrowdfundingError::ZeroAmount);

    // Только администратор кампании может выводить средства
    require!(user_info.is_signer, CrowdfundingError::Unauthorized);
    verify_admin(campaign, user_info.key)?;

    let available = held_balance(campaign_info.lamports(), reserve);
    debug_msg!("Доступно для вывода: {}, запрошено: {}", available, amount);
    require!(amount <= available, CrowdfundingError::InsufficientFunds);

    move_lamports(campaign_info, user_info, amount)?;

    let remaining = available
        .checked_sub(amount)
        .ok_or(CrowdfundingError::ArithmeticOverflow)?;
    Ok(remaining)
}

/// Вывод собранных средств администратором кампании
pub fn withdraw_from_campaign(ctx: Context<Withdraw>, amount: u64) -> Result<()> {
    let campaign_info = ctx.accounts.campaign.to_account_info();
    let user_info = ctx.accounts.user.to_account_info();

    let reserve = Rent::get()?.minimum_balance(campaign_info.data_len());
    let remaining = process_withdrawal(
        &ctx.accounts.campaign,
        &campaign_info,
        &user_info,
        amount,
        reserve,
    )?;

    emit!(FundsWithdrawn {
        campaign: campaign_info.key(),
        admin: user_info.key(),
        amount,
        held_balance: remaining,
    });

    msg!("Выведено {} лампортов, осталось доступно: {}", amount, remaining);
    Ok(())
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestAccount;

    const RESERVE: u64 = 5_000_000;

    fn funded_campaign(held: u64) -> TestAccount {
        TestAccount::campaign(Pubkey::new_unique(), RESERVE + held)
    }

    fn roof_fund(admin: Pubkey) -> Campaign {
        Campaign::new(admin, "Roof Fund".to_string(), "Fix the roof".to_string())
    }

    #[test]
    fn test_instruction_discriminator_matches_idl() {
        assert_eq!(
            crate::instruction::Withdraw::DISCRIMINATOR,
            &[183, 18, 70, 156, 148, 109, 161, 34]
        );
    }

    #[test]
    fn test_admin_withdraws_exact_amount() {
        let admin = Pubkey::new_unique();
        let record = roof_fund(admin);
        let mut campaign = funded_campaign(500);
        let mut user = TestAccount::wallet(admin, 1_000);

        let remaining =
            process_withdrawal(&record, &campaign.info(), &user.info(), 300, RESERVE).unwrap();

        assert_eq!(remaining, 200);
        assert_eq!(campaign.lamports, RESERVE + 200);
        assert_eq!(user.lamports, 1_300);
    }

    #[test]
    fn test_non_admin_cannot_withdraw() {
        let record = roof_fund(Pubkey::new_unique());
        let mut campaign = funded_campaign(500);
        let mut stranger = TestAccount::wallet(Pubkey::new_unique(), 1_000);

        let err = process_withdrawal(&record, &campaign.info(), &stranger.info(), 500, RESERVE)
            .unwrap_err();

        assert_eq!(err, error!(CrowdfundingError::Unauthorized));
        assert_eq!(campaign.lamports, RESERVE + 500);
        assert_eq!(stranger.lamports, 1_000);
    }

    #[test]
    fn test_admin_must_sign() {
        let admin = Pubkey::new_unique();
        let record = roof_fund(admin);
        let mut campaign = funded_campaign(500);
        let mut user = TestAccount::wallet(admin, 0);
        user.is_signer = false;

        let err =
            process_withdrawal(&record, &campaign.info(), &user.info(), 100, RESERVE).unwrap_err();
        assert_eq!(err, error!(CrowdfundingError::Unauthorized));
        assert_eq!(campaign.lamports, RESERVE + 500);
    }

    #[test]
    fn test_withdraw_cannot_touch_rent_reserve() {
        let admin = Pubkey::new_unique();
        let record = roof_fund(admin);
        let mut campaign = funded_campaign(500);
        let mut user = TestAccount::wallet(admin, 0);

        let err =
            process_withdrawal(&record, &campaign.info(), &user.info(), 501, RESERVE).unwrap_err();

        assert_eq!(err, error!(CrowdfundingError::InsufficientFunds));
        assert_eq!(campaign.lamports, RESERVE + 500);
        assert_eq!(user.lamports, 0);
    }

    #[test]
    fn test_zero_withdrawal_is_rejected() {
        let admin = Pubkey::new_unique();
        let record = roof_fund(admin);
        let mut campaign = funded_campaign(500);
        let mut user = TestAccount::wallet(admin, 0);

        let err =
            process_withdrawal(&record, &campaign.info(), &user.info(), 0, RESERVE).unwrap_err();
        assert_eq!(err, error!(CrowdfundingError::ZeroAmount));
    }
}

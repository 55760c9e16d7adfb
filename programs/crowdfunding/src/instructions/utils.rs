use anchor_lang::prelude::*;
use anchor_lang::system_program::{
    self, allocate, assign, create_account, transfer, Allocate, Assign, CreateAccount, Transfer,
};
use crate::constants::*;
use crate::errors::CrowdfundingError;
use crate::state::Campaign;

/// Проверяет длину названия и описания кампании
pub fn validate_campaign_text(name: &str, description: &str) -> Result<()> {
    require!(name.len() <= MAX_NAME_LENGTH, CrowdfundingError::NameTooLong);
    require!(
        description.len() <= MAX_DESCRIPTION_LENGTH,
        CrowdfundingError::DescriptionTooLong
    );
    Ok(())
}

/// Проверяет, что по адресу кампании еще ничего не создано.
/// Допускается только пустой системный аккаунт (возможно, с лампортами).
pub fn ensure_uninitialized(info: &AccountInfo) -> Result<()> {
    require!(
        info.data_is_empty() && *info.owner == system_program::ID,
        CrowdfundingError::AlreadyExists
    );
    Ok(())
}

/// Сколько лампортов нужно доплатить до ренты
pub fn rent_shortfall(current_lamports: u64, rent_minimum: u64) -> u64 {
    rent_minimum.saturating_sub(current_lamports)
}

/// Проверяет, что создатель может оплатить ренту нового аккаунта
pub fn check_allocation_funds(
    payer_lamports: u64,
    current_lamports: u64,
    rent_minimum: u64,
) -> Result<()> {
    require!(
        payer_lamports >= rent_shortfall(current_lamports, rent_minimum),
        CrowdfundingError::AllocationFailed
    );
    Ok(())
}

/// Проверяет, что у жертвователя достаточно лампортов
pub fn check_donor_funds(donor_lamports: u64, amount: u64) -> Result<()> {
    require!(donor_lamports >= amount, CrowdfundingError::InsufficientDonorFunds);
    Ok(())
}

/// Передает SOL от пользователя через системную программу
pub fn transfer_sol<'info>(
    from: &AccountInfo<'info>,
    to: &AccountInfo<'info>,
    amount: u64,
    system_program: &AccountInfo<'info>,
) -> Result<()> {
    let cpi_accounts = Transfer {
        from: from.clone(),
        to: to.clone(),
    };
    let cpi_ctx = CpiContext::new(system_program.clone(), cpi_accounts);

    transfer(cpi_ctx, amount)
}

/// Переводит лампорты с аккаунта программы напрямую, без CPI.
/// Списание возможно только с аккаунта, которым владеет программа.
pub fn move_lamports(from: &AccountInfo, to: &AccountInfo, amount: u64) -> Result<()> {
    let from_balance = from
        .lamports()
        .checked_sub(amount)
        .ok_or(CrowdfundingError::InsufficientFunds)?;
    let to_balance = to
        .lamports()
        .checked_add(amount)
        .ok_or(CrowdfundingError::ArithmeticOverflow)?;

    **from.try_borrow_mut_lamports()? = from_balance;
    **to.try_borrow_mut_lamports()? = to_balance;
    Ok(())
}

/// Выделяет аккаунт кампании на PDA и передает его программе.
///
/// Если на адрес уже кто-то перевел лампорты, create_account не сработает,
/// поэтому в этом случае доплачиваем ренту и делаем allocate + assign.
pub fn allocate_campaign_account<'info>(
    payer: &AccountInfo<'info>,
    campaign: &AccountInfo<'info>,
    system_program: &AccountInfo<'info>,
    signer_seeds: &[&[&[u8]]],
    rent_minimum: u64,
) -> Result<()> {
    let space = Campaign::ACCOUNT_SIZE as u64;
    let current_lamports = campaign.lamports();

    if current_lamports == 0 {
        let cpi_accounts = CreateAccount {
            from: payer.clone(),
            to: campaign.clone(),
        };
        let cpi_ctx =
            CpiContext::new_with_signer(system_program.clone(), cpi_accounts, signer_seeds);
        return create_account(cpi_ctx, rent_minimum, space, &crate::ID);
    }

    let shortfall = rent_shortfall(current_lamports, rent_minimum);
    if shortfall > 0 {
        transfer_sol(payer, campaign, shortfall, system_program)?;
    }

    let cpi_accounts = Allocate {
        account_to_allocate: campaign.clone(),
    };
    let cpi_ctx = CpiContext::new_with_signer(system_program.clone(), cpi_accounts, signer_seeds);
    allocate(cpi_ctx, space)?;

    let cpi_accounts = Assign {
        account_to_assign: campaign.clone(),
    };
    let cpi_ctx = CpiContext::new_with_signer(system_program.clone(), cpi_accounts, signer_seeds);
    assign(cpi_ctx, &crate::ID)
}

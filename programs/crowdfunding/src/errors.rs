use anchor_lang::prelude::*;

#[error_code]
pub enum CrowdfundingError {
    #[msg("Название кампании слишком длинное (максимум 64 байта)")]
    NameTooLong,
    #[msg("Описание кампании слишком длинное (максимум 512 байт)")]
    DescriptionTooLong,
    #[msg("Сумма должна быть больше нуля")]
    ZeroAmount,
    #[msg("Вы не являетесь администратором этой кампании")]
    Unauthorized,
    #[msg("Кампания по этому адресу уже существует")]
    AlreadyExists,
    #[msg("Недостаточно средств на балансе кампании")]
    InsufficientFunds,
    #[msg("Недостаточно средств у жертвователя")]
    InsufficientDonorFunds,
    #[msg("Недостаточно средств для оплаты ренты аккаунта кампании")]
    AllocationFailed,
    #[msg("Арифметическое переполнение")]
    ArithmeticOverflow,
    #[msg("Не удалось вычислить адрес PDA")]
    DerivationExhausted,
}

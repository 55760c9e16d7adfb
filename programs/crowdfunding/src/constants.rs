/// Константы, используемые в программе

/// Семя для PDA кампании (namespace tag)
pub const CAMPAIGN_SEED: &[u8] = b"CAMPAIGN_DEMO";

// Ограничения для текстовых полей кампании (в байтах UTF-8)
pub const MAX_NAME_LENGTH: usize = 64;
pub const MAX_DESCRIPTION_LENGTH: usize = 512;

/// Размер дискриминатора Anchor перед данными аккаунта
pub const DISCRIMINATOR_SIZE: usize = 8;

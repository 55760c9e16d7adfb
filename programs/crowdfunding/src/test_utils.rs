use anchor_lang::prelude::*;
use anchor_lang::system_program;
use crate::state::Campaign;

/// Аккаунт в памяти для тестов без рантайма
pub struct TestAccount {
    pub key: Pubkey,
    pub owner: Pubkey,
    pub lamports: u64,
    pub data: Vec<u8>,
    pub is_signer: bool,
}

impl TestAccount {
    /// Кошелек пользователя: системный аккаунт без данных
    pub fn wallet(key: Pubkey, lamports: u64) -> Self {
        Self {
            key,
            owner: system_program::ID,
            lamports,
            data: Vec::new(),
            is_signer: true,
        }
    }

    /// Выделенный аккаунт кампании, еще не записанный
    pub fn campaign(key: Pubkey, lamports: u64) -> Self {
        Self {
            key,
            owner: crate::ID,
            lamports,
            data: vec![0; Campaign::ACCOUNT_SIZE],
            is_signer: false,
        }
    }

    /// Читает записанную кампанию из данных аккаунта
    pub fn record(&self) -> Campaign {
        Campaign::try_deserialize(&mut &self.data[..]).unwrap()
    }

    pub fn info(&mut self) -> AccountInfo<'_> {
        AccountInfo::new(
            &self.key,
            self.is_signer,
            true,
            &mut self.lamports,
            &mut self.data,
            &self.owner,
            false,
            0,
        )
    }
}

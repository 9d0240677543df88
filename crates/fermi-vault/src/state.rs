//! Client-side views of the vault program accounts.
//!
//! On-chain account data is the 8-byte Anchor discriminator followed by the
//! borsh fields below. Parsing checks the length before touching the data
//! and rejects anything that does not consume the buffer exactly.

use borsh::{BorshDeserialize, BorshSerialize};
use solana_sdk::pubkey::Pubkey;

use crate::{Error, Result};

/// Anchor account discriminator length.
pub const DISCRIMINATOR_LEN: usize = 8;

/// Per-mint vault record: fund-amount bookkeeping plus the program
/// whitelisted to take custody funds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct VaultState {
    pub token_mint: Pubkey,
    pub whitelisted_program: Pubkey,
    pub total_deposited: u64,
}

impl VaultState {
    pub fn from_account_data(data: &[u8]) -> Result<Self> {
        parse_account(data, "vault state")
    }
}

/// Per-(user, vault) deposit record, created on first deposit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct UserState {
    pub owner: Pubkey,
    pub vault_state: Pubkey,
    pub deposited: u64,
}

impl UserState {
    pub fn from_account_data(data: &[u8]) -> Result<Self> {
        parse_account(data, "user state")
    }
}

fn parse_account<T: BorshDeserialize>(data: &[u8], what: &str) -> Result<T> {
    if data.len() < DISCRIMINATOR_LEN {
        return Err(Error::InvalidAccountData(format!(
            "{what} account data too small: {} bytes",
            data.len()
        )));
    }
    T::try_from_slice(&data[DISCRIMINATOR_LEN..])
        .map_err(|e| Error::InvalidAccountData(format!("{what}: {e}")))
}

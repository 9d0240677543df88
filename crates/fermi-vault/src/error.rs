//! Error types for the vault client.

use solana_sdk::pubkey::Pubkey;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// RPC-level failure reaching the ledger. The caller's retry policy
    /// applies; this client performs none.
    #[error("rpc transport error: {0}")]
    Rpc(#[from] solana_client::client_error::ClientError),

    /// The derived account does not exist on-chain yet.
    #[error("account not found: {0}")]
    AccountNotFound(Pubkey),

    /// On-chain account data did not match the expected layout.
    #[error("invalid account data: {0}")]
    InvalidAccountData(String),

    #[error(transparent)]
    Core(#[from] fermi_core::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

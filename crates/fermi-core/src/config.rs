//! Configuration for the Fermi clients.

use crate::{Error, Result};
use solana_sdk::pubkey::Pubkey;
use std::env;

/// Default sequencer API base URL.
pub const DEFAULT_SEQUENCER_URL: &str = "https://api.fermidex.com";

/// Default Solana RPC endpoint.
pub const DEFAULT_RPC_URL: &str = "https://api.devnet.solana.com";

/// Deployed vault program.
pub const DEFAULT_VAULT_PROGRAM_ID: &str = "CVB232NjzFcJUAcaEsbqTTAwGah37MYor57Vy97CCEx2";

/// Program whitelisted to take custody funds (the Fermi authority).
pub const DEFAULT_WHITELISTED_PROGRAM: &str = "8bHSuk6dpjquTw44vwr3sLukDSMLNkQLTcttGtC5pJtb";

/// Client configuration.
#[derive(Debug, Clone)]
pub struct FermiConfig {
    pub sequencer: SequencerConfig,
    pub solana: SolanaConfig,
    pub vault: VaultConfig,
}

#[derive(Debug, Clone)]
pub struct SequencerConfig {
    pub base_url: String,
}

#[derive(Debug, Clone)]
pub struct SolanaConfig {
    pub rpc_url: String,
}

#[derive(Debug, Clone)]
pub struct VaultConfig {
    pub program_id: Pubkey,
    pub whitelisted_program: Pubkey,
}

impl FermiConfig {
    /// Load configuration from environment variables, falling back to the
    /// deployed defaults.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Self {
            sequencer: SequencerConfig {
                base_url: env::var("FERMI_SEQUENCER_URL")
                    .unwrap_or_else(|_| DEFAULT_SEQUENCER_URL.to_string()),
            },
            solana: SolanaConfig {
                rpc_url: env::var("SOLANA_RPC_URL")
                    .unwrap_or_else(|_| DEFAULT_RPC_URL.to_string()),
            },
            vault: VaultConfig {
                program_id: parse_pubkey_var(
                    "FERMI_VAULT_PROGRAM_ID",
                    DEFAULT_VAULT_PROGRAM_ID,
                )?,
                whitelisted_program: parse_pubkey_var(
                    "FERMI_WHITELISTED_PROGRAM",
                    DEFAULT_WHITELISTED_PROGRAM,
                )?,
            },
        })
    }
}

fn parse_pubkey_var(name: &str, default: &str) -> Result<Pubkey> {
    let value = env::var(name).unwrap_or_else(|_| default.to_string());
    value.parse().map_err(|_| Error::Config {
        message: format!("{name} is not a valid base-58 public key: {value}"),
    })
}

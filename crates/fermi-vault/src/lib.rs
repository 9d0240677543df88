//! On-chain custody client for the Fermi vault program.
//!
//! Builds the vault program's instructions from deterministically derived
//! addresses (see `fermi_core::custody`) and submits them over RPC. The
//! vault holds one mint's pooled funds; per-user balances live in lazily
//! created user state accounts.

pub mod client;
pub mod error;
pub mod instructions;
pub mod state;

pub use client::{VaultClient, VaultCreation};
pub use error::{Error, Result};
pub use state::{UserState, VaultState};

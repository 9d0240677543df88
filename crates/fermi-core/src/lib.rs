//! Fermi DEX protocol core.
//!
//! The canonical order-intent codec, the Ed25519 authentication layer, and
//! the custody address derivation shared by the sequencer and vault
//! clients. Everything here is a synchronous pure function over its inputs;
//! no shared mutable state, safe to call concurrently.

pub mod config;
pub mod custody;
pub mod error;
pub mod intent;
pub mod signing;

pub use config::FermiConfig;
pub use error::{Error, Result};
pub use intent::{CancelOrderIntent, OrderIntent, OrderIntentBuilder, OrderSide};
pub use signing::{IntentSigner, SignedCancelIntent, SignedOrderIntent};

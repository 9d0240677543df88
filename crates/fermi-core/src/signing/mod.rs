//! Authentication layer for order and cancel intents.
//!
//! Builds the exact byte sequence that gets signed (domain prefix plus
//! canonical encoding), signs it with the owner's Ed25519 key, and verifies
//! signatures against the same bytes.
//!
//! ```text
//! OrderIntent ──encode──► canonical bytes
//!                              │
//!            prefix ++ bytes = auth message
//!                              │
//! IntentSigner ──sign+verify──► SignedOrderIntent ──► SequencerClient
//! ```

pub mod domain;
pub mod signer;

pub use domain::{
    cancel_auth_message, order_auth_message, CANCEL_INTENT_PREFIX, ORDER_INTENT_PREFIX,
};
pub use signer::{IntentSigner, SignedCancelIntent, SignedOrderIntent};

//! REST client for the Fermi sequencer, the external matching service that
//! receives signed order intents and orders them into trades.
//!
//! The client owns transport only: encoding, signing, and validation happen
//! in `fermi-core` before anything reaches this crate.

pub mod client;
pub mod error;
pub mod types;

pub use client::SequencerClient;
pub use error::{Error, Result};
pub use types::{CancelOrderRequest, OrderPlacement, PlaceOrderRequest};

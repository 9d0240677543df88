//! Error types for the sequencer client.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// The service answered with a non-success code. The message is the
    /// service's own; whether to retry is the caller's decision.
    #[error("sequencer rejected request ({code}): {message}: {error}")]
    RemoteRejected {
        code: u16,
        message: String,
        error: String,
    },

    /// Network-level failure reaching the service. The caller's retry
    /// policy applies; this client performs none.
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    /// A success response did not match the documented shape.
    #[error("response decode error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Core(#[from] fermi_core::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

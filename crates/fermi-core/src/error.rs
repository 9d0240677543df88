//! Error types for the Fermi order intent protocol.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// Decode rejected the input: wrong span or an unknown enum byte.
    #[error("malformed intent: {reason}")]
    MalformedIntent { reason: String },

    /// Business-rule violation caught before the intent is encoded or
    /// signed.
    #[error("invalid order parameters: {message}")]
    InvalidOrderParameters { message: String },

    /// A freshly produced signature failed local verification. Indicates a
    /// key-handling bug; the envelope must never be submitted.
    #[error("signature failed local verification after signing")]
    SignatureIntegrity,

    #[error("configuration error: {message}")]
    Config { message: String },
}

pub type Result<T> = std::result::Result<T, Error>;

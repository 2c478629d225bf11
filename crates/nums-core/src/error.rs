//! Error types for NUMS core operations

use thiserror::Error;

/// Result type alias for NUMS core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for input normalization and parsing
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("Input must be a non-empty string")]
    InvalidInput,

    #[error("Invalid hex string")]
    InvalidHex,

    #[error("Hex string too long - maximum 32 bytes allowed, got {len} characters")]
    TooLong { len: usize },

    #[error("Invalid public key: {0}")]
    InvalidPublicKey(String),

    #[error("Unknown NUMS method: {0}")]
    UnknownMethod(String),
}

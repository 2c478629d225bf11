//! Error types for NUMS derivation

use thiserror::Error;

/// Result type for derivation and validation
pub type Result<T> = std::result::Result<T, CryptoError>;

/// Derivation errors
#[derive(Debug, Error)]
pub enum CryptoError {
    #[error(transparent)]
    Core(#[from] nums_core::Error),

    #[error("Curve error: {0}")]
    Curve(String),

    #[error("Tagged search exhausted after {attempts} attempts")]
    ExhaustedSearch { attempts: u64 },

    #[error("Secp256k1 error: {0}")]
    Secp256k1(#[from] secp256k1::Error),
}

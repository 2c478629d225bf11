//! NUMS Core Library
//!
//! Core data structures for deriving "nothing up my sleeve" secp256k1 keys.
//!
//! This crate provides:
//! - Hex scalar normalization and validation
//! - Scalar and x-only public key types
//! - Derivation method selector
//! - Shared constants

pub mod codec;
pub mod constants;
pub mod error;
pub mod types;

pub use codec::normalize_hex;
pub use constants::*;
pub use error::{Error, Result};
pub use types::{NumsMethod, PublicKeyX, ScalarHex};

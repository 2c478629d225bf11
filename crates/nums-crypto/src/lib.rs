//! NUMS Cryptographic Primitives
//!
//! This crate derives and verifies unspendable secp256k1 keys:
//! - Hiding point H, hashed from the curve generator
//! - Unknown-discrete-log keys: PK = H + rG
//! - Tagged-hash keys found by counter search
//! - Round-trip validation
//! - Taproot output scripts with a NUMS internal key

pub mod error;
pub mod hiding;
pub mod point;
pub mod script;
pub mod tagged;
pub mod unknown_dl;
pub mod validation;

pub use error::{CryptoError, Result};
pub use hiding::{hiding_point, hiding_point_x};
pub use point::{lift_x_even, sha256_digest, to_x_only_public_key, x_coordinate};
pub use script::nums_p2tr_script;
pub use tagged::{derive_from_tag, search_tagged_point, TaggedPoint};
pub use unknown_dl::{
    derive_from_text, derive_unknown_dl, derive_unknown_dl_scalar, scalar_from_text,
};
pub use validation::{validate_nums, validate_nums_bounded};

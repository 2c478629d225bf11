//! Hiding point generation
//!
//! H = lift_x(sha256(G uncompressed)) with the even-y convention. Nobody
//! knows log_G(H), which is what makes H + rG unspendable.

use crate::error::{CryptoError, Result};
use crate::point::{generator_uncompressed, lift_x_even, sha256_digest, x_coordinate};
use nums_core::PublicKeyX;
use secp256k1::PublicKey;

/// Compute the hiding point H
///
/// Recomputed on every call; the result depends only on the curve
/// parameters. Fails with [`CryptoError::Curve`] if the digest does not lift.
pub fn hiding_point() -> Result<PublicKey> {
    let digest = sha256_digest(&generator_uncompressed());
    let point = lift_x_even(&digest).ok_or_else(|| {
        CryptoError::Curve("Hash of the generator is not a valid x-coordinate".to_string())
    })?;

    tracing::trace!(x = %x_coordinate(&point), "computed hiding point");
    Ok(point)
}

/// x-coordinate of the hiding point
pub fn hiding_point_x() -> Result<PublicKeyX> {
    hiding_point().map(|h| x_coordinate(&h))
}

//! Curve point helpers
//!
//! Thin wrappers over secp256k1 shared by the hiding point, both derivation
//! methods and validation.

use crate::error::{CryptoError, Result};
use bitcoin::hashes::{sha256, Hash};
use nums_core::{PublicKeyX, EVEN_Y_PREFIX};
use secp256k1::constants::{CURVE_ORDER, GENERATOR_X, GENERATOR_Y};
use secp256k1::{PublicKey, Secp256k1, SecretKey, XOnlyPublicKey};

/// Compute SHA256 hash
pub fn sha256_digest(data: &[u8]) -> [u8; 32] {
    sha256::Hash::hash(data).to_byte_array()
}

/// SEC1 uncompressed encoding of the base point G (0x04 || x || y)
pub fn generator_uncompressed() -> [u8; 65] {
    let mut bytes = [0u8; 65];
    bytes[0] = 0x04;
    bytes[1..33].copy_from_slice(&GENERATOR_X);
    bytes[33..65].copy_from_slice(&GENERATOR_Y);
    bytes
}

/// Lift an x-coordinate to the curve point with even y
///
/// Equivalent to decoding `0x02 || x` as a compressed point. Returns `None`
/// when x is not below the field modulus or x³ + 7 has no square root.
pub fn lift_x_even(x: &[u8; 32]) -> Option<PublicKey> {
    let mut compressed = [0u8; 33];
    compressed[0] = EVEN_Y_PREFIX;
    compressed[1..].copy_from_slice(x);
    PublicKey::from_slice(&compressed).ok()
}

/// Extract the x-coordinate of a point
pub fn x_coordinate(point: &PublicKey) -> PublicKeyX {
    let (xonly, _parity) = point.x_only_public_key();
    PublicKeyX::from_bytes(xonly.serialize())
}

/// Lift a key to its even-y x-only public key
///
/// Fails when the x-coordinate is not on the curve.
pub fn to_x_only_public_key(key: &PublicKeyX) -> Result<XOnlyPublicKey> {
    Ok(XOnlyPublicKey::from_slice(key.as_bytes())?)
}

/// Reduce a big-endian 256-bit integer modulo the curve order
///
/// 2^256 < 2n, so at most one subtraction is needed.
pub fn reduce_mod_order(bytes: [u8; 32]) -> [u8; 32] {
    if bytes < CURVE_ORDER {
        return bytes;
    }

    let mut result = [0u8; 32];
    let mut borrow = 0i16;
    for i in (0..32).rev() {
        let mut diff = bytes[i] as i16 - CURVE_ORDER[i] as i16 - borrow;
        if diff < 0 {
            diff += 256;
            borrow = 1;
        } else {
            borrow = 0;
        }
        result[i] = diff as u8;
    }
    result
}

/// Multiply the generator by a big-endian scalar
///
/// The scalar is reduced modulo n first. A zero scalar yields `None`,
/// the point at infinity.
pub fn mul_generator(
    secp: &Secp256k1<secp256k1::All>,
    scalar: [u8; 32],
) -> Result<Option<PublicKey>> {
    let reduced = reduce_mod_order(scalar);
    if reduced.iter().all(|b| *b == 0) {
        return Ok(None);
    }

    let key = SecretKey::from_slice(&reduced)?;
    Ok(Some(PublicKey::from_secret_key(secp, &key)))
}

/// Add two points where the second may be the point at infinity
pub fn add_points(lhs: &PublicKey, rhs: Option<&PublicKey>) -> Result<PublicKey> {
    match rhs {
        None => Ok(*lhs),
        Some(rhs) => lhs
            .combine(rhs)
            .map_err(|_| CryptoError::Curve("Point addition yields the point at infinity".into())),
    }
}

//! Tagged-hash NUMS key search
//!
//! For counter = 0, 1, 2, ...: digest = sha256(utf8(tag) || le32(counter)),
//! and the first digest that lifts to an even-y curve point is the key.
//! Roughly half of all digests are valid x-coordinates, so the expected
//! number of attempts is about two.

use crate::error::{CryptoError, Result};
use crate::point::{lift_x_even, sha256_digest, x_coordinate};
use nums_core::{PublicKeyX, MAX_SEARCH_ATTEMPTS};

/// Result of a tagged search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaggedPoint {
    /// x-coordinate of the lifted point
    pub key: PublicKeyX,
    /// Counter value whose digest landed on the curve
    pub counter: u32,
}

/// Build the hashed message: utf8(tag) || le32(counter)
pub fn tagged_message(tag: &str, counter: u32) -> Vec<u8> {
    let mut message = Vec::with_capacity(tag.len() + 4);
    message.extend_from_slice(tag.as_bytes());
    message.extend_from_slice(&counter.to_le_bytes());
    message
}

/// Search for the first counter whose digest is a valid x-coordinate
///
/// `max_attempts` is capped at 2^32, the size of the counter space.
///
/// # Errors
/// [`CryptoError::ExhaustedSearch`] when no attempt succeeds.
pub fn search_tagged_point(tag: &str, max_attempts: u64) -> Result<TaggedPoint> {
    let limit = max_attempts.min(MAX_SEARCH_ATTEMPTS);

    let mut counter: u32 = 0;
    for _ in 0..limit {
        let digest = sha256_digest(&tagged_message(tag, counter));

        if let Some(point) = lift_x_even(&digest) {
            let key = x_coordinate(&point);
            tracing::debug!(tag, counter, pk = %key, "tagged search found NUMS key");
            return Ok(TaggedPoint { key, counter });
        }

        tracing::trace!(tag, counter, "digest is not a valid x-coordinate");
        counter = counter.wrapping_add(1);
    }

    Err(CryptoError::ExhaustedSearch { attempts: limit })
}

/// Derive the NUMS key for a tag
pub fn derive_from_tag(tag: &str) -> Result<PublicKeyX> {
    search_tagged_point(tag, MAX_SEARCH_ATTEMPTS).map(|found| found.key)
}

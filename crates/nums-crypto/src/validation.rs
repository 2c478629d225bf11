//! NUMS key validation
//!
//! Recomputes a key from its inputs and compares it with the claimed one.

use crate::error::Result;
use crate::tagged::search_tagged_point;
use crate::unknown_dl::derive_unknown_dl;
use nums_core::{NumsMethod, DEFAULT_TAG, MAX_SEARCH_ATTEMPTS};
use secp256k1::Secp256k1;

/// Validate that `pk` is the NUMS key for the given inputs
///
/// # Arguments
/// * `secp` - Secp256k1 context
/// * `r` - Hex scalar, used by [`NumsMethod::UnknownDlHidingKey`]
/// * `pk` - Claimed x-coordinate (compared case-insensitively)
/// * `method` - Derivation method
/// * `tag` - Tag for [`NumsMethod::Tag`], defaults to `"Labitbu"`
///
/// Empty `pk`, or empty `r` on the unknown-DL path, returns `Ok(false)`
/// without computing anything. A malformed non-empty `r` is an error.
pub fn validate_nums(
    secp: &Secp256k1<secp256k1::All>,
    r: &str,
    pk: &str,
    method: NumsMethod,
    tag: Option<&str>,
) -> Result<bool> {
    validate_nums_bounded(secp, r, pk, method, tag, MAX_SEARCH_ATTEMPTS)
}

/// [`validate_nums`] with the tagged search capped at `max_attempts`
pub fn validate_nums_bounded(
    secp: &Secp256k1<secp256k1::All>,
    r: &str,
    pk: &str,
    method: NumsMethod,
    tag: Option<&str>,
    max_attempts: u64,
) -> Result<bool> {
    if pk.is_empty() {
        return Ok(false);
    }

    let computed = match method {
        NumsMethod::Tag => search_tagged_point(tag.unwrap_or(DEFAULT_TAG), max_attempts)?.key,
        NumsMethod::UnknownDlHidingKey => {
            if r.is_empty() {
                return Ok(false);
            }
            derive_unknown_dl(secp, r)?
        }
    };

    let valid = computed.matches_hex(pk);
    if !valid {
        tracing::debug!(%method, expected = %computed, claimed = pk, "NUMS key mismatch");
    }
    Ok(valid)
}

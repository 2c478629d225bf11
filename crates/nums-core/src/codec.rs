//! Hex scalar normalization
//!
//! Scalars arrive as 1-64 hex characters, optionally `0x`-prefixed, and are
//! always used as exactly 64 lowercase, left-zero-padded characters.

use crate::constants::{HEX_LEN, HEX_PREFIX};
use crate::error::{Error, Result};

/// Normalize a hex scalar to 64 lowercase characters
///
/// Lowercases, strips an optional `0x` prefix, then validates and left-pads.
///
/// # Errors
/// * [`Error::InvalidInput`] if nothing remains after stripping the prefix
/// * [`Error::InvalidHex`] on any character outside `[0-9a-f]`
/// * [`Error::TooLong`] if more than 64 characters remain
pub fn normalize_hex(input: &str) -> Result<String> {
    let lowered = input.to_ascii_lowercase();
    let digits = lowered.strip_prefix(HEX_PREFIX).unwrap_or(&lowered);

    if digits.is_empty() {
        return Err(Error::InvalidInput);
    }

    if !digits.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f')) {
        return Err(Error::InvalidHex);
    }

    if digits.len() > HEX_LEN {
        return Err(Error::TooLong { len: digits.len() });
    }

    Ok(format!("{:0>width$}", digits, width = HEX_LEN))
}

/// Decode a normalized 64-character hex string into 32 bytes
pub(crate) fn decode_32(normalized: &str) -> Result<[u8; 32]> {
    let mut bytes = [0u8; 32];
    hex::decode_to_slice(normalized, &mut bytes).map_err(|_| Error::InvalidHex)?;
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_and_case_are_ignored() {
        let prefixed = normalize_hex("0xAB").unwrap();
        let plain = normalize_hex("ab").unwrap();

        assert_eq!(prefixed, plain);
        assert_eq!(prefixed.len(), 64);
        assert!(prefixed.ends_with("ab"));
        assert!(prefixed[..62].bytes().all(|b| b == b'0'));
    }

    #[test]
    fn test_uppercase_prefix() {
        assert_eq!(normalize_hex("0XFF").unwrap(), normalize_hex("ff").unwrap());
    }

    #[test]
    fn test_full_length_passes_through() {
        let full = "A".repeat(64);
        assert_eq!(normalize_hex(&full).unwrap(), "a".repeat(64));
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(normalize_hex(""), Err(Error::InvalidInput));
        assert_eq!(normalize_hex("0x"), Err(Error::InvalidInput));
    }

    #[test]
    fn test_invalid_characters() {
        assert_eq!(normalize_hex("zz"), Err(Error::InvalidHex));
        assert_eq!(normalize_hex(" ab"), Err(Error::InvalidHex));
        assert_eq!(normalize_hex("0x0x12"), Err(Error::InvalidHex));
        assert_eq!(normalize_hex("ab\u{e9}"), Err(Error::InvalidHex));
    }

    #[test]
    fn test_too_long() {
        let long = "1".repeat(65);
        assert_eq!(normalize_hex(&long), Err(Error::TooLong { len: 65 }));

        // The prefix does not count towards the limit
        let prefixed = format!("0x{}", "1".repeat(64));
        assert!(normalize_hex(&prefixed).is_ok());
    }

    #[test]
    fn test_decode_32() {
        let normalized = normalize_hex("0102").unwrap();
        let bytes = decode_32(&normalized).unwrap();
        assert_eq!(bytes[30], 0x01);
        assert_eq!(bytes[31], 0x02);
        assert!(bytes[..30].iter().all(|b| *b == 0));
    }
}

//! NUMS Type Definitions
//!
//! Scalars, x-only public keys and the derivation method selector.

use crate::codec::{decode_32, normalize_hex};
use crate::constants::{HEX_LEN, HEX_PREFIX};
use crate::error::{Error, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Derivation method for a NUMS key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum NumsMethod {
    /// PK = H + rG, with H a hash-derived point of unknown discrete log
    #[default]
    #[serde(rename = "UNKNOWN_DL_HIDING_KEY")]
    UnknownDlHidingKey,
    /// PK = lift_x(hash(tag || counter)) for the first counter that lands on the curve
    #[serde(rename = "TAGGED_HASH_KEY")]
    Tag,
}

impl NumsMethod {
    /// Wire name used in records and query parameters
    pub fn as_str(&self) -> &'static str {
        match self {
            NumsMethod::UnknownDlHidingKey => "UNKNOWN_DL_HIDING_KEY",
            NumsMethod::Tag => "TAGGED_HASH_KEY",
        }
    }
}

impl fmt::Display for NumsMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NumsMethod {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "unknown_dl_hiding_key" | "unknown-dl" | "unknown_dl" | "hiding" => {
                Ok(NumsMethod::UnknownDlHidingKey)
            }
            "tagged_hash_key" | "tag" | "tagged" => Ok(NumsMethod::Tag),
            _ => Err(Error::UnknownMethod(s.to_string())),
        }
    }
}

/// A 256-bit big-endian scalar, displayed as 64 lowercase hex characters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScalarHex([u8; 32]);

impl ScalarHex {
    /// Parse and normalize a 1-64 character hex scalar
    pub fn parse(input: &str) -> Result<Self> {
        let normalized = normalize_hex(input)?;
        decode_32(&normalized).map(Self)
    }

    /// Build a scalar from raw big-endian bytes
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Normalized hex representation
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Big-endian bytes of the scalar
    pub fn to_bytes(&self) -> [u8; 32] {
        self.0
    }

    /// Whether the scalar is zero
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|b| *b == 0)
    }
}

impl fmt::Display for ScalarHex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for ScalarHex {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// The 32-byte x-coordinate of a curve point
///
/// Always displayed as exactly 64 lowercase hex characters. The y coordinate
/// is implied by the even-y convention.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PublicKeyX([u8; 32]);

impl PublicKeyX {
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Parse exactly 64 hex characters (case-insensitive, optional `0x`)
    pub fn from_hex(input: &str) -> Result<Self> {
        let lowered = input.to_ascii_lowercase();
        let digits = lowered.strip_prefix(HEX_PREFIX).unwrap_or(&lowered);
        if digits.len() != HEX_LEN {
            return Err(Error::InvalidPublicKey(format!(
                "expected {} hex characters, got {}",
                HEX_LEN,
                digits.len()
            )));
        }

        let mut bytes = [0u8; 32];
        hex::decode_to_slice(digits, &mut bytes)
            .map_err(|e| Error::InvalidPublicKey(e.to_string()))?;
        Ok(Self(bytes))
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Case-insensitive comparison against a hex string
    pub fn matches_hex(&self, other: &str) -> bool {
        self.to_hex().eq_ignore_ascii_case(other)
    }
}

impl fmt::Display for PublicKeyX {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for PublicKeyX {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PublicKeyX({})", self.to_hex())
    }
}

impl FromStr for PublicKeyX {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl Serialize for PublicKeyX {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for PublicKeyX {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_wire_names() {
        assert_eq!(NumsMethod::UnknownDlHidingKey.to_string(), "UNKNOWN_DL_HIDING_KEY");
        assert_eq!(NumsMethod::Tag.to_string(), "TAGGED_HASH_KEY");

        let json = serde_json::to_string(&NumsMethod::Tag).unwrap();
        assert_eq!(json, "\"TAGGED_HASH_KEY\"");
        let parsed: NumsMethod = serde_json::from_str("\"UNKNOWN_DL_HIDING_KEY\"").unwrap();
        assert_eq!(parsed, NumsMethod::UnknownDlHidingKey);
    }

    #[test]
    fn test_method_from_str() {
        assert_eq!("TAGGED_HASH_KEY".parse::<NumsMethod>().unwrap(), NumsMethod::Tag);
        assert_eq!("tag".parse::<NumsMethod>().unwrap(), NumsMethod::Tag);
        assert_eq!(
            "Unknown-DL".parse::<NumsMethod>().unwrap(),
            NumsMethod::UnknownDlHidingKey
        );
        assert!(matches!(
            "schnorr".parse::<NumsMethod>(),
            Err(Error::UnknownMethod(_))
        ));
        assert_eq!(NumsMethod::default(), NumsMethod::UnknownDlHidingKey);
    }

    #[test]
    fn test_scalar_hex() {
        let scalar = ScalarHex::parse("0x01").unwrap();
        assert_eq!(scalar.to_hex().len(), 64);
        assert_eq!(scalar.to_string(), format!("{}01", "0".repeat(62)));
        assert_eq!(scalar.to_bytes()[31], 1);
        assert!(!scalar.is_zero());

        let zero = ScalarHex::parse("00").unwrap();
        assert!(zero.is_zero());
        assert_eq!(zero.to_bytes(), [0u8; 32]);

        let bytes = [0xabu8; 32];
        assert_eq!(ScalarHex::from_bytes(bytes).to_bytes(), bytes);
        assert_eq!(ScalarHex::from_bytes(bytes).to_hex(), "ab".repeat(32));

        assert_eq!(ScalarHex::parse("zz"), Err(Error::InvalidHex));
    }

    #[test]
    fn test_public_key_x_hex() {
        let hex_str = "50929B74C1A04954B78B4B6035E97A5E078A5A0F28EC96D547BFEE9ACE803AC0";
        let pk = PublicKeyX::from_hex(hex_str).unwrap();

        assert_eq!(pk.to_hex(), hex_str.to_lowercase());
        assert!(pk.matches_hex(hex_str));
        assert!(!pk.matches_hex("00"));
        assert!(PublicKeyX::from_hex("abcd").is_err());
        assert!(PublicKeyX::from_hex(&"g".repeat(64)).is_err());
    }

    #[test]
    fn test_public_key_x_serde() {
        let pk = PublicKeyX::from_bytes([7u8; 32]);
        let json = serde_json::to_string(&pk).unwrap();
        assert_eq!(json, format!("\"{}\"", "07".repeat(32)));

        let back: PublicKeyX = serde_json::from_str(&json).unwrap();
        assert_eq!(back, pk);
    }
}

//! NUMS: provably unspendable secp256k1 keys
//!
//! Two derivation methods are supported:
//! - [`NumsMethod::UnknownDlHidingKey`]: PK = H + rG, where H is hashed from
//!   the generator and has no known discrete log
//! - [`NumsMethod::Tag`]: PK is the first sha256(tag || le32(counter)) that is
//!   a valid x-coordinate
//!
//! Every key is an x-coordinate with the even-y convention.
//!
//! ```no_run
//! use nums::{NumsEngine, NumsMethod};
//!
//! let engine = NumsEngine::new();
//! let pk = engine.derive("deadbeef", NumsMethod::UnknownDlHidingKey, None)?;
//! assert!(engine.validate("deadbeef", &pk.to_hex(), NumsMethod::UnknownDlHidingKey, None)?);
//! # Ok::<(), nums::CryptoError>(())
//! ```

pub use nums_core::{
    normalize_hex, Error, NumsMethod, PublicKeyX, ScalarHex, DEFAULT_INPUT, DEFAULT_TAG,
    HIDING_POINT_X, MAX_SEARCH_ATTEMPTS,
};
pub use nums_crypto::{CryptoError, Result, TaggedPoint};

use bitcoin::ScriptBuf;
use secp256k1::{All, Secp256k1};

/// Derivation engine holding a secp256k1 context
///
/// Stateless apart from the context; every method is a pure function of its
/// arguments and the engine can be shared across threads.
#[derive(Debug, Clone)]
pub struct NumsEngine {
    secp: Secp256k1<All>,
}

impl Default for NumsEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl NumsEngine {
    pub fn new() -> Self {
        Self {
            secp: Secp256k1::new(),
        }
    }

    pub fn secp(&self) -> &Secp256k1<All> {
        &self.secp
    }

    /// Derive a NUMS key
    ///
    /// For [`NumsMethod::UnknownDlHidingKey`], `r_or_tag` is the hex scalar R.
    /// For [`NumsMethod::Tag`], `tag` is used when given, otherwise `r_or_tag`.
    pub fn derive(
        &self,
        r_or_tag: &str,
        method: NumsMethod,
        tag: Option<&str>,
    ) -> Result<PublicKeyX> {
        match method {
            NumsMethod::UnknownDlHidingKey => nums_crypto::derive_unknown_dl(&self.secp, r_or_tag),
            NumsMethod::Tag => nums_crypto::derive_from_tag(tag.unwrap_or(r_or_tag)),
        }
    }

    /// Recompute and compare; see [`nums_crypto::validate_nums`]
    pub fn validate(
        &self,
        r: &str,
        pk: &str,
        method: NumsMethod,
        tag: Option<&str>,
    ) -> Result<bool> {
        nums_crypto::validate_nums(&self.secp, r, pk, method, tag)
    }

    pub fn derive_from_tag(&self, tag: &str) -> Result<PublicKeyX> {
        nums_crypto::derive_from_tag(tag)
    }

    /// Hash free text to R and derive its unknown-DL key
    pub fn derive_from_text(&self, text: &str) -> Result<(ScalarHex, PublicKeyX)> {
        nums_crypto::derive_from_text(&self.secp, text)
    }

    pub fn hiding_point_x(&self) -> Result<PublicKeyX> {
        nums_crypto::hiding_point_x()
    }

    /// P2TR script with `pk` as internal key and no script tree
    pub fn p2tr_script(&self, pk: &PublicKeyX) -> Result<ScriptBuf> {
        nums_crypto::nums_p2tr_script(&self.secp, pk, None)
    }
}

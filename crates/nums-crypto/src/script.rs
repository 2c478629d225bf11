//! Taproot output scripts with a NUMS internal key
//!
//! Using a NUMS key as the taproot internal key disables the key path, so
//! the output can only be spent through its script tree.

use crate::error::Result;
use crate::point::to_x_only_public_key;
use bitcoin::{ScriptBuf, TapNodeHash};
use nums_core::PublicKeyX;
use secp256k1::{Secp256k1, Verification};

/// Build a P2TR script with `internal_key` as the untweaked internal key
///
/// Returns: OP_1 <32-byte tweaked output key>
pub fn nums_p2tr_script<C: Verification>(
    secp: &Secp256k1<C>,
    internal_key: &PublicKeyX,
    merkle_root: Option<TapNodeHash>,
) -> Result<ScriptBuf> {
    let xonly = to_x_only_public_key(internal_key)?;
    Ok(ScriptBuf::new_p2tr(secp, xonly, merkle_root))
}

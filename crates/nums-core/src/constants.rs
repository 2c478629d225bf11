//! NUMS Constants
//!
//! Defaults and protocol constants shared by every derivation path.

/// Tag used for the tagged-hash method when the caller supplies none
pub const DEFAULT_TAG: &str = "Labitbu";

/// Text fed into the unknown-DL method when no input is given
pub const DEFAULT_INPUT: &str = "unspendable";

/// Length of a normalized scalar or x-coordinate in hex characters
pub const HEX_LEN: usize = 64;

/// Optional prefix stripped from hex scalars
pub const HEX_PREFIX: &str = "0x";

/// SEC1 compressed-point prefix selecting the even y coordinate.
///
/// Both the hiding point and the tagged search lift their digests with this
/// prefix; the odd-y point is never considered.
pub const EVEN_Y_PREFIX: u8 = 0x02;

/// Upper bound on tagged-search attempts (the full 32-bit counter space)
pub const MAX_SEARCH_ATTEMPTS: u64 = 1 << 32;

/// x-coordinate of the hiding point H = lift_x(sha256(G uncompressed))
pub const HIDING_POINT_X: &str = "50929b74c1a04954b78b4b6035e97a5e078a5a0f28ec96d547bfee9ace803ac0";

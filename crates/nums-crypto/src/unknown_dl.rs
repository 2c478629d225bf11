//! Unknown-discrete-log hiding key derivation
//!
//! PK = H + rG. Anyone holding r can recompute PK, but nobody can produce
//! log_G(PK) because log_G(H) is unknown.

use crate::error::Result;
use crate::hiding::hiding_point;
use crate::point::{add_points, mul_generator, sha256_digest, x_coordinate};
use nums_core::{PublicKeyX, ScalarHex};
use secp256k1::Secp256k1;

/// Derive the NUMS key for a hex scalar
///
/// # Arguments
/// * `secp` - Secp256k1 context
/// * `r_hex` - 1 to 64 hex characters, optionally `0x`-prefixed
///
/// # Errors
/// Hex validation failures propagate unchanged.
pub fn derive_unknown_dl(secp: &Secp256k1<secp256k1::All>, r_hex: &str) -> Result<PublicKeyX> {
    let scalar = ScalarHex::parse(r_hex)?;
    derive_unknown_dl_scalar(secp, &scalar)
}

/// Derive the NUMS key for an already normalized scalar
///
/// Scalars at or above the curve order are reduced; r = 0 yields H itself.
pub fn derive_unknown_dl_scalar(
    secp: &Secp256k1<secp256k1::All>,
    scalar: &ScalarHex,
) -> Result<PublicKeyX> {
    let h = hiding_point()?;
    let r_g = mul_generator(secp, scalar.to_bytes())?;
    let pk = add_points(&h, r_g.as_ref())?;

    let key = x_coordinate(&pk);
    tracing::debug!(r = %scalar, pk = %key, "derived unknown-DL NUMS key");
    Ok(key)
}

/// Map free text to a scalar: r = sha256(utf8(text))
pub fn scalar_from_text(text: &str) -> ScalarHex {
    ScalarHex::from_bytes(sha256_digest(text.as_bytes()))
}

/// Hash text to a scalar and derive its NUMS key
pub fn derive_from_text(
    secp: &Secp256k1<secp256k1::All>,
    text: &str,
) -> Result<(ScalarHex, PublicKeyX)> {
    let scalar = scalar_from_text(text);
    let key = derive_unknown_dl_scalar(secp, &scalar)?;
    Ok((scalar, key))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CryptoError;
    use crate::validation::validate_nums;
    use nums_core::{Error, NumsMethod, HIDING_POINT_X};
    use proptest::prelude::*;

    #[test]
    fn test_zero_scalar_yields_hiding_point() {
        let secp = Secp256k1::new();
        let zero = "00".repeat(32);
        assert_eq!(derive_unknown_dl(&secp, &zero).unwrap().to_hex(), HIDING_POINT_X);
        assert_eq!(derive_unknown_dl(&secp, "0").unwrap().to_hex(), HIDING_POINT_X);
    }

    #[test]
    fn test_known_scalars() {
        let secp = Secp256k1::new();
        assert_eq!(
            derive_unknown_dl(&secp, "01").unwrap().to_hex(),
            "337b7285fc31a330c3e05d10c1cbbc009bf37c9c5dcf192adfd221bc8450d79a"
        );
        assert_eq!(
            derive_unknown_dl(&secp, "0xAB").unwrap(),
            derive_unknown_dl(&secp, "ab").unwrap()
        );
    }

    #[test]
    fn test_scalar_reduced_modulo_order() {
        let secp = Secp256k1::new();
        let n = "fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141";
        let n_plus_one = "fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364142";

        assert_eq!(derive_unknown_dl(&secp, n).unwrap().to_hex(), HIDING_POINT_X);
        assert_eq!(
            derive_unknown_dl(&secp, n_plus_one).unwrap(),
            derive_unknown_dl(&secp, "1").unwrap()
        );
    }

    #[test]
    fn test_invalid_hex_propagates() {
        let secp = Secp256k1::new();
        assert!(matches!(
            derive_unknown_dl(&secp, ""),
            Err(CryptoError::Core(Error::InvalidInput))
        ));
        assert!(matches!(
            derive_unknown_dl(&secp, "zz"),
            Err(CryptoError::Core(Error::InvalidHex))
        ));
        assert!(matches!(
            derive_unknown_dl(&secp, &"a".repeat(65)),
            Err(CryptoError::Core(Error::TooLong { len: 65 }))
        ));
    }

    #[test]
    fn test_text_to_scalar() {
        let secp = Secp256k1::new();
        let (scalar, key) = derive_from_text(&secp, "unspendable").unwrap();

        assert_eq!(
            scalar.to_hex(),
            "811c0db9302e9ec042b3dedb0c72361f08c866aeb26f38d4d959b205ef0a04b9"
        );
        assert_eq!(
            key.to_hex(),
            "08335b42143dd67da2ec8cb8b9108777c351b47993bba2a537a04bf72eb7396a"
        );
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn prop_output_is_64_lowercase_hex(r in "[0-9a-fA-F]{1,64}") {
            let secp = Secp256k1::new();
            let key = derive_unknown_dl(&secp, &r).unwrap().to_hex();
            prop_assert_eq!(key.len(), 64);
            prop_assert!(key.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f')));
        }

        #[test]
        fn prop_derived_key_validates(r in "(0x)?[0-9a-fA-F]{1,64}") {
            let secp = Secp256k1::new();
            let key = derive_unknown_dl(&secp, &r).unwrap().to_hex();
            let valid = validate_nums(&secp, &r, &key, NumsMethod::UnknownDlHidingKey, None);
            prop_assert!(valid.unwrap());
        }

        #[test]
        fn prop_distinct_scalars_give_distinct_keys(
            a in any::<[u8; 32]>(),
            b in any::<[u8; 32]>(),
        ) {
            prop_assume!(a != b);
            let secp = Secp256k1::new();
            let ka = derive_unknown_dl_scalar(&secp, &ScalarHex::from_bytes(a)).unwrap();
            let kb = derive_unknown_dl_scalar(&secp, &ScalarHex::from_bytes(b)).unwrap();
            prop_assert_ne!(ka, kb);
        }
    }
}

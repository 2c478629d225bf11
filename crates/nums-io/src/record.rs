//! NUMS records and request resolution
//!
//! A record is the shareable form of a NUMS key: the text it came from,
//! the scalar R, the key PK, and the method and tag used. A request is the
//! loosely specified set of parameters a caller hands in (any of input, R,
//! PK, method, tag), resolved into a record.

use crate::config::NumsConfig;
use crate::error::Result;
use nums::NumsEngine;
use nums_core::{NumsMethod, ScalarHex};
use nums_crypto::{scalar_from_text, search_tagged_point, validate_nums_bounded};
use serde::{Deserialize, Serialize};

/// A NUMS key together with the inputs that reproduce it
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NumsRecord {
    /// Free text the scalar or tag was taken from
    #[serde(default)]
    pub input: String,

    /// Hex scalar R (empty for the tagged method)
    #[serde(rename = "R", default)]
    pub r: String,

    /// x-only public key
    #[serde(rename = "PK", default)]
    pub pk: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<NumsMethod>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
}

impl NumsRecord {
    /// Method of this record, defaulting to unknown-DL
    pub fn method(&self) -> NumsMethod {
        self.method.unwrap_or_default()
    }

    /// Tag a tagged record was derived from
    ///
    /// The input when present, then the explicit tag, then the configured default.
    pub fn resolved_tag<'a>(&'a self, config: &'a NumsConfig) -> &'a str {
        [self.input.as_str(), self.tag.as_deref().unwrap_or_default()]
            .into_iter()
            .find(|s| !s.is_empty())
            .unwrap_or(config.default_tag.as_str())
    }

    /// Check that PK is reproduced by R (or by the tag)
    ///
    /// The tag search is capped by `config.max_search_attempts`.
    pub fn verify(&self, engine: &NumsEngine, config: &NumsConfig) -> Result<bool> {
        let tag = match self.method() {
            NumsMethod::Tag => Some(self.resolved_tag(config)),
            NumsMethod::UnknownDlHidingKey => None,
        };
        Ok(validate_nums_bounded(
            engine.secp(),
            &self.r,
            &self.pk,
            self.method(),
            tag,
            config.max_search_attempts,
        )?)
    }

    /// Derive a record from free text
    ///
    /// Unknown-DL: R = sha256(text). Tagged: the text is the tag.
    pub fn from_input(
        engine: &NumsEngine,
        config: &NumsConfig,
        text: &str,
        method: NumsMethod,
    ) -> Result<Self> {
        match method {
            NumsMethod::UnknownDlHidingKey => {
                let (r, pk) = engine.derive_from_text(text)?;
                Ok(Self {
                    input: text.to_string(),
                    r: r.to_string(),
                    pk: pk.to_hex(),
                    method: Some(method),
                    tag: None,
                })
            }
            NumsMethod::Tag => Self::from_tag(config, text, text),
        }
    }

    /// Derive a record from a hex scalar
    pub fn from_scalar(engine: &NumsEngine, r: &str) -> Result<Self> {
        let scalar = ScalarHex::parse(r)?;
        let pk = nums_crypto::derive_unknown_dl_scalar(engine.secp(), &scalar)?;
        Ok(Self {
            input: String::new(),
            r: scalar.to_string(),
            pk: pk.to_hex(),
            method: Some(NumsMethod::UnknownDlHidingKey),
            tag: None,
        })
    }

    /// Derive a fresh record
    ///
    /// Unknown-DL draws a random 32-byte R. Tagged has no randomness and
    /// derives from the configured default tag.
    pub fn random(engine: &NumsEngine, config: &NumsConfig, method: NumsMethod) -> Result<Self> {
        match method {
            NumsMethod::UnknownDlHidingKey => {
                let bytes: [u8; 32] = rand::random();
                Self::from_scalar(engine, &ScalarHex::from_bytes(bytes).to_string())
            }
            NumsMethod::Tag => Self::from_tag(config, "", &config.default_tag),
        }
    }

    fn from_tag(config: &NumsConfig, input: &str, tag: &str) -> Result<Self> {
        let found = search_tagged_point(tag, config.max_search_attempts)?;
        Ok(Self {
            input: input.to_string(),
            r: String::new(),
            pk: found.key.to_hex(),
            method: Some(NumsMethod::Tag),
            tag: Some(tag.to_string()),
        })
    }
}

/// Caller-supplied parameters, any of which may be missing
///
/// Empty strings count as missing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NumsRequest {
    pub input: Option<String>,
    pub r: Option<String>,
    pub pk: Option<String>,
    pub method: Option<NumsMethod>,
    pub tag: Option<String>,
}

impl NumsRequest {
    /// Resolve into a record
    ///
    /// 1. input and PK: R is hashed from input (or input is the tag); PK is lowercased
    /// 2. R and PK: taken as given
    /// 3. PK alone: kept with an empty R
    /// 4. nothing usable: a record is derived from the configured default input
    pub fn resolve(&self, engine: &NumsEngine, config: &NumsConfig) -> Result<NumsRecord> {
        let method = self.method.unwrap_or(config.default_method);
        let input = non_empty(&self.input);
        let r = non_empty(&self.r);
        let pk = non_empty(&self.pk);

        let tag = match method {
            NumsMethod::Tag => Some(
                input
                    .or(non_empty(&self.tag))
                    .unwrap_or(config.default_tag.as_str())
                    .to_string(),
            ),
            NumsMethod::UnknownDlHidingKey => None,
        };

        let record = match (input, r, pk) {
            (Some(input), _, Some(pk)) => {
                let r = match method {
                    NumsMethod::UnknownDlHidingKey => scalar_from_text(input).to_string(),
                    NumsMethod::Tag => String::new(),
                };
                NumsRecord {
                    input: input.to_string(),
                    r,
                    pk: pk.to_lowercase(),
                    method: Some(method),
                    tag,
                }
            }
            (None, Some(r), Some(pk)) => NumsRecord {
                input: String::new(),
                r: r.to_string(),
                pk: pk.to_string(),
                method: Some(method),
                tag,
            },
            (None, None, Some(pk)) => NumsRecord {
                input: String::new(),
                r: String::new(),
                pk: pk.to_string(),
                method: Some(method),
                tag,
            },
            _ => {
                tracing::debug!("request has no PK, deriving from default input");
                NumsRecord::from_input(engine, config, &config.default_input, method)?
            }
        };

        Ok(record)
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

//! Configuration for NUMS derivation defaults
//!
//! Loaded from a JSON file; every field is optional and falls back to its
//! default. Environment variables override file values.

use crate::error::{IoError, Result};
use nums_core::{NumsMethod, DEFAULT_INPUT, DEFAULT_TAG, MAX_SEARCH_ATTEMPTS};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const ENV_DEFAULT_TAG: &str = "NUMS_DEFAULT_TAG";
pub const ENV_DEFAULT_INPUT: &str = "NUMS_DEFAULT_INPUT";
pub const ENV_METHOD: &str = "NUMS_METHOD";
pub const ENV_MAX_SEARCH_ATTEMPTS: &str = "NUMS_MAX_SEARCH_ATTEMPTS";

/// Derivation defaults
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NumsConfig {
    /// Tag used by the tagged-hash method when none is given
    pub default_tag: String,

    /// Text hashed into R when no input is given
    pub default_input: String,

    /// Method used when a request does not name one
    pub default_method: NumsMethod,

    /// Cap on tagged-search attempts
    pub max_search_attempts: u64,
}

impl Default for NumsConfig {
    fn default() -> Self {
        Self {
            default_tag: DEFAULT_TAG.to_string(),
            default_input: DEFAULT_INPUT.to_string(),
            default_method: NumsMethod::default(),
            max_search_attempts: MAX_SEARCH_ATTEMPTS,
        }
    }
}

impl NumsConfig {
    /// Load configuration from a JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&json)?;
        config.validate()?;
        Ok(config)
    }

    /// Overlay `NUMS_*` environment variables
    pub fn with_env(self) -> Result<Self> {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Overlay values from an arbitrary lookup, keyed by environment variable name
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(tag) = lookup(ENV_DEFAULT_TAG) {
            self.default_tag = tag;
        }
        if let Some(input) = lookup(ENV_DEFAULT_INPUT) {
            self.default_input = input;
        }
        if let Some(method) = lookup(ENV_METHOD) {
            self.default_method = method.parse()?;
        }
        if let Some(attempts) = lookup(ENV_MAX_SEARCH_ATTEMPTS) {
            self.max_search_attempts = attempts.trim().parse().map_err(|e| {
                IoError::InvalidConfig(format!("{}={}: {}", ENV_MAX_SEARCH_ATTEMPTS, attempts, e))
            })?;
        }

        self.validate()?;
        Ok(self)
    }

    fn validate(&self) -> Result<()> {
        if self.max_search_attempts == 0 {
            return Err(IoError::InvalidConfig(
                "max_search_attempts must be at least 1".to_string(),
            ));
        }
        if self.max_search_attempts > MAX_SEARCH_ATTEMPTS {
            return Err(IoError::InvalidConfig(format!(
                "max_search_attempts cannot exceed {}",
                MAX_SEARCH_ATTEMPTS
            )));
        }
        Ok(())
    }
}

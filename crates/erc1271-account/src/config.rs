//! Validator configuration from JSON or environment variables.

use serde::{Deserialize, Serialize};
use std::env;
use thiserror::Error;

pub use crate::domain::restrictions::{EmptyRestrictions, RestrictionsPolicy};

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {var}: {value:?}")]
    InvalidValue { var: &'static str, value: String },

    #[error("Invalid configuration JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Complete validator configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidatorConfig {
    /// How restrictions payloads on login key signatures are decoded.
    pub restrictions: RestrictionsPolicy,
}

impl ValidatorConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `ERC1271_EMPTY_RESTRICTIONS`: `malformed` (default) or `no-expiry`
    /// - `ERC1271_STRICT_RESTRICTIONS_LENGTH`: `true`/`1` to require exactly one word
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(value) = lookup("ERC1271_EMPTY_RESTRICTIONS") {
            config.restrictions.empty_restrictions = parse_empty_restrictions(&value)?;
        }

        if let Some(value) = lookup("ERC1271_STRICT_RESTRICTIONS_LENGTH") {
            config.restrictions.strict_length =
                parse_bool("ERC1271_STRICT_RESTRICTIONS_LENGTH", &value)?;
        }

        Ok(config)
    }

    /// Parse a JSON document; missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}

fn parse_empty_restrictions(value: &str) -> Result<EmptyRestrictions, ConfigError> {
    match value.to_lowercase().as_str() {
        "malformed" => Ok(EmptyRestrictions::Malformed),
        "no-expiry" | "no_expiry" => Ok(EmptyRestrictions::NoExpiry),
        _ => Err(ConfigError::InvalidValue {
            var: "ERC1271_EMPTY_RESTRICTIONS",
            value: value.to_string(),
        }),
    }
}

fn parse_bool(var: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.to_lowercase().as_str() {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            var,
            value: value.to_string(),
        }),
    }
}

//! Configuration schema definitions

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Root configuration schema
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConfigSchema {
    /// Remote catalog API settings
    #[serde(default)]
    pub api: ApiConfig,

    /// Ingredient search settings
    #[serde(default)]
    pub search: SearchConfig,
}

/// Remote catalog API settings
///
/// Every field is optional; unset fields keep the client's defaults.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ApiConfig {
    /// Base URL, without the API key segment
    #[serde(default)]
    pub base_url: Option<String>,

    /// API key path segment
    #[serde(default)]
    pub api_key: Option<String>,

    /// Request timeout in seconds
    #[serde(default)]
    pub timeout_secs: Option<u64>,

    /// Environment name: `development` (also `dev` or `local`) or `production`; anything else is production
    #[serde(default)]
    pub environment: Option<String>,
}

/// Ingredient search settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Issue all per-ingredient lookups at once instead of one by one
    #[serde(default)]
    pub concurrent: bool,

    /// Timeout applied to each per-ingredient lookup, in seconds
    #[serde(default = "default_per_call_timeout_secs")]
    pub per_call_timeout_secs: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            concurrent: false,
            per_call_timeout_secs: default_per_call_timeout_secs(),
        }
    }
}

fn default_per_call_timeout_secs() -> u64 {
    15
}

impl ConfigSchema {
    /// Reject values that would make every request fail
    pub fn validate(&self) -> Result<()> {
        if self.api.timeout_secs == Some(0) {
            return Err(Error::invalid_config("[api] timeout_secs cannot be zero")
                .with_suggestion("Remove the key to use the default of 30 seconds"));
        }
        if self.search.per_call_timeout_secs == 0 {
            return Err(Error::invalid_config("[search] per_call_timeout_secs cannot be zero")
                .with_suggestion("Remove the key to use the default of 15 seconds"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_file_keeps_defaults() {
        let schema: ConfigSchema = toml::from_str(
            r#"
            [api]
            api_key = "9973533"
            "#,
        )
        .unwrap();

        assert_eq!(schema.api.api_key.as_deref(), Some("9973533"));
        assert!(schema.api.base_url.is_none());
        assert!(!schema.search.concurrent);
        assert_eq!(schema.search.per_call_timeout_secs, 15);
        assert!(schema.validate().is_ok());
    }

    #[test]
    fn test_zero_timeouts_are_rejected() {
        let search: ConfigSchema = toml::from_str("[search]\nper_call_timeout_secs = 0").unwrap();
        let err = search.validate().unwrap_err();
        assert_eq!(err.code, crate::ErrorCode::ConfigValidationError);
        assert!(err.message.contains("per_call_timeout_secs"));

        let api: ConfigSchema = toml::from_str("[api]\ntimeout_secs = 0").unwrap();
        assert!(api.validate().unwrap_err().message.contains("timeout_secs"));
    }
}

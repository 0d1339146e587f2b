//! Configuration for the MealDB API client
//!
//! Defaults target the public catalog with the shared test key. A
//! `mealdb.toml` file and environment variables can override them, in that
//! order.

use crate::error::{ApiError, ApiResult};
use mealdb_core::config::ApiConfig;
use mealdb_core::circuit::CircuitBreakerConfig;
use mealdb_core::rate_limit::RateLimitConfig;
use mealdb_core::retry::RetryConfig;
use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;

/// Public catalog base URL (the API key segment is appended per request)
const DEFAULT_BASE_URL: &str = "https://www.themealdb.com/api/json/v1";

/// Shared test key accepted by the public catalog
const DEFAULT_API_KEY: &str = "1";

/// Default request timeout
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Environment types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local mock or self-hosted catalog
    Development,
    /// Public catalog
    #[default]
    Production,
}

impl Environment {
    /// Parse an environment name; unknown names mean production
    #[must_use]
    pub fn parse(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "development" | "dev" | "local" => Self::Development,
            _ => Self::Production,
        }
    }

    /// Read `MEALDB_ENV`
    #[must_use]
    pub fn from_env() -> Self {
        Self::parse(&env::var("MEALDB_ENV").unwrap_or_default())
    }

    fn retry(self) -> RetryConfig {
        match self {
            Self::Development => RetryConfig::quick(),
            Self::Production => RetryConfig::default(),
        }
    }

    fn rate_limit(self) -> RateLimitConfig {
        match self {
            // More lenient against a local mock
            Self::Development => RateLimitConfig::per_minute(1000),
            Self::Production => RateLimitConfig::per_minute(100),
        }
    }
}

/// Client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Catalog base URL, without the API key segment
    pub base_url: String,
    /// API key path segment
    pub api_key: String,
    /// Request timeout
    #[serde(with = "duration_secs")]
    pub timeout: Duration,
    /// Retry configuration
    pub retry: RetryConfig,
    /// Rate limit configuration
    pub rate_limit: RateLimitConfig,
    /// Circuit breaker configuration
    pub circuit_breaker: CircuitBreakerConfig,
    /// Current environment
    pub environment: Environment,
}

mod duration_secs {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        duration.as_secs().serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        let secs = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(secs))
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::for_environment(Environment::Production)
    }
}

impl ClientConfig {
    fn for_environment(environment: Environment) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: DEFAULT_API_KEY.to_string(),
            timeout: DEFAULT_TIMEOUT,
            retry: environment.retry(),
            rate_limit: environment.rate_limit(),
            circuit_breaker: CircuitBreakerConfig::default(),
            environment,
        }
    }

    /// Create configuration from defaults and environment variables
    pub fn from_env() -> ApiResult<Self> {
        Self::default().with_env_overrides()
    }

    /// Create development configuration (local catalog on port 8080)
    #[must_use]
    pub fn development() -> Self {
        Self {
            base_url: "http://localhost:8080/api/json/v1".to_string(),
            timeout: Duration::from_secs(10),
            ..Self::for_environment(Environment::Development)
        }
    }

    /// Create production configuration
    #[must_use]
    pub fn production() -> Self {
        Self::for_environment(Environment::Production)
    }

    /// Apply the `[api]` section of a config file
    ///
    /// The environment is applied first so that its retry and rate-limit
    /// presets do not clobber the explicit fields.
    #[must_use]
    pub fn with_file(mut self, file: &ApiConfig) -> Self {
        if let Some(ref name) = file.environment {
            let environment = Environment::parse(name);
            self.environment = environment;
            self.retry = environment.retry();
            self.rate_limit = environment.rate_limit();
        }
        if let Some(ref url) = file.base_url {
            self.base_url.clone_from(url);
        }
        if let Some(ref key) = file.api_key {
            self.api_key.clone_from(key);
        }
        if let Some(secs) = file.timeout_secs {
            self.timeout = Duration::from_secs(secs);
        }
        self
    }

    /// Apply environment variable overrides
    ///
    /// - `MEALDB_ENV`: development/production
    /// - `MEALDB_API_URL`: catalog base URL
    /// - `MEALDB_API_KEY`: API key path segment
    /// - `MEALDB_TIMEOUT_SECS`: request timeout in seconds
    pub fn with_env_overrides(self) -> ApiResult<Self> {
        let file = ApiConfig {
            base_url: env::var("MEALDB_API_URL").ok(),
            api_key: env::var("MEALDB_API_KEY").ok(),
            timeout_secs: match env::var("MEALDB_TIMEOUT_SECS") {
                Ok(raw) => Some(raw.trim().parse().map_err(|_| {
                    ApiError::config(format!("MEALDB_TIMEOUT_SECS is not a number: {raw}"))
                })?),
                Err(_) => None,
            },
            environment: env::var("MEALDB_ENV").ok(),
        };
        Ok(self.with_file(&file))
    }

    /// Builder-style method to set base URL
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Builder-style method to set the API key
    #[must_use]
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = key.into();
        self
    }

    /// Builder-style method to set timeout
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Builder-style method to set retry config
    #[must_use]
    pub fn with_retry(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    /// Builder-style method to set rate limit config
    #[must_use]
    pub fn with_rate_limit(mut self, rate_limit: RateLimitConfig) -> Self {
        self.rate_limit = rate_limit;
        self
    }

    /// Builder-style method to set circuit breaker config
    #[must_use]
    pub fn with_circuit_breaker(mut self, circuit_breaker: CircuitBreakerConfig) -> Self {
        self.circuit_breaker = circuit_breaker;
        self
    }

    /// Full URL of an endpoint, e.g. `filter.php`
    #[must_use]
    pub fn endpoint_url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}/{}",
            self.base_url.trim_end_matches('/'),
            self.api_key,
            endpoint.trim_start_matches('/')
        )
    }

    /// Validate the configuration
    pub fn validate(&self) -> ApiResult<()> {
        if self.base_url.is_empty() {
            return Err(ApiError::config("base_url cannot be empty"));
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ApiError::config("base_url must start with http:// or https://"));
        }

        if self.api_key.is_empty() || self.api_key.contains('/') {
            return Err(ApiError::config("api_key must be a single non-empty path segment"));
        }

        if self.timeout.is_zero() {
            return Err(ApiError::config("timeout cannot be zero"));
        }

        if self.retry.max_attempts == 0 {
            return Err(ApiError::config("retry.max_attempts must be at least 1"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert!(config.base_url.contains("themealdb.com"));
        assert_eq!(config.api_key, "1");
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.environment, Environment::Production);
    }

    #[test]
    fn test_development_config() {
        let config = ClientConfig::development();
        assert!(config.base_url.contains("localhost"));
        assert_eq!(config.environment, Environment::Development);
        assert_eq!(config.rate_limit.max_requests, 1000);
    }

    #[test]
    fn test_environment_parse() {
        assert_eq!(Environment::parse("dev"), Environment::Development);
        assert_eq!(Environment::parse(" Local "), Environment::Development);
        assert_eq!(Environment::parse("prod"), Environment::Production);
        assert_eq!(Environment::parse(""), Environment::Production);
        assert_eq!(Environment::parse("staging"), Environment::Production);
    }

    #[test]
    fn test_endpoint_url() {
        let config = ClientConfig::default().with_base_url("http://127.0.0.1:9000/api/json/v1/");
        assert_eq!(
            config.endpoint_url("filter.php"),
            "http://127.0.0.1:9000/api/json/v1/1/filter.php"
        );
    }

    #[test]
    fn test_with_file_overrides_only_set_fields() {
        let file = ApiConfig {
            api_key: Some("9973533".to_string()),
            timeout_secs: Some(7),
            ..ApiConfig::default()
        };

        let config = ClientConfig::default().with_file(&file);
        assert_eq!(config.api_key, "9973533");
        assert_eq!(config.timeout, Duration::from_secs(7));
        assert!(config.base_url.contains("themealdb.com"));
    }

    #[test]
    fn test_builder_pattern() {
        let config = ClientConfig::default()
            .with_base_url("https://mirror.example.com/api/json/v1")
            .with_timeout(Duration::from_secs(60));

        assert_eq!(config.base_url, "https://mirror.example.com/api/json/v1");
        assert_eq!(config.timeout, Duration::from_secs(60));
    }

    #[test]
    fn test_validation() {
        assert!(ClientConfig::default().validate().is_ok());
        assert!(ClientConfig::default().with_base_url("").validate().is_err());
        assert!(ClientConfig::default().with_base_url("ftp://x").validate().is_err());
        assert!(ClientConfig::default().with_api_key("a/b").validate().is_err());
        assert!(ClientConfig::default()
            .with_timeout(Duration::ZERO)
            .validate()
            .is_err());
    }
}

//! Core utilities for the MealDB tools
//!
//! Shared by the catalog client, the ingredient search and the CLI:
//!
//! - **Error handling**: errors with codes, context and recovery suggestions
//! - **Configuration**: optional `mealdb.toml` file with `[api]` and `[search]` sections
//! - **Retry policy**: exponential backoff settings
//! - **Circuit breaker**: stop calling a catalog that keeps failing
//! - **Rate limiting**: per-endpoint token buckets
//!
//! # Example
//!
//! ```rust,no_run
//! use mealdb_core::config::Config;
//!
//! let config = Config::load(None).expect("invalid mealdb.toml");
//! println!("per-call timeout: {}s", config.schema.search.per_call_timeout_secs);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod circuit;
pub mod config;
pub mod error;
pub mod rate_limit;
pub mod retry;

pub use error::{Error, ErrorCode, Result, ResultExt};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::circuit::{CircuitBreaker, CircuitBreakerConfig, CircuitState};
    pub use crate::config::{Config, ConfigSchema};
    pub use crate::error::{exit_codes, Error, ErrorCode, Result, ResultExt};
    pub use crate::rate_limit::{RateLimitConfig, RateLimiter};
    pub use crate::retry::RetryConfig;
}

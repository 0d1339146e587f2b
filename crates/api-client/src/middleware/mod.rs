//! Resilience components used by the client
//!
//! Re-exported from `mealdb-core` so callers can tune a [`ClientConfig`](crate::ClientConfig)
//! without depending on the core crate directly.

pub use mealdb_core::circuit::{CircuitBreaker, CircuitBreakerConfig, CircuitState};
pub use mealdb_core::rate_limit::{RateLimitConfig, RateLimiter};
pub use mealdb_core::retry::RetryConfig;

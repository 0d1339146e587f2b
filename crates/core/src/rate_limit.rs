//! Client-side rate limiting for catalog API calls
//!
//! Token buckets keyed by endpoint, with a burst allowance on top of the
//! steady rate.
//!
//! # Example
//!
//! ```rust
//! use mealdb_core::rate_limit::{RateLimitConfig, RateLimiter};
//!
//! let limiter = RateLimiter::new(RateLimitConfig::per_minute(60));
//! assert!(limiter.try_acquire("filter.php").is_ok());
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

/// Rate limiter configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateLimitConfig {
    /// Requests refilled per window
    pub max_requests: u32,
    /// Refill window
    pub window: Duration,
    /// Extra requests allowed in a short burst
    pub burst: u32,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self::per_minute(100)
    }
}

impl RateLimitConfig {
    /// Per-minute rate limit
    #[must_use]
    pub fn per_minute(max: u32) -> Self {
        Self {
            max_requests: max,
            window: Duration::from_secs(60),
            burst: max / 4,
        }
    }

    /// Bucket capacity (steady rate plus burst)
    #[must_use]
    pub fn capacity(&self) -> u32 {
        self.max_requests.saturating_add(self.burst)
    }

    fn refill_per_sec(&self) -> f64 {
        f64::from(self.max_requests) / self.window.as_secs_f64().max(f64::EPSILON)
    }
}

#[derive(Debug)]
struct Bucket {
    tokens: f64,
    refreshed: Instant,
}

impl Bucket {
    fn full(config: &RateLimitConfig) -> Self {
        Self {
            tokens: f64::from(config.capacity()),
            refreshed: Instant::now(),
        }
    }

    fn refill(&mut self, config: &RateLimitConfig) {
        let now = Instant::now();
        let gained = now.duration_since(self.refreshed).as_secs_f64() * config.refill_per_sec();
        self.tokens = (self.tokens + gained).min(f64::from(config.capacity()));
        self.refreshed = now;
    }
}

/// Token-bucket rate limiter with one bucket per key
#[derive(Debug)]
pub struct RateLimiter {
    config: RateLimitConfig,
    buckets: Mutex<HashMap<String, Bucket>>,
}

impl RateLimiter {
    /// Create a new rate limiter
    #[must_use]
    pub fn new(config: RateLimitConfig) -> Self {
        Self {
            config,
            buckets: Mutex::new(HashMap::new()),
        }
    }

    /// Take one token for `key`
    ///
    /// When the bucket is empty, `Err` carries the time until the next token.
    pub fn try_acquire(&self, key: &str) -> Result<(), Duration> {
        let refill = self.config.refill_per_sec();
        self.with_bucket(key, |bucket| {
            if bucket.tokens >= 1.0 {
                bucket.tokens -= 1.0;
                Ok(())
            } else {
                Err(Duration::from_secs_f64((1.0 - bucket.tokens) / refill))
            }
        })
    }

    /// Forget the bucket for `key`
    pub fn reset(&self, key: &str) {
        self.buckets
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .remove(key);
    }

    fn with_bucket<T>(&self, key: &str, f: impl FnOnce(&mut Bucket) -> T) -> T {
        // A poisoned lock still holds valid buckets
        let mut buckets = self.buckets.lock().unwrap_or_else(|e| e.into_inner());
        let bucket = buckets
            .entry(key.to_string())
            .or_insert_with(|| Bucket::full(&self.config));
        bucket.refill(&self.config);
        f(bucket)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strict(max_requests: u32) -> RateLimitConfig {
        RateLimitConfig {
            max_requests,
            window: Duration::from_secs(60),
            burst: 0,
        }
    }

    #[test]
    fn test_rate_limiter_basic() {
        let limiter = RateLimiter::new(strict(3));

        for _ in 0..3 {
            assert!(limiter.try_acquire("filter.php").is_ok());
        }
        let wait = limiter.try_acquire("filter.php").unwrap_err();
        // 3 tokens per minute: one every 20 s
        assert!(wait > Duration::from_secs(19));
        assert!(wait <= Duration::from_secs(20));
    }

    #[test]
    fn test_rate_limiter_with_burst() {
        let limiter = RateLimiter::new(RateLimitConfig {
            max_requests: 2,
            window: Duration::from_secs(60),
            burst: 2,
        });

        for _ in 0..4 {
            assert!(limiter.try_acquire("lookup.php").is_ok());
        }
        assert!(limiter.try_acquire("lookup.php").is_err());
    }

    #[test]
    fn test_rate_limiter_keys_are_independent() {
        let limiter = RateLimiter::new(strict(1));

        assert!(limiter.try_acquire("filter.php").is_ok());
        assert!(limiter.try_acquire("filter.php").is_err());
        assert!(limiter.try_acquire("list.php").is_ok());
    }

    #[test]
    fn test_rate_limiter_reset() {
        let limiter = RateLimiter::new(strict(1));

        assert!(limiter.try_acquire("filter.php").is_ok());
        assert!(limiter.try_acquire("filter.php").is_err());

        limiter.reset("filter.php");
        assert!(limiter.try_acquire("filter.php").is_ok());
    }

    #[test]
    fn test_capacity_includes_burst() {
        let config = RateLimitConfig::per_minute(100);
        assert_eq!(config.capacity(), 125);
    }
}

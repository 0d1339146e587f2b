//! Circuit breaker for the catalog client
//!
//! After `failure_threshold` consecutive transient failures the breaker
//! opens and requests are refused locally for `reset_timeout`. The first
//! request after that runs as a trial (half-open); `success_threshold`
//! successes close the breaker again, one failure reopens it.

use serde::{Deserialize, Serialize};
use std::sync::Mutex;
use std::time::{Duration, Instant};

/// Observable breaker state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CircuitState {
    /// Requests flow normally
    Closed,
    /// Requests are refused until the reset timeout elapses
    Open,
    /// Trial requests are let through
    HalfOpen,
}

/// Circuit breaker configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CircuitBreakerConfig {
    /// Consecutive failures that open the circuit
    pub failure_threshold: u32,
    /// Half-open successes that close it again
    pub success_threshold: u32,
    /// How long the circuit stays open
    pub reset_timeout: Duration,
}

impl Default for CircuitBreakerConfig {
    fn default() -> Self {
        Self {
            failure_threshold: 5,
            success_threshold: 2,
            reset_timeout: Duration::from_secs(30),
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Phase {
    Closed { failures: u32 },
    Open { since: Instant },
    HalfOpen { successes: u32 },
}

/// Thread-safe circuit breaker
#[derive(Debug)]
pub struct CircuitBreaker {
    config: CircuitBreakerConfig,
    phase: Mutex<Phase>,
}

impl CircuitBreaker {
    /// Closed breaker
    #[must_use]
    pub fn new(config: CircuitBreakerConfig) -> Self {
        Self {
            config,
            phase: Mutex::new(Phase::Closed { failures: 0 }),
        }
    }

    fn with_phase<T>(&self, f: impl FnOnce(&mut Phase) -> T) -> T {
        // A poisoned lock still holds a valid phase
        let mut phase = self.phase.lock().unwrap_or_else(|e| e.into_inner());
        f(&mut phase)
    }

    /// Current state
    #[must_use]
    pub fn state(&self) -> CircuitState {
        self.with_phase(|phase| match phase {
            Phase::Closed { .. } => CircuitState::Closed,
            Phase::Open { .. } => CircuitState::Open,
            Phase::HalfOpen { .. } => CircuitState::HalfOpen,
        })
    }

    /// Ask to send a request
    ///
    /// `Err` carries how long the circuit stays open. An open circuit whose
    /// timeout has elapsed moves to half-open and lets the request through.
    pub fn acquire(&self) -> Result<(), Duration> {
        let reset_timeout = self.config.reset_timeout;
        self.with_phase(|phase| match *phase {
            Phase::Closed { .. } | Phase::HalfOpen { .. } => Ok(()),
            Phase::Open { since } => {
                let elapsed = since.elapsed();
                if elapsed >= reset_timeout {
                    *phase = Phase::HalfOpen { successes: 0 };
                    Ok(())
                } else {
                    Err(reset_timeout - elapsed)
                }
            }
        })
    }

    /// Record a request that completed
    pub fn record_success(&self) {
        let threshold = self.config.success_threshold;
        self.with_phase(|phase| match *phase {
            Phase::HalfOpen { successes } if successes + 1 >= threshold => {
                *phase = Phase::Closed { failures: 0 };
            }
            Phase::HalfOpen { successes } => {
                *phase = Phase::HalfOpen {
                    successes: successes + 1,
                };
            }
            Phase::Closed { .. } => *phase = Phase::Closed { failures: 0 },
            Phase::Open { .. } => {}
        });
    }

    /// Record a transient failure
    pub fn record_failure(&self) {
        let threshold = self.config.failure_threshold;
        self.with_phase(|phase| match *phase {
            Phase::Closed { failures } if failures + 1 >= threshold => {
                *phase = Phase::Open {
                    since: Instant::now(),
                };
            }
            Phase::Closed { failures } => {
                *phase = Phase::Closed {
                    failures: failures + 1,
                };
            }
            Phase::HalfOpen { .. } => {
                *phase = Phase::Open {
                    since: Instant::now(),
                };
            }
            Phase::Open { .. } => {}
        });
    }

    /// Close the circuit and forget past failures
    pub fn reset(&self) {
        self.with_phase(|phase| *phase = Phase::Closed { failures: 0 });
    }
}

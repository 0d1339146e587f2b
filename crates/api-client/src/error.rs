//! Error types for the API client

use std::time::Duration;
use thiserror::Error;

/// Result type alias for API operations
pub type ApiResult<T> = Result<T, ApiError>;

/// API client errors
///
/// Every variant except [`ApiError::NotFound`] means the lookup could not
/// complete; `NotFound` is an empty answer to a detail lookup.
#[derive(Error, Debug)]
pub enum ApiError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// API returned an error response
    #[error("API error ({status}): {message}")]
    ApiResponse {
        /// HTTP status code
        status: u16,
        /// Response body, or a placeholder when it could not be read
        message: String,
    },

    /// The catalog has no record for the requested key
    #[error("Not found: {0}")]
    NotFound(String),

    /// Circuit breaker is open
    #[error("Circuit breaker is open - catalog temporarily unavailable, retry in {retry_in:.1?}")]
    CircuitOpen {
        /// Time until the breaker lets a trial request through
        retry_in: Duration,
    },

    /// Rate limited on the client side
    #[error("Rate limited - too many requests to {endpoint}, retry in {retry_in:.1?}")]
    RateLimited {
        /// Endpoint whose bucket is empty
        endpoint: String,
        /// Time until the next request is allowed
        retry_in: Duration,
    },

    /// Request timeout
    #[error("Request timeout after {0:?}")]
    Timeout(Duration),

    /// All retry attempts exhausted
    #[error("All {attempts} retry attempts failed: {last_error}")]
    RetriesExhausted {
        /// Number of attempts made
        attempts: u32,
        /// Last error message
        last_error: String,
    },

    /// Invalid URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl ApiError {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create an API response error
    pub fn api_response(status: u16, message: impl Into<String>) -> Self {
        Self::ApiResponse {
            status,
            message: message.into(),
        }
    }

    /// Create a not-found error
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound(what.into())
    }

    /// Check if this error is retryable
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Request(e) => e.is_connect() || e.is_timeout(),
            Self::ApiResponse { status, .. } => *status >= 500 || *status == 429,
            Self::Timeout(_) => true,
            Self::Json(_)
            | Self::Config(_)
            | Self::NotFound(_)
            | Self::CircuitOpen { .. }
            | Self::RateLimited { .. }
            | Self::RetriesExhausted { .. }
            | Self::InvalidUrl(_) => false,
        }
    }

    /// How long to wait before the client accepts another request
    #[must_use]
    pub fn retry_in(&self) -> Option<Duration> {
        match self {
            Self::CircuitOpen { retry_in } | Self::RateLimited { retry_in, .. } => Some(*retry_in),
            _ => None,
        }
    }

    /// Whether the lookup failed to complete (as opposed to an empty answer)
    #[must_use]
    pub fn is_network(&self) -> bool {
        !matches!(self, Self::NotFound(_))
    }

    /// Check if this is a client error (4xx)
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::ApiResponse { status, .. } if (400..500).contains(status))
    }

    /// Check if this is a server error (5xx)
    #[must_use]
    pub fn is_server_error(&self) -> bool {
        matches!(self, Self::ApiResponse { status, .. } if *status >= 500)
    }
}

//! Main API client implementation

use crate::config::ClientConfig;
use crate::endpoints::{CategoriesApi, IngredientsApi, MealsApi};
use crate::error::{ApiError, ApiResult};
use mealdb_core::rate_limit::RateLimiter;
use mealdb_core::circuit::{CircuitBreaker, CircuitState};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};
use reqwest::{Client, Response, Url};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, instrument, warn, Span};
use uuid::Uuid;

/// Request correlation ID header
const X_REQUEST_ID: &str = "X-Request-ID";

/// MealDB catalog client with built-in resilience patterns
///
/// This client wraps `reqwest` and adds:
/// - Automatic retry with exponential backoff
/// - Circuit breaker to prevent cascading failures
/// - Per-endpoint client-side rate limiting
/// - Request correlation IDs for tracing
///
/// Cloning is cheap; clones share the breaker and the rate limiter.
#[derive(Clone)]
pub struct MealDbClient {
    inner: Client,
    config: Arc<ClientConfig>,
    circuit_breaker: Arc<CircuitBreaker>,
    rate_limiter: Arc<RateLimiter>,
}

impl MealDbClient {
    /// Create a new client with default configuration from environment
    pub fn new() -> ApiResult<Self> {
        let config = ClientConfig::from_env()?;
        Self::with_config(config)
    }

    /// Create a new client with specific configuration
    pub fn with_config(config: ClientConfig) -> ApiResult<Self> {
        config.validate()?;

        let mut default_headers = HeaderMap::new();
        default_headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        default_headers.insert(
            USER_AGENT,
            HeaderValue::from_static(concat!("mealdb-api-client/", env!("CARGO_PKG_VERSION"))),
        );

        let inner = Client::builder()
            .timeout(config.timeout)
            .default_headers(default_headers)
            .build()
            .map_err(ApiError::Request)?;

        let circuit_breaker = Arc::new(CircuitBreaker::new(config.circuit_breaker.clone()));
        let rate_limiter = Arc::new(RateLimiter::new(config.rate_limit.clone()));

        Ok(Self {
            inner,
            config: Arc::new(config),
            circuit_breaker,
            rate_limiter,
        })
    }

    /// Get the current configuration
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Get the base URL
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Get circuit breaker state
    #[must_use]
    pub fn circuit_state(&self) -> CircuitState {
        self.circuit_breaker.state()
    }

    /// Reset the circuit breaker
    pub fn reset_circuit(&self) {
        self.circuit_breaker.reset();
    }

    /// Reset rate limits for a specific endpoint, e.g. `filter.php`
    pub fn reset_rate_limit(&self, endpoint: &str) {
        self.rate_limiter.reset(endpoint);
    }

    // -------------------------------------------------------------------------
    // Endpoint API accessors
    // -------------------------------------------------------------------------

    /// Access category endpoints
    #[must_use]
    pub fn categories(&self) -> CategoriesApi {
        CategoriesApi::new(self.clone())
    }

    /// Access meal endpoints (filters and detail lookup)
    #[must_use]
    pub fn meals(&self) -> MealsApi {
        MealsApi::new(self.clone())
    }

    /// Access ingredient endpoints
    #[must_use]
    pub fn ingredients(&self) -> IngredientsApi {
        IngredientsApi::new(self.clone())
    }

    // -------------------------------------------------------------------------
    // Low-level HTTP with resilience
    // -------------------------------------------------------------------------

    /// Perform a GET request against an endpoint with resilience patterns
    ///
    /// `query` values are URL-encoded, so ingredient names with spaces or
    /// non-ASCII characters can be passed as-is.
    #[instrument(skip(self), fields(request_id))]
    pub async fn get<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &[(&str, &str)],
    ) -> ApiResult<T> {
        let request_id = Uuid::new_v4().to_string();
        Span::current().record("request_id", request_id.as_str());

        let url = self.endpoint_url(endpoint, query)?;

        if let Err(retry_in) = self.circuit_breaker.acquire() {
            warn!(
                request_id = %request_id,
                url = %url,
                retry_in_ms = retry_in.as_millis(),
                "Circuit breaker is open, rejecting request"
            );
            return Err(ApiError::CircuitOpen { retry_in });
        }

        if let Err(retry_in) = self.rate_limiter.try_acquire(endpoint) {
            warn!(
                request_id = %request_id,
                url = %url,
                retry_in_ms = retry_in.as_millis(),
                "Rate limited"
            );
            return Err(ApiError::RateLimited {
                endpoint: endpoint.to_string(),
                retry_in,
            });
        }

        self.execute_with_retry(&request_id, &url).await
    }

    /// Build the full URL of an endpoint with an encoded query string
    fn endpoint_url(&self, endpoint: &str, query: &[(&str, &str)]) -> ApiResult<Url> {
        let raw = self.config.endpoint_url(endpoint);
        let parsed = if query.is_empty() {
            Url::parse(&raw)
        } else {
            Url::parse_with_params(&raw, query)
        };
        parsed.map_err(|e| ApiError::InvalidUrl(format!("{raw}: {e}")))
    }

    /// Execute request with retry logic
    async fn execute_with_retry<T: DeserializeOwned>(
        &self,
        request_id: &str,
        url: &Url,
    ) -> ApiResult<T> {
        let retry_config = &self.config.retry;
        let mut last_error: Option<ApiError> = None;

        for attempt in 0..retry_config.max_attempts {
            if attempt > 0 {
                let delay = retry_config.delay_for_attempt(attempt);
                debug!(
                    request_id = %request_id,
                    attempt = attempt,
                    delay_ms = delay.as_millis(),
                    "Retrying after delay"
                );
                tokio::time::sleep(delay).await;
            }

            let start = Instant::now();
            let result = self.execute_single_request(request_id, url).await;
            let elapsed = start.elapsed();

            match result {
                Ok(value) => {
                    self.circuit_breaker.record_success();
                    debug!(
                        request_id = %request_id,
                        attempt = attempt + 1,
                        elapsed_ms = elapsed.as_millis(),
                        "Request succeeded"
                    );
                    return Ok(value);
                }
                Err(e) => {
                    if e.is_retryable() {
                        self.circuit_breaker.record_failure();
                    }

                    if e.is_retryable() && attempt + 1 < retry_config.max_attempts {
                        debug!(
                            request_id = %request_id,
                            attempt = attempt + 1,
                            error = %e,
                            "Request failed, will retry"
                        );
                        last_error = Some(e);
                    } else {
                        debug!(
                            request_id = %request_id,
                            attempt = attempt + 1,
                            error = %e,
                            "Request failed, not retrying"
                        );
                        return Err(e);
                    }
                }
            }
        }

        Err(ApiError::RetriesExhausted {
            attempts: retry_config.max_attempts,
            last_error: last_error.map_or_else(|| "Unknown error".to_string(), |e| e.to_string()),
        })
    }

    /// Execute a single request without retry
    async fn execute_single_request<T: DeserializeOwned>(
        &self,
        request_id: &str,
        url: &Url,
    ) -> ApiResult<T> {
        let response = self
            .inner
            .get(url.clone())
            .header(X_REQUEST_ID, request_id)
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        self.handle_response(response).await
    }

    /// Handle HTTP response and deserialize
    async fn handle_response<T: DeserializeOwned>(&self, response: Response) -> ApiResult<T> {
        let status = response.status();

        if status.is_success() {
            let body = response.bytes().await.map_err(|e| self.classify(e))?;
            serde_json::from_slice(&body).map_err(ApiError::Json)
        } else {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            Err(ApiError::api_response(status.as_u16(), message))
        }
    }

    /// Map reqwest timeouts onto the configured deadline
    fn classify(&self, error: reqwest::Error) -> ApiError {
        if error.is_timeout() {
            ApiError::Timeout(self.config.timeout)
        } else {
            ApiError::Request(error)
        }
    }
}

impl std::fmt::Debug for MealDbClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MealDbClient")
            .field("base_url", &self.config.base_url)
            .field("circuit_state", &self.circuit_breaker.state())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = MealDbClient::with_config(ClientConfig::development());
        assert!(client.is_ok());
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = ClientConfig::default().with_base_url("not-a-url");
        assert!(MealDbClient::with_config(config).is_err());
    }

    #[test]
    fn test_endpoint_url_encodes_query() {
        let client = MealDbClient::with_config(ClientConfig::default()).unwrap();
        let url = client
            .endpoint_url("filter.php", &[("i", "chicken breast")])
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://www.themealdb.com/api/json/v1/1/filter.php?i=chicken+breast"
        );
    }

    #[test]
    fn test_endpoint_url_without_query() {
        let client = MealDbClient::with_config(ClientConfig::default()).unwrap();
        let url = client.endpoint_url("categories.php", &[]).unwrap();
        assert_eq!(url.query(), None);
        assert!(url.path().ends_with("/1/categories.php"));
    }
}

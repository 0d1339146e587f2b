//! Error types for the search crate.

use mealdb_api_client::ApiError;
use thiserror::Error;

/// Result type alias for search operations.
pub type Result<T> = std::result::Result<T, SearchError>;

/// Errors that can occur during search operations.
#[derive(Debug, Error)]
pub enum SearchError {
    /// A lookup could not complete (connectivity, status, timeout); carries
    /// the first failure unchanged
    #[error("Ingredient lookup failed: {0}")]
    Network(#[from] ApiError),

    /// Search was invoked without any selected ingredient
    #[error("No ingredients selected")]
    EmptySelection,
}

impl SearchError {
    /// Whether the failure came from the remote catalog
    #[must_use]
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network(e) if e.is_network())
    }
}

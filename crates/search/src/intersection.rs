//! Multi-ingredient meal search.
//!
//! The catalog only answers "which meals use this one ingredient", so a
//! search for several ingredients is an intersection of per-ingredient
//! results:
//!
//! 1. the first selected ingredient's meals are the candidates, in catalog order;
//! 2. each further ingredient's meals are reduced to an id set and the
//!    candidates not in it are dropped;
//! 3. once no candidate is left no further lookup is issued.
//!
//! The result keeps the first lookup's order and its duplicates, if any.

use crate::error::{Result, SearchError};
use crate::lookup::MealLookup;
use futures::future::try_join_all;
use mealdb_api_client::{ApiError, Meal};
use mealdb_core::config::SearchConfig;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

/// Default bound on a single per-ingredient lookup.
pub const DEFAULT_PER_CALL_TIMEOUT: Duration = Duration::from_secs(15);

/// How the per-ingredient lookups are issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchStrategy {
    /// One lookup at a time; stops as soon as no candidate is left.
    #[default]
    Sequential,
    /// All lookups at once, reduced locally in selection order; the first
    /// failure cancels the others.
    Concurrent,
}

/// Search tuning.
#[derive(Debug, Clone)]
pub struct SearchOptions {
    /// Lookup scheduling
    pub strategy: SearchStrategy,
    /// Deadline for each lookup
    pub per_call_timeout: Duration,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            strategy: SearchStrategy::Sequential,
            per_call_timeout: DEFAULT_PER_CALL_TIMEOUT,
        }
    }
}

impl From<&SearchConfig> for SearchOptions {
    fn from(config: &SearchConfig) -> Self {
        Self {
            strategy: if config.concurrent {
                SearchStrategy::Concurrent
            } else {
                SearchStrategy::Sequential
            },
            per_call_timeout: Duration::from_secs(config.per_call_timeout_secs),
        }
    }
}

/// Intersection search over a [`MealLookup`].
#[derive(Debug, Clone)]
pub struct IngredientSearch<L> {
    lookup: L,
    options: SearchOptions,
}

impl<L: MealLookup> IngredientSearch<L> {
    /// Search with default options.
    pub fn new(lookup: L) -> Self {
        Self::with_options(lookup, SearchOptions::default())
    }

    /// Search with explicit options.
    pub fn with_options(lookup: L, options: SearchOptions) -> Self {
        Self { lookup, options }
    }

    /// The underlying data source.
    pub fn lookup(&self) -> &L {
        &self.lookup
    }

    /// Current options.
    pub fn options(&self) -> &SearchOptions {
        &self.options
    }

    /// Meals that use every ingredient in `selected`.
    ///
    /// `selected` must be non-empty; its first entry orders the result. Any
    /// failed or timed-out lookup aborts the search with that error and no
    /// partial result.
    #[instrument(skip(self, selected), fields(ingredients = selected.len(), strategy = ?self.options.strategy))]
    pub async fn search_meals<S>(&self, selected: &[S]) -> Result<Vec<Meal>>
    where
        S: AsRef<str> + Sync,
    {
        let Some((first, rest)) = selected.split_first() else {
            return Err(SearchError::EmptySelection);
        };

        let meals = match self.options.strategy {
            SearchStrategy::Sequential => self.sequential(first.as_ref(), rest).await?,
            SearchStrategy::Concurrent => self.concurrent(selected).await?,
        };

        info!(count = meals.len(), "Ingredient search finished");
        Ok(meals)
    }

    async fn sequential<S>(&self, first: &str, rest: &[S]) -> Result<Vec<Meal>>
    where
        S: AsRef<str> + Sync,
    {
        let mut candidates = self.fetch(first).await?;

        for ingredient in rest {
            if candidates.is_empty() {
                debug!("No candidates left, skipping remaining lookups");
                break;
            }
            let meals = self.fetch(ingredient.as_ref()).await?;
            candidates = retain_common(candidates, &meals);
        }

        Ok(candidates)
    }

    async fn concurrent<S>(&self, selected: &[S]) -> Result<Vec<Meal>>
    where
        S: AsRef<str> + Sync,
    {
        let lists = try_join_all(selected.iter().map(|s| self.fetch(s.as_ref()))).await?;

        let mut lists = lists.into_iter();
        let mut candidates = lists.next().unwrap_or_default();
        for meals in lists {
            if candidates.is_empty() {
                break;
            }
            candidates = retain_common(candidates, &meals);
        }

        Ok(candidates)
    }

    async fn fetch(&self, ingredient: &str) -> Result<Vec<Meal>> {
        let deadline = self.options.per_call_timeout;

        match tokio::time::timeout(deadline, self.lookup.meals_with_ingredient(ingredient)).await {
            Ok(Ok(meals)) => {
                debug!(ingredient, count = meals.len(), "Lookup finished");
                Ok(meals)
            }
            Ok(Err(e)) => {
                warn!(ingredient, error = %e, "Lookup failed");
                Err(e.into())
            }
            Err(_) => {
                warn!(ingredient, timeout_ms = deadline.as_millis(), "Lookup timed out");
                Err(ApiError::Timeout(deadline).into())
            }
        }
    }
}

/// Keep the `candidates` whose id also appears in `other`, preserving order.
#[must_use]
pub fn retain_common(candidates: Vec<Meal>, other: &[Meal]) -> Vec<Meal> {
    let ids: HashSet<&str> = other.iter().map(|m| m.id.as_str()).collect();
    candidates
        .into_iter()
        .filter(|m| ids.contains(m.id.as_str()))
        .collect()
}

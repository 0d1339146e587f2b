//! State behind a "search by ingredients" screen.
//!
//! The session owns the cached ingredient list, the name filter, the
//! selection and the outcome of the last search. It draws nothing; a front
//! end reads the getters after each call.
//!
//! Searches are tied to a generation counter. Every change to the selection
//! bumps it, so a result computed for an older selection is dropped by
//! [`IngredientSearchSession::complete`] instead of overwriting newer state.

use crate::error::{Result, SearchError};
use crate::filter::filter_ingredients;
use crate::intersection::{IngredientSearch, SearchOptions};
use crate::lookup::{IngredientCatalog, MealLookup};
use crate::selection::SelectedIngredients;
use mealdb_api_client::{Ingredient, Meal};
use tracing::{debug, info, warn};

/// Whether the user is still picking ingredients or looking at results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchPhase {
    /// Selection is being edited; results are not current
    #[default]
    Selecting,
    /// A search finished (successfully or not) for the current selection
    Results,
}

/// A search started by [`IngredientSearchSession::begin_search`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    generation: u64,
    ingredients: Vec<String>,
}

impl SearchTicket {
    /// Selected names at the time the search started, in selection order
    #[must_use]
    pub fn ingredients(&self) -> &[String] {
        &self.ingredients
    }

    /// Generation the ticket belongs to
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Controller for ingredient selection and intersection search.
#[derive(Debug)]
pub struct IngredientSearchSession<L> {
    search: IngredientSearch<L>,
    ingredients: Vec<Ingredient>,
    query: String,
    selected: SelectedIngredients,
    meals: Vec<Meal>,
    loading: bool,
    error: Option<SearchError>,
    phase: SearchPhase,
    generation: u64,
}

impl<L> IngredientSearchSession<L>
where
    L: MealLookup + IngredientCatalog,
{
    /// Session over `source` with default search options.
    pub fn new(source: L) -> Self {
        Self::with_search(IngredientSearch::new(source))
    }

    /// Session over `source` with explicit search options.
    pub fn with_options(source: L, options: SearchOptions) -> Self {
        Self::with_search(IngredientSearch::with_options(source, options))
    }

    fn with_search(search: IngredientSearch<L>) -> Self {
        Self {
            search,
            ingredients: Vec::new(),
            query: String::new(),
            selected: SelectedIngredients::new(),
            meals: Vec::new(),
            loading: false,
            error: None,
            phase: SearchPhase::Selecting,
            generation: 0,
        }
    }

    /// Fetch the ingredient list, sorted by name, skipping blank names.
    ///
    /// On failure the cached list is left untouched and the error is kept
    /// for [`error`](Self::error).
    pub async fn load_ingredients(&mut self) {
        self.loading = true;
        self.error = None;

        match self.search.lookup().all_ingredients().await {
            Ok(mut ingredients) => {
                ingredients.retain(|i| !i.name.trim().is_empty());
                ingredients.sort_by(|a, b| a.name.cmp(&b.name));
                info!(count = ingredients.len(), "Loaded ingredients");
                self.ingredients = ingredients;
            }
            Err(e) => {
                warn!(error = %e, "Failed to load ingredients");
                self.error = Some(e.into());
            }
        }

        self.loading = false;
    }

    /// Full ingredient list, sorted by name
    #[must_use]
    pub fn ingredients(&self) -> &[Ingredient] {
        &self.ingredients
    }

    /// Replace the name filter.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Current name filter
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Ingredients matching the current filter
    #[must_use]
    pub fn filtered(&self) -> Vec<&Ingredient> {
        filter_ingredients(&self.ingredients, &self.query)
    }

    /// Select or deselect `ingredient`; returns whether it is now selected.
    ///
    /// Any result on display stops being current and any outstanding ticket
    /// becomes stale.
    pub fn toggle(&mut self, ingredient: Ingredient) -> bool {
        let selected = self.selected.toggle(ingredient);
        self.invalidate();
        self.phase = SearchPhase::Selecting;
        selected
    }

    /// Whether `ingredient` is selected
    #[must_use]
    pub fn is_selected(&self, ingredient: &Ingredient) -> bool {
        self.selected.contains(ingredient)
    }

    /// Current selection
    #[must_use]
    pub fn selected(&self) -> &SelectedIngredients {
        &self.selected
    }

    /// Start a search for the current selection.
    ///
    /// An empty selection completes immediately with no meals and returns
    /// `None`. Otherwise the session is marked loading and the returned
    /// ticket is handed back to [`complete`](Self::complete).
    pub fn begin_search(&mut self) -> Option<SearchTicket> {
        if self.selected.is_empty() {
            self.meals.clear();
            self.error = None;
            self.loading = false;
            self.phase = SearchPhase::Results;
            return None;
        }

        self.loading = true;
        self.error = None;

        Some(SearchTicket {
            generation: self.generation,
            ingredients: self.selected.names(),
        })
    }

    /// Apply the outcome of a search.
    ///
    /// Returns `false`, leaving the session untouched, when the ticket is
    /// stale.
    pub fn complete(&mut self, ticket: &SearchTicket, result: Result<Vec<Meal>>) -> bool {
        if ticket.generation != self.generation {
            debug!(
                ticket = ticket.generation,
                current = self.generation,
                "Discarding stale search result"
            );
            return false;
        }

        match result {
            Ok(meals) => {
                self.meals = meals;
                self.error = None;
            }
            Err(e) => {
                warn!(error = %e, "Ingredient search failed");
                self.meals.clear();
                self.error = Some(e);
            }
        }

        self.loading = false;
        self.phase = SearchPhase::Results;
        true
    }

    /// Run a search for the current selection and apply its outcome.
    pub async fn search(&mut self) {
        let Some(ticket) = self.begin_search() else {
            return;
        };
        let result = self.search.search_meals(ticket.ingredients()).await;
        self.complete(&ticket, result);
    }

    /// Drop the selection and any results.
    pub fn clear_selections(&mut self) {
        self.selected.clear();
        self.meals.clear();
        self.error = None;
        self.invalidate();
        self.phase = SearchPhase::Selecting;
    }

    /// Meals from the last completed search
    #[must_use]
    pub fn meals(&self) -> &[Meal] {
        &self.meals
    }

    /// Whether a load or search is in flight
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Error from the last load or search
    #[must_use]
    pub fn error(&self) -> Option<&SearchError> {
        self.error.as_ref()
    }

    /// Take the error from the last load or search, leaving none behind
    pub fn take_error(&mut self) -> Option<SearchError> {
        self.error.take()
    }

    /// Current phase
    #[must_use]
    pub fn phase(&self) -> SearchPhase {
        self.phase
    }

    /// Whether results for the current selection are available
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.phase == SearchPhase::Results
    }

    fn invalidate(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.loading = false;
    }
}

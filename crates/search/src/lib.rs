//! Multi-ingredient meal search for the MealDB catalog.
//!
//! The catalog can only list the meals that use a single ingredient. This
//! crate builds "meals that use all of these ingredients" on top of that:
//!
//! - [`IngredientSearch`]: intersection of per-ingredient lookups, ordered by
//!   the first ingredient's results
//! - [`filter_ingredients`]: case-insensitive name filter
//! - [`SelectedIngredients`]: toggle-driven selection in insertion order
//! - [`IngredientSearchSession`]: selection, filter, loading and result state
//!   for a front end
//!
//! # Example
//!
//! ```rust,no_run
//! use mealdb_api_client::MealDbClient;
//! use mealdb_search::IngredientSearch;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = MealDbClient::new()?;
//! let search = IngredientSearch::new(client);
//!
//! let meals = search.search_meals(&["chicken", "garlic"]).await?;
//! for meal in meals {
//!     println!("{} {}", meal.id, meal.name);
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

mod error;
mod filter;
mod intersection;
mod lookup;
mod selection;
mod session;

#[cfg(test)]
mod testing;

pub use error::{Result, SearchError};
pub use filter::filter_ingredients;
pub use intersection::{
    retain_common, IngredientSearch, SearchOptions, SearchStrategy, DEFAULT_PER_CALL_TIMEOUT,
};
pub use lookup::{IngredientCatalog, MealLookup};
pub use selection::SelectedIngredients;
pub use session::{IngredientSearchSession, SearchPhase, SearchTicket};

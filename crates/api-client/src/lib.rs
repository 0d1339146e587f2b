//! Client for the TheMealDB recipe catalog
//!
//! This crate provides a typed, resilient HTTP client for the five read-only
//! catalog operations: categories, meals by category, meal detail, the
//! ingredient list and meals by ingredient.
//!
//! # Features
//!
//! - **Environment-based configuration**: base URL, API key and timeout from
//!   `MEALDB_*` variables or a `mealdb.toml` file
//! - **Retry with exponential backoff**: automatic retry for transient failures
//! - **Circuit breaker**: stop calling a catalog that keeps failing
//! - **Rate limiting**: per-endpoint token buckets
//! - **Request correlation**: every request carries an `X-Request-ID`
//!
//! # Example
//!
//! ```rust,no_run
//! use mealdb_api_client::MealDbClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = MealDbClient::new()?;
//!
//!     for category in client.categories().list().await? {
//!         println!("{}", category.name);
//!     }
//!
//!     let meal = client.meals().detail("52772").await?;
//!     println!("{} uses {} ingredients", meal.name, meal.ingredients.len());
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod client;
pub mod config;
pub mod endpoints;
pub mod error;
pub mod middleware;

pub use client::MealDbClient;
pub use config::{ClientConfig, Environment};
pub use endpoints::{Category, Ingredient, IngredientMeasure, Meal, MealDetail};
pub use error::{ApiError, ApiResult};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::client::MealDbClient;
    pub use crate::config::{ClientConfig, Environment};
    pub use crate::endpoints::{
        CategoriesApi, Category, Ingredient, IngredientMeasure, IngredientsApi, Meal,
        MealDetail, MealsApi,
    };
    pub use crate::error::{ApiError, ApiResult};
}

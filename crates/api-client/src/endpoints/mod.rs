//! Endpoint-specific API implementations
//!
//! Each module provides a typed interface for a group of catalog endpoints.
//!
//! | Module | Catalog endpoint | Description |
//! |--------|------------------|-------------|
//! | `categories` | `categories.php` | All meal categories |
//! | `meals` | `filter.php`, `lookup.php` | Meals by category or ingredient, meal detail |
//! | `ingredients` | `list.php?i=list` | All known ingredients |

pub mod categories;
pub mod ingredients;
pub mod meals;

pub use categories::{CategoriesApi, Category};
pub use ingredients::{Ingredient, IngredientsApi};
pub use meals::{IngredientMeasure, Meal, MealDetail, MealsApi};

use serde::Deserialize;

/// `{"meals": [...]}` envelope shared by the filter, lookup and list endpoints
///
/// The catalog answers `{"meals": null}` when nothing matches.
#[derive(Debug, Deserialize)]
pub(crate) struct MealsEnvelope<T> {
    pub meals: Option<Vec<T>>,
}

impl<T> MealsEnvelope<T> {
    pub(crate) fn into_vec(self) -> Vec<T> {
        self.meals.unwrap_or_default()
    }
}

/// Trim a wire string, mapping empty values to `None`
pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

//! Data sources the search reads from.
//!
//! The catalog client implements both traits; tests substitute in-memory
//! catalogs.

use async_trait::async_trait;
use mealdb_api_client::{ApiResult, Ingredient, Meal, MealDbClient};
use std::sync::Arc;

/// "Meals by single ingredient" lookup, the only input of the intersection search.
#[async_trait]
pub trait MealLookup: Send + Sync {
    /// Meals that use `ingredient`, in source order.
    async fn meals_with_ingredient(&self, ingredient: &str) -> ApiResult<Vec<Meal>>;
}

/// Source of the full ingredient list shown for selection.
#[async_trait]
pub trait IngredientCatalog: Send + Sync {
    /// Every known ingredient, in source order.
    async fn all_ingredients(&self) -> ApiResult<Vec<Ingredient>>;
}

#[async_trait]
impl MealLookup for MealDbClient {
    async fn meals_with_ingredient(&self, ingredient: &str) -> ApiResult<Vec<Meal>> {
        self.meals().by_ingredient(ingredient).await
    }
}

#[async_trait]
impl IngredientCatalog for MealDbClient {
    async fn all_ingredients(&self) -> ApiResult<Vec<Ingredient>> {
        self.ingredients().list().await
    }
}

#[async_trait]
impl<T: MealLookup + ?Sized> MealLookup for Arc<T> {
    async fn meals_with_ingredient(&self, ingredient: &str) -> ApiResult<Vec<Meal>> {
        (**self).meals_with_ingredient(ingredient).await
    }
}

#[async_trait]
impl<T: IngredientCatalog + ?Sized> IngredientCatalog for Arc<T> {
    async fn all_ingredients(&self) -> ApiResult<Vec<Ingredient>> {
        (**self).all_ingredients().await
    }
}

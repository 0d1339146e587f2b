//! In-memory catalog for unit tests.

use crate::lookup::{IngredientCatalog, MealLookup};
use async_trait::async_trait;
use mealdb_api_client::{ApiError, ApiResult, Ingredient, Meal};
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use std::time::Duration;

pub(crate) fn meal(id: &str) -> Meal {
    Meal {
        id: id.to_string(),
        name: format!("Meal {id}"),
        thumbnail: None,
    }
}

pub(crate) fn meals(ids: &[&str]) -> Vec<Meal> {
    ids.iter().map(|id| meal(id)).collect()
}

pub(crate) fn ids(meals: &[Meal]) -> Vec<&str> {
    meals.iter().map(|m| m.id.as_str()).collect()
}

/// Records every lookup so tests can check which calls were issued.
#[derive(Default)]
pub(crate) struct FakeCatalog {
    by_ingredient: HashMap<String, Vec<Meal>>,
    ingredients: Vec<Ingredient>,
    failing: HashSet<String>,
    delay: Option<Duration>,
    calls: Mutex<Vec<String>>,
}

impl FakeCatalog {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with(mut self, ingredient: &str, ids: &[&str]) -> Self {
        self.by_ingredient.insert(ingredient.to_string(), meals(ids));
        self.ingredients.push(Ingredient::named(ingredient));
        self
    }

    pub(crate) fn failing(mut self, ingredient: &str) -> Self {
        self.failing.insert(ingredient.to_string());
        self
    }

    pub(crate) fn slow(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl MealLookup for FakeCatalog {
    async fn meals_with_ingredient(&self, ingredient: &str) -> ApiResult<Vec<Meal>> {
        self.calls.lock().unwrap().push(ingredient.to_string());

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        if self.failing.contains(ingredient) {
            return Err(ApiError::api_response(503, "catalog unavailable"));
        }

        Ok(self.by_ingredient.get(ingredient).cloned().unwrap_or_default())
    }
}

#[async_trait]
impl IngredientCatalog for FakeCatalog {
    async fn all_ingredients(&self) -> ApiResult<Vec<Ingredient>> {
        if self.failing.contains("list") {
            return Err(ApiError::api_response(500, "list unavailable"));
        }
        Ok(self.ingredients.clone())
    }
}

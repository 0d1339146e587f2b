//! Meal endpoints
//!
//! - `filter.php?c=<category>`: meals in a category
//! - `filter.php?i=<ingredient>`: meals using a single ingredient
//! - `lookup.php?i=<id>`: full meal record

use super::{non_blank, MealsEnvelope};
use crate::client::MealDbClient;
use crate::error::{ApiError, ApiResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use tracing::debug;

/// Number of ingredient/measure slots in a meal record
pub const INGREDIENT_SLOTS: usize = 20;

/// Meals API interface
#[derive(Clone)]
pub struct MealsApi {
    client: MealDbClient,
}

impl MealsApi {
    pub(crate) fn new(client: MealDbClient) -> Self {
        Self { client }
    }

    /// List meals in a category, in catalog order
    ///
    /// GET /filter.php?c=<category>
    pub async fn by_category(&self, category: &str) -> ApiResult<Vec<Meal>> {
        let envelope: MealsEnvelope<Meal> =
            self.client.get("filter.php", &[("c", category)]).await?;
        Ok(envelope.into_vec())
    }

    /// List meals that use a single ingredient, in catalog order
    ///
    /// GET /filter.php?i=<ingredient>
    pub async fn by_ingredient(&self, ingredient: &str) -> ApiResult<Vec<Meal>> {
        let envelope: MealsEnvelope<Meal> =
            self.client.get("filter.php", &[("i", ingredient)]).await?;
        let meals = envelope.into_vec();
        debug!(ingredient, count = meals.len(), "Fetched meals by ingredient");
        Ok(meals)
    }

    /// Look up a meal by identifier; `None` when the catalog has no such meal
    ///
    /// GET /lookup.php?i=<id>
    pub async fn lookup(&self, id: &str) -> ApiResult<Option<MealDetail>> {
        let envelope: MealsEnvelope<MealDetail> =
            self.client.get("lookup.php", &[("i", id)]).await?;
        Ok(envelope.into_vec().into_iter().next())
    }

    /// Look up a meal by identifier, failing with [`ApiError::NotFound`] when absent
    pub async fn detail(&self, id: &str) -> ApiResult<MealDetail> {
        self.lookup(id)
            .await?
            .ok_or_else(|| ApiError::not_found(format!("meal {id}")))
    }
}

/// Meal summary as returned by the filter endpoints
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Meal {
    /// Unique catalog identifier
    #[serde(rename(deserialize = "idMeal"))]
    pub id: String,
    /// Display name
    #[serde(rename(deserialize = "strMeal"))]
    pub name: String,
    /// Thumbnail image URL
    #[serde(rename(deserialize = "strMealThumb"), default)]
    pub thumbnail: Option<String>,
}

/// One ingredient line of a meal
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IngredientMeasure {
    /// Ingredient name
    pub ingredient: String,
    /// Quantity, e.g. "2 tbsp"
    pub measure: Option<String>,
}

/// Full meal record
///
/// The wire format spreads ingredients over `strIngredient1..20` and
/// `strMeasure1..20`; they are collected here in slot order, skipping blank
/// slots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawMealDetail")]
pub struct MealDetail {
    /// Unique catalog identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Thumbnail image URL
    pub thumbnail: Option<String>,
    /// Category name
    pub category: Option<String>,
    /// Cuisine area, e.g. "Italian"
    pub area: Option<String>,
    /// Ingredient lines, at most [`INGREDIENT_SLOTS`]
    pub ingredients: Vec<IngredientMeasure>,
    /// Preparation instructions
    pub instructions: Option<String>,
    /// Video tutorial URL
    pub video_url: Option<String>,
    /// Free-form tags
    pub tags: Vec<String>,
    /// Original recipe URL
    pub source_url: Option<String>,
}

#[derive(Deserialize)]
struct RawMealDetail {
    #[serde(rename = "idMeal")]
    id: String,
    #[serde(rename = "strMeal")]
    name: String,
    #[serde(rename = "strMealThumb")]
    thumbnail: Option<String>,
    #[serde(rename = "strCategory")]
    category: Option<String>,
    #[serde(rename = "strArea")]
    area: Option<String>,
    #[serde(rename = "strInstructions")]
    instructions: Option<String>,
    #[serde(rename = "strYoutube")]
    youtube: Option<String>,
    #[serde(rename = "strTags")]
    tags: Option<String>,
    #[serde(rename = "strSource")]
    source: Option<String>,
    #[serde(flatten)]
    slots: HashMap<String, Value>,
}

impl RawMealDetail {
    fn slot(&self, prefix: &str, index: usize) -> Option<String> {
        let value = self.slots.get(&format!("{prefix}{index}"))?;
        non_blank(value.as_str().map(str::to_string))
    }
}

impl From<RawMealDetail> for MealDetail {
    fn from(raw: RawMealDetail) -> Self {
        let ingredients = (1..=INGREDIENT_SLOTS)
            .filter_map(|i| {
                raw.slot("strIngredient", i).map(|ingredient| IngredientMeasure {
                    ingredient,
                    measure: raw.slot("strMeasure", i),
                })
            })
            .collect();

        let tags = raw
            .tags
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect();

        Self {
            id: raw.id,
            name: raw.name,
            thumbnail: non_blank(raw.thumbnail),
            category: non_blank(raw.category),
            area: non_blank(raw.area),
            ingredients,
            instructions: non_blank(raw.instructions),
            video_url: non_blank(raw.youtube),
            tags,
            source_url: non_blank(raw.source),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DETAIL_JSON: &str = r#"{
        "idMeal": "52772",
        "strMeal": "Teriyaki Chicken Casserole",
        "strDrinkAlternate": null,
        "strCategory": "Chicken",
        "strArea": "Japanese",
        "strInstructions": "Preheat oven to 350F.",
        "strMealThumb": "https://www.themealdb.com/images/media/meals/wvpsxx1468256321.jpg",
        "strTags": "Meat, Casserole",
        "strYoutube": "https://www.youtube.com/watch?v=4aZr5hZXP_s",
        "strIngredient1": "soy sauce",
        "strIngredient2": "water",
        "strIngredient3": "",
        "strIngredient4": null,
        "strIngredient5": "garlic",
        "strMeasure1": "3/4 cup",
        "strMeasure2": "1/2 cup",
        "strMeasure3": "",
        "strMeasure4": null,
        "strMeasure5": " ",
        "strSource": null,
        "dateModified": null
    }"#;

    #[test]
    fn test_meal_summary_deserialize() {
        let json = r#"{"strMeal": "Brown Stew Chicken", "strMealThumb": "https://x/y.jpg", "idMeal": "52940"}"#;
        let meal: Meal = serde_json::from_str(json).unwrap();
        assert_eq!(meal.id, "52940");
        assert_eq!(meal.name, "Brown Stew Chicken");
        assert_eq!(meal.thumbnail.as_deref(), Some("https://x/y.jpg"));
    }

    #[test]
    fn test_meal_detail_collects_ingredient_slots() {
        let detail: MealDetail = serde_json::from_str(DETAIL_JSON).unwrap();

        assert_eq!(detail.id, "52772");
        assert_eq!(detail.area.as_deref(), Some("Japanese"));
        assert_eq!(
            detail.ingredients,
            vec![
                IngredientMeasure {
                    ingredient: "soy sauce".to_string(),
                    measure: Some("3/4 cup".to_string()),
                },
                IngredientMeasure {
                    ingredient: "water".to_string(),
                    measure: Some("1/2 cup".to_string()),
                },
                IngredientMeasure {
                    ingredient: "garlic".to_string(),
                    measure: None,
                },
            ]
        );
    }

    #[test]
    fn test_meal_detail_optional_fields() {
        let detail: MealDetail = serde_json::from_str(DETAIL_JSON).unwrap();

        assert_eq!(detail.tags, vec!["Meat", "Casserole"]);
        assert!(detail.video_url.is_some());
        assert_eq!(detail.source_url, None);
    }

    #[test]
    fn test_meal_detail_blank_video_is_absent() {
        let json = r#"{"idMeal": "1", "strMeal": "Toast", "strYoutube": "", "strTags": null}"#;
        let detail: MealDetail = serde_json::from_str(json).unwrap();
        assert_eq!(detail.video_url, None);
        assert!(detail.tags.is_empty());
        assert!(detail.ingredients.is_empty());
    }
}

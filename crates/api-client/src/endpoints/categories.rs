//! Category endpoints

use crate::client::MealDbClient;
use crate::error::ApiResult;
use serde::{Deserialize, Serialize};

/// Categories API interface
#[derive(Clone)]
pub struct CategoriesApi {
    client: MealDbClient,
}

impl CategoriesApi {
    pub(crate) fn new(client: MealDbClient) -> Self {
        Self { client }
    }

    /// List all categories in catalog order
    ///
    /// GET /categories.php
    pub async fn list(&self) -> ApiResult<Vec<Category>> {
        let response: CategoriesResponse = self.client.get("categories.php", &[]).await?;
        Ok(response.categories.unwrap_or_default())
    }
}

#[derive(Debug, Deserialize)]
struct CategoriesResponse {
    #[serde(default)]
    categories: Option<Vec<Category>>,
}

/// Meal category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Catalog identifier
    #[serde(rename(deserialize = "idCategory"))]
    pub id: String,
    /// Display name, also the key for [`MealsApi::by_category`](crate::endpoints::MealsApi::by_category)
    #[serde(rename(deserialize = "strCategory"))]
    pub name: String,
    /// Thumbnail image URL
    #[serde(rename(deserialize = "strCategoryThumb"), default)]
    pub thumbnail: Option<String>,
    /// Free-text description
    #[serde(rename(deserialize = "strCategoryDescription"), default)]
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categories_deserialize() {
        let json = r#"{
            "categories": [
                {
                    "idCategory": "1",
                    "strCategory": "Beef",
                    "strCategoryThumb": "https://www.themealdb.com/images/category/beef.png",
                    "strCategoryDescription": "Beef is the culinary name for meat from cattle."
                },
                {
                    "idCategory": "2",
                    "strCategory": "Chicken",
                    "strCategoryThumb": null
                }
            ]
        }"#;

        let response: CategoriesResponse = serde_json::from_str(json).unwrap();
        let categories = response.categories.unwrap();
        assert_eq!(categories.len(), 2);
        assert_eq!(categories[0].name, "Beef");
        assert!(categories[0].description.is_some());
        assert_eq!(categories[1].thumbnail, None);
        assert_eq!(categories[1].description, None);
    }
}

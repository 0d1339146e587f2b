//! Ingredient endpoints

use super::MealsEnvelope;
use crate::client::MealDbClient;
use crate::error::ApiResult;
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// Ingredients API interface
#[derive(Clone)]
pub struct IngredientsApi {
    client: MealDbClient,
}

impl IngredientsApi {
    pub(crate) fn new(client: MealDbClient) -> Self {
        Self { client }
    }

    /// List every ingredient known to the catalog, in catalog order
    ///
    /// GET /list.php?i=list
    pub async fn list(&self) -> ApiResult<Vec<Ingredient>> {
        let envelope: MealsEnvelope<Ingredient> =
            self.client.get("list.php", &[("i", "list")]).await?;
        Ok(envelope.into_vec())
    }
}

/// Ingredient usable as a search key
///
/// Two ingredients are equal when their names are equal; the identifier and
/// description do not take part in comparisons.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ingredient {
    /// Catalog identifier (empty for ingredients typed by a user)
    #[serde(rename(deserialize = "idIngredient"), default)]
    pub id: String,
    /// Name, the key passed to `filter.php?i=`
    #[serde(rename(deserialize = "strIngredient"))]
    pub name: String,
    /// Free-text description
    #[serde(rename(deserialize = "strDescription"), default)]
    pub description: Option<String>,
    /// Ingredient type, e.g. "Meat"
    #[serde(rename(deserialize = "strType", serialize = "type"), default)]
    pub kind: Option<String>,
}

impl Ingredient {
    /// Ingredient known only by name
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            id: String::new(),
            name: name.into(),
            description: None,
            kind: None,
        }
    }
}

impl PartialEq for Ingredient {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Ingredient {}

impl Hash for Ingredient {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_ingredient_list_deserialize() {
        let json = r#"{
            "meals": [
                {"idIngredient": "1", "strIngredient": "Chicken", "strDescription": "The chicken is a domesticated bird.", "strType": null},
                {"idIngredient": "2", "strIngredient": "Salmon", "strDescription": null, "strType": "Fish"}
            ]
        }"#;

        let envelope: MealsEnvelope<Ingredient> = serde_json::from_str(json).unwrap();
        let ingredients = envelope.into_vec();
        assert_eq!(ingredients.len(), 2);
        assert_eq!(ingredients[0].name, "Chicken");
        assert_eq!(ingredients[1].kind.as_deref(), Some("Fish"));
    }

    #[test]
    fn test_identity_is_by_name() {
        let listed = Ingredient {
            id: "1".to_string(),
            name: "Chicken".to_string(),
            description: Some("bird".to_string()),
            kind: None,
        };
        let typed = Ingredient::named("Chicken");

        assert_eq!(listed, typed);

        let set: HashSet<_> = [listed, typed].into_iter().collect();
        assert_eq!(set.len(), 1);
        assert_ne!(Ingredient::named("chicken"), Ingredient::named("Chicken"));
    }
}

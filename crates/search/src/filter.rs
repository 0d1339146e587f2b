//! Ingredient name filter.

use mealdb_api_client::Ingredient;

/// Ingredients whose name contains `query`, ignoring case.
///
/// A blank query returns every ingredient. Order is preserved.
pub fn filter_ingredients<'a>(all: &'a [Ingredient], query: &str) -> Vec<&'a Ingredient> {
    if query.trim().is_empty() {
        return all.iter().collect();
    }

    let needle = query.to_lowercase();
    all.iter()
        .filter(|ingredient| ingredient.name.to_lowercase().contains(&needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pantry() -> Vec<Ingredient> {
        ["Chicken", "Chicken Breast", "Garlic", "Red Chilli", "Salmon"]
            .into_iter()
            .map(Ingredient::named)
            .collect()
    }

    fn names<'a>(found: &[&'a Ingredient]) -> Vec<&'a str> {
        found.iter().map(|i| i.name.as_str()).collect()
    }

    #[test]
    fn test_empty_query_returns_everything() {
        let all = pantry();
        assert_eq!(filter_ingredients(&all, "").len(), all.len());
        assert_eq!(filter_ingredients(&all, "   ").len(), all.len());
    }

    #[test]
    fn test_case_insensitive_substring() {
        let all = pantry();
        assert_eq!(
            names(&filter_ingredients(&all, "CHICK")),
            ["Chicken", "Chicken Breast"]
        );
        assert_eq!(names(&filter_ingredients(&all, "li")), ["Garlic", "Red Chilli"]);
    }

    #[test]
    fn test_no_match() {
        let all = pantry();
        assert!(filter_ingredients(&all, "truffle").is_empty());
    }
}

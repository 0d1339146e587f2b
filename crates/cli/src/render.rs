//! Text rendering of catalog records

use crate::output::{format_count, truncate};
use mealdb_api_client::{Category, Ingredient, Meal, MealDetail};
use owo_colors::OwoColorize;
use std::fmt::Write;

const DESCRIPTION_WIDTH: usize = 60;

/// One line per category: name and a shortened description
#[must_use]
pub fn categories(categories: &[Category]) -> String {
    let mut out = String::new();
    for category in categories {
        let description = category
            .description
            .as_deref()
            .map(|d| truncate(d.lines().next().unwrap_or_default(), DESCRIPTION_WIDTH))
            .unwrap_or_default();
        let _ = writeln!(out, "  {:<16} {}", category.name.cyan(), description.dimmed());
    }
    let _ = writeln!(out, "\n  {}", format_count(categories.len(), "category", "categories"));
    out
}

/// One line per meal: identifier and name
#[must_use]
pub fn meals(meals: &[Meal]) -> String {
    let mut out = String::new();
    for meal in meals {
        let _ = writeln!(out, "  {:<8} {}", meal.id.dimmed(), meal.name);
    }
    let _ = writeln!(out, "\n  {}", format_count(meals.len(), "meal", "meals"));
    out
}

/// One line per ingredient, with its type when known
#[must_use]
pub fn ingredients(ingredients: &[&Ingredient]) -> String {
    let mut out = String::new();
    for ingredient in ingredients {
        match &ingredient.kind {
            Some(kind) => {
                let _ = writeln!(out, "  {} {}", ingredient.name, format!("({kind})").dimmed());
            }
            None => {
                let _ = writeln!(out, "  {}", ingredient.name);
            }
        }
    }
    let _ = writeln!(
        out,
        "\n  {}",
        format_count(ingredients.len(), "ingredient", "ingredients")
    );
    out
}

/// Full meal card: header, ingredient list, instructions and links
#[must_use]
pub fn meal_detail(meal: &MealDetail) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}", meal.name.bold());
    let origin: Vec<&str> = [meal.category.as_deref(), meal.area.as_deref()]
        .into_iter()
        .flatten()
        .collect();
    if !origin.is_empty() {
        let _ = writeln!(out, "{}", origin.join(" · ").dimmed());
    }
    if !meal.tags.is_empty() {
        let _ = writeln!(out, "Tags: {}", meal.tags.join(", "));
    }

    let _ = writeln!(out, "\n{}", "Ingredients".bold());
    for line in &meal.ingredients {
        match &line.measure {
            Some(measure) => {
                let _ = writeln!(out, "  • {} {}", line.ingredient, measure.dimmed());
            }
            None => {
                let _ = writeln!(out, "  • {}", line.ingredient);
            }
        }
    }

    if let Some(instructions) = &meal.instructions {
        let _ = writeln!(out, "\n{}", "Instructions".bold());
        for paragraph in instructions.lines().map(str::trim).filter(|l| !l.is_empty()) {
            let _ = writeln!(out, "  {paragraph}");
        }
    }

    if let Some(video) = &meal.video_url {
        let _ = writeln!(out, "\nVideo:  {}", video.blue());
    }
    if let Some(source) = &meal.source_url {
        let _ = writeln!(out, "Source: {}", source.blue());
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use mealdb_api_client::IngredientMeasure;

    fn teriyaki() -> MealDetail {
        MealDetail {
            id: "52772".to_string(),
            name: "Teriyaki Chicken Casserole".to_string(),
            thumbnail: None,
            category: Some("Chicken".to_string()),
            area: Some("Japanese".to_string()),
            ingredients: vec![
                IngredientMeasure {
                    ingredient: "soy sauce".to_string(),
                    measure: Some("3/4 cup".to_string()),
                },
                IngredientMeasure {
                    ingredient: "garlic".to_string(),
                    measure: None,
                },
            ],
            instructions: Some("Preheat oven.\r\n\r\nBake.".to_string()),
            video_url: None,
            tags: vec!["Meat".to_string()],
            source_url: None,
        }
    }

    #[test]
    fn test_meal_detail_lists_ingredients_in_order() {
        let text = meal_detail(&teriyaki());

        let soy = text.find("soy sauce").unwrap();
        let garlic = text.find("garlic").unwrap();
        assert!(soy < garlic);
        assert!(text.contains("3/4 cup"));
        assert!(text.contains("Preheat oven."));
        assert!(text.contains("Bake."));
        assert!(!text.contains("Video:"));
    }

    #[test]
    fn test_meals_counts() {
        let list = vec![
            Meal {
                id: "1".to_string(),
                name: "Toast".to_string(),
                thumbnail: None,
            },
            Meal {
                id: "2".to_string(),
                name: "Soup".to_string(),
                thumbnail: None,
            },
        ];
        let text = meals(&list);
        assert!(text.contains("Toast"));
        assert!(text.contains("2 meals"));
    }

    #[test]
    fn test_ingredients_show_kind() {
        let mut salmon = Ingredient::named("Salmon");
        salmon.kind = Some("Fish".to_string());
        let garlic = Ingredient::named("Garlic");

        let text = ingredients(&[&salmon, &garlic]);
        assert!(text.contains("(Fish)"));
        assert!(text.contains("Garlic"));
        assert!(text.contains("2 ingredients"));
    }
}

//! Meals command - list the meals in a category

use crate::context::Context;
use anyhow::Result;
use mealdb_api_client::Meal;
use mealdb_cli::output::print_json;
use mealdb_cli::{progress, render, OutputFormat, Status};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct JsonMealsOutput<'a> {
    category: &'a str,
    count: usize,
    meals: &'a [Meal],
}

/// Run meals command
pub async fn run(ctx: &Context, category: &str, format: OutputFormat) -> Result<()> {
    let pb = progress::spinner(&format!("Fetching {category} meals..."));
    let result = ctx.client.meals().by_category(category).await;
    progress::settle(&pb, &result, &format!("Fetching {category} meals failed"));
    let meals = result?;

    if format.is_json() {
        print_json(&JsonMealsOutput {
            category,
            count: meals.len(),
            meals: &meals,
        })?;
        return Ok(());
    }

    if meals.is_empty() {
        Status::warning(&format!("No meals in category \"{category}\""));
        return Ok(());
    }

    Status::header(category);
    print!("{}", render::meals(&meals));
    Ok(())
}

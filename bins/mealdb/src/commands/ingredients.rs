//! Ingredients command - list ingredients usable in a search

use crate::context::Context;
use anyhow::Result;
use mealdb_api_client::Ingredient;
use mealdb_cli::output::{format_count, print_json};
use mealdb_cli::{progress, render, OutputFormat, Status};
use mealdb_search::IngredientSearchSession;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct JsonIngredientsOutput<'a> {
    total: usize,
    matched: usize,
    ingredients: Vec<&'a Ingredient>,
}

/// Run ingredients command
pub async fn run(
    ctx: &Context,
    filter: Option<&str>,
    limit: Option<usize>,
    format: OutputFormat,
) -> Result<()> {
    let mut session = IngredientSearchSession::with_options(ctx.client.clone(), ctx.search.clone());

    let pb = progress::spinner("Fetching ingredients...");
    session.load_ingredients().await;
    let loaded = session.take_error().map_or(Ok(()), Err);
    progress::settle(&pb, &loaded, "Fetching ingredients failed");
    loaded?;

    session.set_query(filter.unwrap_or_default());
    let matched = session.filtered();
    let shown: Vec<&Ingredient> = matched
        .iter()
        .copied()
        .take(limit.unwrap_or(usize::MAX))
        .collect();

    if format.is_json() {
        print_json(&JsonIngredientsOutput {
            total: session.ingredients().len(),
            matched: matched.len(),
            ingredients: shown,
        })?;
        return Ok(());
    }

    if matched.is_empty() {
        Status::warning(&format!("No ingredient matches \"{}\"", session.query()));
        return Ok(());
    }

    Status::header("Ingredients");
    print!("{}", render::ingredients(&shown));
    if shown.len() < matched.len() {
        Status::info(&format!(
            "{} more not shown",
            format_count(matched.len() - shown.len(), "ingredient", "ingredients")
        ));
    }
    Ok(())
}

//! Search command - meals that use every given ingredient

use crate::context::Context;
use anyhow::Result;
use mealdb_api_client::{Ingredient, Meal};
use mealdb_cli::output::{format_count, format_duration, print_json};
use mealdb_cli::{progress, render, OutputFormat, Status};
use mealdb_search::{IngredientSearchSession, SearchStrategy};
use serde::Serialize;
use std::time::Instant;
use tracing::debug;

#[derive(Debug, Serialize)]
struct JsonSearchOutput<'a> {
    ingredients: Vec<String>,
    strategy: SearchStrategy,
    count: usize,
    meals: &'a [Meal],
}

/// Run search command
///
/// Ingredients are selected in the order given; the first one orders the
/// result. Repeated names are selected once.
pub async fn run(
    ctx: &Context,
    ingredients: &[String],
    concurrent: bool,
    format: OutputFormat,
) -> Result<()> {
    let options = ctx.search_options(concurrent);
    let strategy = options.strategy;
    let mut session = IngredientSearchSession::with_options(ctx.client.clone(), options);

    for name in ingredients.iter().map(|n| n.trim()).filter(|n| !n.is_empty()) {
        let ingredient = Ingredient::named(name);
        if !session.is_selected(&ingredient) {
            session.toggle(ingredient);
        }
    }
    if session.selected().is_empty() {
        return Err(mealdb_core::Error::invalid_input("No ingredient given")
            .with_suggestion("Pass at least one non-blank --ingredient")
            .into());
    }

    let selected = session.selected().names();
    debug!(ingredients = ?selected, ?strategy, "Starting search");

    let pb = progress::spinner(&format!("Searching meals with {}...", selected.join(", ")));
    let start = Instant::now();
    session.search().await;
    let searched = session.take_error().map_or(Ok(()), Err);
    progress::settle(&pb, &searched, "Search failed");
    searched?;
    let meals = session.meals();

    if format.is_json() {
        print_json(&JsonSearchOutput {
            ingredients: selected,
            strategy,
            count: meals.len(),
            meals,
        })?;
        return Ok(());
    }

    if meals.is_empty() {
        Status::warning(&format!("No meal uses all of: {}", selected.join(", ")));
        return Ok(());
    }

    Status::header(&format!("Meals with {}", selected.join(" + ")));
    print!("{}", render::meals(meals));
    Status::success(&format!(
        "Found {} in {}",
        format_count(meals.len(), "meal", "meals"),
        format_duration(start.elapsed())
    ));
    Ok(())
}

//! Meal command - show a single meal

use crate::context::Context;
use anyhow::Result;
use mealdb_cli::output::print_json;
use mealdb_cli::{progress, render, OutputFormat};

/// Run meal command
pub async fn run(ctx: &Context, id: &str, format: OutputFormat) -> Result<()> {
    let pb = progress::spinner(&format!("Looking up meal {id}..."));
    let result = ctx.client.meals().detail(id).await;
    progress::settle(&pb, &result, &format!("Looking up meal {id} failed"));
    let meal = result?;

    if format.is_json() {
        print_json(&meal)?;
        return Ok(());
    }

    println!();
    print!("{}", render::meal_detail(&meal));
    Ok(())
}

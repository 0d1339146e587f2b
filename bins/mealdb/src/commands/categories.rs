//! Categories command - list meal categories

use crate::context::Context;
use anyhow::Result;
use mealdb_cli::output::print_json;
use mealdb_cli::{progress, render, OutputFormat, Status};

/// Run categories command
pub async fn run(ctx: &Context, format: OutputFormat) -> Result<()> {
    let pb = progress::spinner("Fetching categories...");
    let result = ctx.client.categories().list().await;
    progress::settle(&pb, &result, "Fetching categories failed");
    let categories = result?;

    if format.is_json() {
        print_json(&categories)?;
        return Ok(());
    }

    Status::header("Categories");
    print!("{}", render::categories(&categories));
    Ok(())
}

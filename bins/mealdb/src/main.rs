//! mealdb - browse TheMealDB and search meals by ingredients

use clap::{Parser, Subcommand};
use mealdb_api_client::ApiError;
use mealdb_cli::{OutputFormat, Status};
use mealdb_core::error::ErrorReport;
use mealdb_core::{Error, ErrorCode};
use mealdb_search::SearchError;
use serde::Serialize;
use std::path::PathBuf;
use std::process::ExitCode;

mod commands;
mod context;

use commands::{categories, ingredients, meal, meals, search};
use context::Context;

/// Browse the TheMealDB recipe catalog
#[derive(Parser)]
#[command(name = "mealdb")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Config file (defaults to .mealdb.toml, mealdb.toml or the user config dir)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List meal categories
    Categories,

    /// List meals in a category
    Meals {
        /// Category name, e.g. "Seafood"
        category: String,
    },

    /// Show a meal's ingredients, instructions and video
    Meal {
        /// Meal identifier
        id: String,
    },

    /// List known ingredients, sorted by name
    Ingredients {
        /// Only show ingredients whose name contains this text
        #[arg(short = 'q', long)]
        filter: Option<String>,

        /// Maximum number of ingredients to show
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Find meals that use every given ingredient
    Search {
        /// Ingredient name; repeat for more (order matters for the result order)
        #[arg(short, long = "ingredient", required = true, num_args = 1..)]
        ingredients: Vec<String>,

        /// Issue all lookups at once
        #[arg(long)]
        concurrent: bool,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter("mealdb=debug,mealdb_search=debug,mealdb_api_client=debug,mealdb_core=debug")
            .with_writer(std::io::stderr)
            .init();
    }

    let result = match Context::load(cli.config.as_deref()) {
        Ok(ctx) => match cli.command {
            Commands::Categories => categories::run(&ctx, cli.format).await,
            Commands::Meals { category } => meals::run(&ctx, &category, cli.format).await,
            Commands::Meal { id } => meal::run(&ctx, &id, cli.format).await,
            Commands::Ingredients { filter, limit } => {
                ingredients::run(&ctx, filter.as_deref(), limit, cli.format).await
            }
            Commands::Search { ingredients, concurrent } => {
                search::run(&ctx, &ingredients, concurrent, cli.format).await
            }
        },
        Err(e) => Err(e),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let err = into_coded(e);
            if cli.format.is_json() {
                print_error_json(&err);
            } else {
                Status::error(&format!("Error: {err}"));
            }
            ExitCode::from(u8::try_from(err.exit_code()).unwrap_or(1))
        }
    }
}

#[derive(Serialize)]
struct JsonError {
    error: ErrorReport,
}

fn print_error_json(err: &Error) {
    let body = JsonError {
        error: err.to_report(),
    };
    match serde_json::to_string_pretty(&body) {
        Ok(json) => eprintln!("{json}"),
        Err(_) => eprintln!("{err}"),
    }
}

/// Fold any command failure into a coded error
///
/// The code decides the exit status: configuration problems exit with 3,
/// unreachable or throttled catalogs with 4 and timeouts with 124.
fn into_coded(err: anyhow::Error) -> Error {
    let err = match err.downcast::<Error>() {
        Ok(coded) => return coded,
        Err(err) => err,
    };

    let search = err.downcast_ref::<SearchError>();
    let api = search
        .and_then(|e| match e {
            SearchError::Network(api) => Some(api),
            SearchError::EmptySelection => None,
        })
        .or_else(|| err.downcast_ref::<ApiError>());

    let code = match (search, api) {
        (Some(SearchError::EmptySelection), _) => ErrorCode::InvalidInput,
        (_, Some(ApiError::Timeout(_))) => ErrorCode::Timeout,
        (_, Some(ApiError::Config(_) | ApiError::InvalidUrl(_))) => ErrorCode::ConfigValidationError,
        (_, Some(ApiError::NotFound(_))) => ErrorCode::NotFound,
        (_, Some(ApiError::CircuitOpen { .. } | ApiError::RateLimited { .. })) => ErrorCode::Throttled,
        (_, Some(_)) => ErrorCode::NetworkError,
        (_, None) => ErrorCode::Internal,
    };

    let coded = Error::new(code, format!("{err:#}"));
    match api.and_then(ApiError::retry_in) {
        Some(retry_in) => coded.with_suggestion(format!("Retry in {retry_in:.1?}")),
        None => coded,
    }
}

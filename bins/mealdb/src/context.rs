//! Settings shared by every command
//!
//! Client settings are layered: built-in defaults, then the `[api]` section of
//! the config file, then `MEALDB_*` environment variables.

use anyhow::{Context as _, Result};
use mealdb_api_client::{ClientConfig, MealDbClient};
use mealdb_core::config::Config;
use mealdb_search::{SearchOptions, SearchStrategy};
use std::path::Path;
use tracing::debug;

/// Catalog client plus search settings
pub struct Context {
    pub client: MealDbClient,
    pub search: SearchOptions,
}

impl Context {
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let config = Config::load(config_path)?;
        if let Some(ref path) = config.path {
            debug!(path = %path.display(), "Using config file");
        }

        let client_config = ClientConfig::default()
            .with_file(&config.schema.api)
            .with_env_overrides()?;
        let client = MealDbClient::with_config(client_config).context("Invalid catalog settings")?;

        Ok(Self {
            client,
            search: SearchOptions::from(&config.schema.search),
        })
    }

    /// Search options with the `--concurrent` flag applied
    pub fn search_options(&self, concurrent: bool) -> SearchOptions {
        let mut options = self.search.clone();
        if concurrent {
            options.strategy = SearchStrategy::Concurrent;
        }
        options
    }
}

//! Configuration loading and schema definitions
//!
//! The optional `mealdb.toml` file shared by the client and the CLI.

mod loader;
mod schema;

pub use loader::Config;
pub use schema::*;

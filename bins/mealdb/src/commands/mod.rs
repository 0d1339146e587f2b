//! CLI command implementations

pub mod categories;
pub mod ingredients;
pub mod meal;
pub mod meals;
pub mod search;

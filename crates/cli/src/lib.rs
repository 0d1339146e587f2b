//! Terminal output helpers for the MealDB tools
//!
//! Provides shared CLI functionality:
//! - Output format selection and JSON printing
//! - Spinners for catalog requests
//! - Text rendering of categories, meals and ingredients

#![warn(missing_docs)]

pub mod output;
pub mod progress;
pub mod render;

pub use output::{OutputFormat, Status};

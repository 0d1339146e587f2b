//! Progress indicators
//!
//! Spinners are drawn on stderr and only when a person is watching it, so
//! piped or JSON output stays clean.

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Create a spinner for a catalog request
pub fn spinner(message: &str) -> ProgressBar {
    if !console::user_attended_stderr() {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new_spinner();
    let style = ProgressStyle::default_spinner()
        .template("{spinner:.blue} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
        .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏");
    pb.set_style(style);
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

/// Finish a spinner with an error message
pub fn finish_error(pb: &ProgressBar, message: &str) {
    pb.finish_with_message(format!("✗ {message}"));
}

/// Remove a spinner without leaving a line behind
pub fn clear(pb: &ProgressBar) {
    pb.finish_and_clear();
}

/// Finish a spinner once its request has returned
///
/// Success clears the line so the command output follows directly; failure
/// leaves `failure` next to a cross.
pub fn settle<T, E>(pb: &ProgressBar, result: &Result<T, E>, failure: &str) {
    match result {
        Ok(_) => clear(pb),
        Err(_) => finish_error(pb, failure),
    }
}

//! CLI command handlers
//!
//! The check command and reporting of terminal failures.

pub mod check;

use crate::error::CompatCheckError;

pub use check::CheckOutcome;

/// Logs a terminal failure and prints it to stderr.
///
/// Load failures print `Error: <message>`; anything outside that taxonomy
/// prints `An unexpected error occurred: <message>` and is logged with its
/// full debug representation.
pub fn report_failure(err: &CompatCheckError) {
    if err.is_unexpected() {
        tracing::error!(error = ?err, "An unexpected error occurred");
        eprintln!("An unexpected error occurred: {err}");
    } else {
        tracing::error!("Configuration error: {err}");
        eprintln!("Error: {err}");
    }
}

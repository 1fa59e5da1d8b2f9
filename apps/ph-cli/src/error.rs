//! # CLI Errors
//!
//! Failures of the presentation layer itself. A rejected calculation is NOT
//! one of these: it still produces a (sentinel) result and is surfaced through
//! the engine's error channel.

use ph_core::Operation;
use thiserror::Error;

/// Errors raised while turning command-line input into an engine call.
#[derive(Debug, Error)]
pub enum CliError {
    /// The `--preset` key does not exist for the selected calculator.
    #[error("unknown preset '{key}' for {operation}; available: {available}")]
    UnknownPreset {
        operation: Operation,
        key: String,
        available: String,
    },

    /// Neither the flags nor the preset supply a value.
    #[error("{field} is required for {operation}")]
    MissingInput {
        operation: Operation,
        field: &'static str,
    },

    /// Result could not be rendered.
    #[error("failed to render output: {0}")]
    Render(#[from] serde_json::Error),
}

impl CliError {
    pub fn unknown_preset(operation: Operation, key: &str, available: &[&str]) -> Self {
        CliError::UnknownPreset {
            operation,
            key: key.to_string(),
            available: available.join(", "),
        }
    }
}

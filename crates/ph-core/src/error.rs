//! # Error Types
//!
//! Domain-specific error types for ph-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  ph-core errors (this file)                                            │
//! │  └── CalcError        - Why a calculation was rejected                 │
//! │                                                                         │
//! │  ph-cli errors (app)                                                   │
//! │  ├── ConfigError      - Bad environment configuration                  │
//! │  └── CliError         - Unknown preset, missing input                  │
//! │                                                                         │
//! │  Flow: CalcError → ErrorReport → ErrorReporter → user-visible notice   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `CalcError` is never returned through `Err(..)` by the engine. It travels
//! inside an [`ErrorReport`](crate::types::ErrorReport) next to a sentinel
//! result.

use serde::Serialize;
use thiserror::Error;

// =============================================================================
// Calculation Error
// =============================================================================

/// Reasons a calculation cannot proceed.
#[derive(Debug, Clone, Copy, PartialEq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CalcError {
    /// A required numeric parameter is not a finite, strictly positive number.
    ///
    /// ## When This Occurs
    /// - Concentration of 0 M (the user cleared the field)
    /// - Negative valence, Ka or Kb
    /// - NaN or infinity reaching the engine from a parser
    ///
    /// ## User Workflow
    /// ```text
    /// Enter concentration: 0
    ///      │
    ///      ▼
    /// strong_acid_ph(0.0, 1.0)
    ///      │
    ///      ▼
    /// InvalidInput { field: "concentration", value: 0.0 }
    ///      │
    ///      ▼
    /// UI shows: "values must be positive (concentration = 0)"
    /// ```
    #[error("values must be positive ({field} = {value})")]
    InvalidInput { field: &'static str, value: f64 },
}

impl CalcError {
    /// Name of the parameter that caused the rejection.
    pub fn field(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { field, .. } => field,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CalcError::InvalidInput {
            field: "concentration",
            value: 0.0,
        };
        assert_eq!(err.to_string(), "values must be positive (concentration = 0)");

        let err = CalcError::InvalidInput {
            field: "Ka",
            value: -1.5,
        };
        assert_eq!(err.to_string(), "values must be positive (Ka = -1.5)");
        assert_eq!(err.field(), "Ka");
    }

    #[test]
    fn test_error_serializes_with_kind_tag() {
        let err = CalcError::InvalidInput {
            field: "valence",
            value: 0.0,
        };
        let json = serde_json::to_value(err).unwrap();
        assert_eq!(json["kind"], "invalid_input");
        assert_eq!(json["field"], "valence");
    }
}

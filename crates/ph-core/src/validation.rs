//! # Validation Module
//!
//! The shared validation and rounding helpers used by every calculation.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Presentation (ph-cli)                                        │
//! │  ├── Number parsing (clap)                                             │
//! │  └── Preset lookup                                                     │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Engine (ph-core)                                             │
//! │  └── THIS MODULE: every input finite and strictly positive             │
//! │                                                                         │
//! │  log10 and sqrt are only well-defined on the positive reals            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use ph_core::validation::{validate_positive, round_to};
//!
//! assert!(validate_positive("Ka", 1.8e-5).is_ok());
//! assert!(validate_positive("concentration", 0.0).is_err());
//!
//! assert_eq!(round_to(1.69897, 2), 1.7);
//! ```

use crate::error::CalcError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, CalcError>;

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates that a single parameter is finite and strictly positive.
///
/// ## Rules
/// - Must be > 0 (zero and negatives rejected)
/// - Must be finite (NaN and ±infinity rejected)
pub fn validate_positive(field: &'static str, value: f64) -> ValidationResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(CalcError::InvalidInput { field, value })
    }
}

/// Validates a list of named parameters, stopping at the first failure.
///
/// Parameters are checked in the order given, so callers pass them in
/// signature order and the report names the leftmost bad one.
///
/// ## Example
/// ```rust
/// use ph_core::validation::validate_all_positive;
///
/// let err = validate_all_positive(&[("concentration", 0.0), ("valence", -1.0)])
///     .unwrap_err();
/// assert_eq!(err.field(), "concentration");
/// ```
pub fn validate_all_positive(params: &[(&'static str, f64)]) -> ValidationResult<()> {
    params
        .iter()
        .try_for_each(|&(field, value)| validate_positive(field, value))
}

// =============================================================================
// Rounding
// =============================================================================

/// Rounds `value` to `decimals` places.
///
/// Goes through the decimal expansion of the exact binary value, so a
/// stored value just below a printed tie rounds down and only exact ties
/// go to even. Scaling by 10^n first would round the product and can
/// push such values up.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    format!("{value:.*}", decimals as usize)
        .parse()
        .unwrap_or(value)
}

// =============================================================================
// Unit Tests
// =============================================================================

//! # Domain Types
//!
//! Values that flow in and out of the engine.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  Inputs                       Results                                   │
//! │  ┌─────────────────┐          ┌─────────────────┐                       │
//! │  │ StrongInput     │          │   AcidResult    │                       │
//! │  │  concentration  │ ──────►  │   h_plus, ph    │                       │
//! │  │  valence        │          └─────────────────┘                       │
//! │  └─────────────────┘          ┌─────────────────┐                       │
//! │  ┌─────────────────┐          │   BaseResult    │                       │
//! │  │ WeakInput       │ ──────►  │ oh_minus, poh,  │                       │
//! │  │  constant (K)   │          │ ph              │                       │
//! │  │  concentration  │          └─────────────────┘                       │
//! │  └─────────────────┘                                                    │
//! │                                                                         │
//! │  Outcome<T> = Computed(T) | Rejected { sentinel: T, report }           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every value here is `Copy`: nothing outlives the call that produced it.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::CalcError;
use crate::NEUTRAL_PH;

// =============================================================================
// Operation
// =============================================================================

/// The four calculations the engine offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    StrongAcid,
    WeakAcid,
    StrongBase,
    WeakBase,
}

impl Operation {
    /// All operations, in menu order.
    pub const ALL: [Operation; 4] = [
        Operation::StrongAcid,
        Operation::WeakAcid,
        Operation::StrongBase,
        Operation::WeakBase,
    ];

    /// Human-readable title.
    pub fn title(&self) -> &'static str {
        match self {
            Operation::StrongAcid => "Strong Acid",
            Operation::WeakAcid => "Weak Acid",
            Operation::StrongBase => "Strong Base",
            Operation::WeakBase => "Weak Base",
        }
    }

    /// Returns true for the two base calculations.
    pub fn is_base(&self) -> bool {
        matches!(self, Operation::StrongBase | Operation::WeakBase)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

// =============================================================================
// Inputs
// =============================================================================

/// Input of a strong (fully dissociated) acid or base.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrongInput {
    /// Molar concentration (M).
    pub concentration: f64,

    /// Ionizable H+ / OH- units per formula unit (e.g. 2 for H2SO4).
    pub valence: f64,
}

/// Input of a weak acid or base.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeakInput {
    /// Dissociation constant, Ka for acids and Kb for bases.
    pub constant: f64,

    /// Molar concentration (M).
    pub concentration: f64,
}

// =============================================================================
// Results
// =============================================================================

/// Result of an acid calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AcidResult {
    /// [H+] in mol/L, rounded to 10 decimal places.
    pub h_plus: f64,

    /// pH, rounded to 2 decimal places.
    pub ph: f64,
}

impl AcidResult {
    /// Placeholder returned when the input is rejected: `(0, 0)`.
    pub const SENTINEL: AcidResult = AcidResult { h_plus: 0.0, ph: 0.0 };
}

/// Result of a base calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BaseResult {
    /// [OH-] in mol/L, rounded to 10 decimal places.
    pub oh_minus: f64,

    /// pOH, rounded to 2 decimal places.
    pub poh: f64,

    /// pH = pKw - pOH, rounded to 2 decimal places.
    pub ph: f64,
}

impl BaseResult {
    /// Placeholder returned when the input is rejected: `(0, 0, 7)`.
    ///
    /// The neutral pH differs from the acid sentinel's 0; callers have come
    /// to rely on both values.
    pub const SENTINEL: BaseResult = BaseResult {
        oh_minus: 0.0,
        poh: 0.0,
        ph: NEUTRAL_PH,
    };
}

// =============================================================================
// Error Report
// =============================================================================

/// Why a calculation was rejected, and which one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ErrorReport {
    pub operation: Operation,
    pub error: CalcError,
}

impl ErrorReport {
    pub fn new(operation: Operation, error: CalcError) -> Self {
        ErrorReport { operation, error }
    }

    /// Message suitable for showing to an end user.
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ErrorReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Error: {}", self.error)
    }
}

// =============================================================================
// Outcome
// =============================================================================

/// What every engine call returns.
///
/// A rejected calculation still carries a result of the same shape, so a
/// caller can always read a value without branching first.
///
/// ## Example
/// ```rust
/// use ph_core::engine::weak_acid_ph;
///
/// let outcome = weak_acid_ph(-1.0, 0.1);
/// let result = outcome.value();          // always available
/// assert_eq!((result.h_plus, result.ph), (0.0, 0.0));
/// assert!(outcome.report().is_some());   // and says why it is a placeholder
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome<T> {
    /// Inputs were valid; the value is a real calculation.
    Computed(T),

    /// Inputs were invalid; `sentinel` is a fixed placeholder.
    Rejected { sentinel: T, report: ErrorReport },
}

impl<T> Outcome<T> {
    /// The result, or the sentinel when rejected.
    pub fn value(&self) -> &T {
        match self {
            Outcome::Computed(value) => value,
            Outcome::Rejected { sentinel, .. } => sentinel,
        }
    }

    /// Consumes the outcome, returning the result or the sentinel.
    pub fn into_value(self) -> T {
        match self {
            Outcome::Computed(value) => value,
            Outcome::Rejected { sentinel, .. } => sentinel,
        }
    }

    /// The rejection report, if any.
    pub fn report(&self) -> Option<&ErrorReport> {
        match self {
            Outcome::Computed(_) => None,
            Outcome::Rejected { report, .. } => Some(report),
        }
    }

    pub fn is_computed(&self) -> bool {
        matches!(self, Outcome::Computed(_))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn rejected() -> Outcome<AcidResult> {
        Outcome::Rejected {
            sentinel: AcidResult::SENTINEL,
            report: ErrorReport::new(
                Operation::StrongAcid,
                CalcError::InvalidInput {
                    field: "concentration",
                    value: 0.0,
                },
            ),
        }
    }

    #[test]
    fn test_sentinels() {
        assert_eq!(AcidResult::SENTINEL.h_plus, 0.0);
        assert_eq!(AcidResult::SENTINEL.ph, 0.0);
        assert_eq!(BaseResult::SENTINEL.oh_minus, 0.0);
        assert_eq!(BaseResult::SENTINEL.poh, 0.0);
        assert_eq!(BaseResult::SENTINEL.ph, 7.0);
    }

    #[test]
    fn test_outcome_accessors() {
        let ok = Outcome::Computed(AcidResult { h_plus: 0.1, ph: 1.0 });
        assert!(ok.is_computed());
        assert!(ok.report().is_none());
        assert_eq!(ok.value().ph, 1.0);
        assert_eq!(ok.into_value().h_plus, 0.1);

        let bad = rejected();
        assert!(!bad.is_computed());
        assert_eq!(*bad.value(), AcidResult::SENTINEL);
        assert_eq!(bad.report().unwrap().operation, Operation::StrongAcid);
        assert_eq!(rejected().into_value(), AcidResult::SENTINEL);
    }

    #[test]
    fn test_report_message() {
        let report = *rejected().report().unwrap();
        assert_eq!(
            report.message(),
            "Error: values must be positive (concentration = 0)"
        );
    }

    #[test]
    fn test_outcome_json_shape() {
        let json = serde_json::to_value(rejected()).unwrap();
        assert_eq!(json["status"], "rejected");
        assert_eq!(json["sentinel"]["ph"], 0.0);
        assert_eq!(json["report"]["operation"], "strong_acid");

        let json = serde_json::to_value(Outcome::Computed(BaseResult::SENTINEL)).unwrap();
        assert_eq!(json["status"], "computed");
        assert_eq!(json["ph"], 7.0);
    }

    #[test]
    fn test_operation_titles() {
        assert_eq!(Operation::WeakBase.to_string(), "Weak Base");
        assert!(Operation::StrongBase.is_base());
        assert!(!Operation::WeakAcid.is_base());
        assert_eq!(Operation::ALL.len(), 4);
    }
}

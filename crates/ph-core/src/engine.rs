//! # Computation Engine
//!
//! The four textbook pH calculations.
//!
//! ## Calculation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    validate ─► ion ─► p-scale ─► round                  │
//! │                                                                         │
//! │  Strong acid   [H+]  = C × a            pH  = -log10[H+]                │
//! │  Weak acid     [H+]  = √(Ka × C)        pH  = -log10[H+]                │
//! │  Strong base   [OH-] = C × a            pOH = -log10[OH-]  pH = 14-pOH  │
//! │  Weak base     [OH-] = √(Kb × C)        pOH = -log10[OH-]  pH = 14-pOH  │
//! │                                                                         │
//! │  Rejected input ─► sentinel (0, 0) for acids, (0, 0, 7) for bases      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The free functions are pure and return an [`Outcome`]. [`PhEngine`] wraps
//! them and additionally pushes each rejection to an [`ErrorReporter`].

use crate::error::CalcError;
use crate::report::{ErrorReporter, SilentReporter};
use crate::types::{AcidResult, BaseResult, ErrorReport, Operation, Outcome};
use crate::validation::{round_to, validate_all_positive, validate_positive};
use crate::{ION_CONCENTRATION_DECIMALS, PKW, P_SCALE_DECIMALS};

// =============================================================================
// Acids
// =============================================================================

/// pH of a strong acid: `[H+] = concentration × valence`.
///
/// ## Example
/// ```rust
/// use ph_core::engine::strong_acid_ph;
///
/// // H2SO4 0.01 M, two ionizable hydrogens
/// let result = strong_acid_ph(0.01, 2.0).into_value();
/// assert_eq!(result.h_plus, 0.02);
/// assert_eq!(result.ph, 1.7);
/// ```
pub fn strong_acid_ph(concentration: f64, valence: f64) -> Outcome<AcidResult> {
    let inputs = [("concentration", concentration), ("valence", valence)];
    match ion_concentration(&inputs, H_PLUS, || concentration * valence) {
        Ok(h_plus) => Outcome::Computed(acid_from_h_plus(h_plus)),
        Err(error) => reject(Operation::StrongAcid, AcidResult::SENTINEL, error),
    }
}

/// pH of a weak monoprotic acid: `[H+] = √(Ka × concentration)`.
///
/// Valid while dissociation stays small compared to the concentration.
pub fn weak_acid_ph(ka: f64, concentration: f64) -> Outcome<AcidResult> {
    let inputs = [("Ka", ka), ("concentration", concentration)];
    match ion_concentration(&inputs, H_PLUS, || (ka * concentration).sqrt()) {
        Ok(h_plus) => Outcome::Computed(acid_from_h_plus(h_plus)),
        Err(error) => reject(Operation::WeakAcid, AcidResult::SENTINEL, error),
    }
}

// =============================================================================
// Bases
// =============================================================================

/// pOH and pH of a strong base: `[OH-] = concentration × valence`.
///
/// ## Example
/// ```rust
/// use ph_core::engine::strong_base_ph;
///
/// // NaOH 0.1 M
/// let result = strong_base_ph(0.1, 1.0).into_value();
/// assert_eq!((result.oh_minus, result.poh, result.ph), (0.1, 1.0, 13.0));
/// ```
pub fn strong_base_ph(concentration: f64, valence: f64) -> Outcome<BaseResult> {
    let inputs = [("concentration", concentration), ("valence", valence)];
    match ion_concentration(&inputs, OH_MINUS, || concentration * valence) {
        Ok(oh_minus) => Outcome::Computed(base_from_oh_minus(oh_minus)),
        Err(error) => reject(Operation::StrongBase, BaseResult::SENTINEL, error),
    }
}

/// pOH and pH of a weak base: `[OH-] = √(Kb × concentration)`.
pub fn weak_base_ph(kb: f64, concentration: f64) -> Outcome<BaseResult> {
    let inputs = [("Kb", kb), ("concentration", concentration)];
    match ion_concentration(&inputs, OH_MINUS, || (kb * concentration).sqrt()) {
        Ok(oh_minus) => Outcome::Computed(base_from_oh_minus(oh_minus)),
        Err(error) => reject(Operation::WeakBase, BaseResult::SENTINEL, error),
    }
}

// =============================================================================
// Shared Helpers
// =============================================================================

const H_PLUS: &str = "[H+]";
const OH_MINUS: &str = "[OH-]";

/// Validates the inputs, then the ion concentration derived from them.
///
/// Positive inputs can still multiply out to zero or infinity, which has no
/// logarithm; that case is reported against the ion itself.
fn ion_concentration(
    inputs: &[(&'static str, f64)],
    ion: &'static str,
    derive: impl FnOnce() -> f64,
) -> Result<f64, CalcError> {
    validate_all_positive(inputs)?;
    let value = derive();
    validate_positive(ion, value)?;
    Ok(value)
}

fn acid_from_h_plus(h_plus: f64) -> AcidResult {
    let ph = -h_plus.log10();
    AcidResult {
        h_plus: round_to(h_plus, ION_CONCENTRATION_DECIMALS),
        ph: round_to(ph, P_SCALE_DECIMALS),
    }
}

// pH comes from the unrounded pOH; only the reported values are rounded.
fn base_from_oh_minus(oh_minus: f64) -> BaseResult {
    let poh = -oh_minus.log10();
    let ph = PKW - poh;
    BaseResult {
        oh_minus: round_to(oh_minus, ION_CONCENTRATION_DECIMALS),
        poh: round_to(poh, P_SCALE_DECIMALS),
        ph: round_to(ph, P_SCALE_DECIMALS),
    }
}

fn reject<T>(operation: Operation, sentinel: T, error: CalcError) -> Outcome<T> {
    Outcome::Rejected {
        sentinel,
        report: ErrorReport::new(operation, error),
    }
}

// =============================================================================
// Reporting Engine
// =============================================================================

/// The four calculations bound to an error channel.
///
/// Holds nothing but the reporter, so it is `Send + Sync` whenever the
/// reporter is and can be shared freely between threads.
///
/// ## Example
/// ```rust
/// use std::cell::Cell;
/// use ph_core::PhEngine;
///
/// let notices = Cell::new(0);
/// let engine = PhEngine::new(|_: &ph_core::ErrorReport| notices.set(notices.get() + 1));
///
/// engine.strong_acid_ph(0.1, 1.0);
/// engine.strong_acid_ph(0.0, 1.0);
/// assert_eq!(notices.get(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct PhEngine<R = SilentReporter> {
    reporter: R,
}

impl PhEngine<SilentReporter> {
    /// Engine whose rejections are only visible through the returned outcome.
    pub fn silent() -> Self {
        PhEngine {
            reporter: SilentReporter,
        }
    }
}

impl<R: ErrorReporter> PhEngine<R> {
    pub fn new(reporter: R) -> Self {
        PhEngine { reporter }
    }

    /// See [`strong_acid_ph`].
    pub fn strong_acid_ph(&self, concentration: f64, valence: f64) -> Outcome<AcidResult> {
        self.emit(strong_acid_ph(concentration, valence))
    }

    /// See [`weak_acid_ph`].
    pub fn weak_acid_ph(&self, ka: f64, concentration: f64) -> Outcome<AcidResult> {
        self.emit(weak_acid_ph(ka, concentration))
    }

    /// See [`strong_base_ph`].
    pub fn strong_base_ph(&self, concentration: f64, valence: f64) -> Outcome<BaseResult> {
        self.emit(strong_base_ph(concentration, valence))
    }

    /// See [`weak_base_ph`].
    pub fn weak_base_ph(&self, kb: f64, concentration: f64) -> Outcome<BaseResult> {
        self.emit(weak_base_ph(kb, concentration))
    }

    fn emit<T>(&self, outcome: Outcome<T>) -> Outcome<T> {
        if let Some(report) = outcome.report() {
            self.reporter.report(report);
        }
        outcome
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

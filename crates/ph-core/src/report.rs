//! # Error Channel
//!
//! The side channel through which a rejected calculation notifies the
//! presentation layer.
//!
//! ```text
//! PhEngine::strong_acid_ph(0.0, 1.0)
//!      │
//!      ├──► reporter.report(&ErrorReport)   (exactly once, fire-and-forget)
//!      │
//!      └──► returns Outcome::Rejected { sentinel: (0, 0), .. }
//! ```
//!
//! The engine never waits on the reporter and never looks at what it did.

use crate::types::ErrorReport;

/// Receives one notification per rejected calculation.
///
/// Implemented for any `Fn(&ErrorReport)`, so a closure is enough:
///
/// ```rust
/// use ph_core::PhEngine;
///
/// let engine = PhEngine::new(|report: &ph_core::ErrorReport| eprintln!("{report}"));
/// let outcome = engine.weak_base_ph(0.0, 0.1);
/// assert_eq!(outcome.value().ph, 7.0);
/// ```
pub trait ErrorReporter {
    fn report(&self, report: &ErrorReport);
}

impl<F> ErrorReporter for F
where
    F: Fn(&ErrorReport),
{
    fn report(&self, report: &ErrorReport) {
        self(report)
    }
}

/// Discards every report. Callers that only read [`Outcome`](crate::Outcome)
/// use this.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentReporter;

impl ErrorReporter for SilentReporter {
    fn report(&self, _report: &ErrorReport) {}
}

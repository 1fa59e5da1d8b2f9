//! # ph-core: Acid-Base Computation Engine
//!
//! This crate computes the pH (and pOH) of a solution from analytical
//! chemistry inputs. All chemistry lives here as pure functions with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      pH Calculator Architecture                         │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    ph-cli (presentation)                        │   │
//! │  │   mode ──► preset / numbers ──► dispatch ──► render result     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ plain function calls                   │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ ph-core (THIS CRATE) ★                          │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │  engine   │  │  report   │  │ validation│  │   │
//! │  │   │AcidResult │  │strong/weak│  │ Reporter  │  │ positive  │  │   │
//! │  │   │BaseResult │  │acid/base  │  │  channel  │  │ rounding  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO GLOBAL STATE • PURE FUNCTIONS                    │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Inputs, results, the `Outcome` wrapper and error reports
//! - [`engine`] - The four calculations and the reporting `PhEngine`
//! - [`report`] - The out-of-band error channel
//! - [`validation`] - Positivity checks and rounding
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same input = same output, no hidden state
//! 2. **Never Fail the Caller**: bad input yields a sentinel result, not a panic
//! 3. **Explicit Errors**: the rejection reason is a typed error, never a bare string
//!
//! ## Example Usage
//!
//! ```rust
//! use ph_core::engine::{strong_acid_ph, strong_base_ph};
//!
//! // HCl 0.1 M, one ionizable hydrogen
//! let acid = strong_acid_ph(0.1, 1.0);
//! assert_eq!(acid.value().ph, 1.0);
//!
//! // Zero concentration is rejected, but a result is still returned
//! let base = strong_base_ph(0.0, 1.0);
//! assert!(!base.is_computed());
//! assert_eq!(base.value().ph, 7.0);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod engine;
pub mod error;
pub mod report;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use engine::PhEngine;
pub use error::CalcError;
pub use report::{ErrorReporter, SilentReporter};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Ion-product constant of water at standard conditions (pH + pOH = 14).
///
/// Fixed on purpose: the engine does not model temperature.
pub const PKW: f64 = 14.0;

/// pH reported by the base calculations when their input is rejected.
pub const NEUTRAL_PH: f64 = 7.0;

/// Decimal places kept for [H+] / [OH-].
pub const ION_CONCENTRATION_DECIMALS: u32 = 10;

/// Decimal places kept for pH and pOH.
pub const P_SCALE_DECIMALS: u32 = 2;

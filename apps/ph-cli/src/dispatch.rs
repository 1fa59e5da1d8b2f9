//! # Dispatch
//!
//! Maps the selected calculator to exactly one engine operation.
//!
//! ```text
//! ┌──────────────────────┐     ┌──────────────────┐     ┌────────────────────┐
//! │ Command::StrongAcid  │ ──► │ resolve inputs   │ ──► │ engine.strong_acid │
//! │ Command::WeakAcid    │     │ preset + flags   │     │ engine.weak_acid   │
//! │ Command::StrongBase  │     │                  │     │ engine.strong_base │
//! │ Command::WeakBase    │     │                  │     │ engine.weak_base   │
//! └──────────────────────┘     └──────────────────┘     └────────────────────┘
//! ```
//!
//! The engine knows nothing about modes or presets; both live here.

use ph_core::{
    AcidResult, BaseResult, ErrorReport, ErrorReporter, Operation, Outcome, PhEngine, StrongInput,
    WeakInput,
};
use std::io::{self, Write};
use std::sync::{Mutex, PoisonError};

use tracing::debug;

use crate::cli::{StrongArgs, WeakAcidArgs, WeakBaseArgs};
use crate::error::CliError;
use crate::presets::{default_preset, find_preset, CalcInput, Preset};

// =============================================================================
// Request / Response
// =============================================================================

/// A calculator selection together with its numbers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Calculation {
    StrongAcid(StrongInput),
    WeakAcid(WeakInput),
    StrongBase(StrongInput),
    WeakBase(WeakInput),
}

impl Calculation {
    pub fn operation(&self) -> Operation {
        match self {
            Calculation::StrongAcid(_) => Operation::StrongAcid,
            Calculation::WeakAcid(_) => Operation::WeakAcid,
            Calculation::StrongBase(_) => Operation::StrongBase,
            Calculation::WeakBase(_) => Operation::WeakBase,
        }
    }

    pub fn input(&self) -> CalcInput {
        match *self {
            Calculation::StrongAcid(input) | Calculation::StrongBase(input) => {
                CalcInput::Strong(input)
            }
            Calculation::WeakAcid(input) | Calculation::WeakBase(input) => CalcInput::Weak(input),
        }
    }
}

/// A fully resolved calculator request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalcRequest {
    pub calculation: Calculation,
    /// Label of the preset the numbers came from, if one was used.
    pub preset: Option<&'static str>,
}

/// Either shape of engine outcome.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CalcOutcome {
    Acid(Outcome<AcidResult>),
    Base(Outcome<BaseResult>),
}

impl CalcOutcome {
    pub fn report(&self) -> Option<&ErrorReport> {
        match self {
            CalcOutcome::Acid(outcome) => outcome.report(),
            CalcOutcome::Base(outcome) => outcome.report(),
        }
    }
}

/// What the output layer renders.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalcResponse {
    pub request: CalcRequest,
    pub outcome: CalcOutcome,
}

// =============================================================================
// Input Resolution
// =============================================================================
//
// Numbers start from the named preset, or from the calculator's first preset
// when none is named. Explicit flags override individual values. The preset
// label is kept only when the user named one or gave no numbers at all.

fn starting_preset(
    operation: Operation,
    key: Option<&str>,
    any_value_given: bool,
) -> Result<(&'static Preset, Option<&'static str>), CliError> {
    match key {
        Some(key) => {
            let preset = find_preset(operation, key)?;
            Ok((preset, Some(preset.label)))
        }
        None => {
            let preset = default_preset(operation);
            let label = (!any_value_given).then_some(preset.label);
            Ok((preset, label))
        }
    }
}

fn resolve_strong(
    operation: Operation,
    args: &StrongArgs,
) -> Result<(StrongInput, Option<&'static str>), CliError> {
    let any_value = args.concentration.is_some() || args.valence.is_some();
    let (preset, label) = starting_preset(operation, args.preset.as_deref(), any_value)?;
    let start = preset.input.strong();

    let input = StrongInput {
        concentration: args
            .concentration
            .or(start.map(|s| s.concentration))
            .ok_or(CliError::MissingInput {
                operation,
                field: "concentration",
            })?,
        valence: args
            .valence
            .or(start.map(|s| s.valence))
            .ok_or(CliError::MissingInput {
                operation,
                field: "valence",
            })?,
    };

    Ok((input, label))
}

fn resolve_weak(
    operation: Operation,
    key: Option<&str>,
    constant: Option<f64>,
    concentration: Option<f64>,
) -> Result<(WeakInput, Option<&'static str>), CliError> {
    let any_value = constant.is_some() || concentration.is_some();
    let (preset, label) = starting_preset(operation, key, any_value)?;
    let start = preset.input.weak();
    let constant_name = if operation.is_base() { "Kb" } else { "Ka" };

    let input = WeakInput {
        constant: constant
            .or(start.map(|s| s.constant))
            .ok_or(CliError::MissingInput {
                operation,
                field: constant_name,
            })?,
        concentration: concentration
            .or(start.map(|s| s.concentration))
            .ok_or(CliError::MissingInput {
                operation,
                field: "concentration",
            })?,
    };

    Ok((input, label))
}

pub fn strong_acid_request(args: &StrongArgs) -> Result<CalcRequest, CliError> {
    let (input, preset) = resolve_strong(Operation::StrongAcid, args)?;
    Ok(CalcRequest {
        calculation: Calculation::StrongAcid(input),
        preset,
    })
}

pub fn strong_base_request(args: &StrongArgs) -> Result<CalcRequest, CliError> {
    let (input, preset) = resolve_strong(Operation::StrongBase, args)?;
    Ok(CalcRequest {
        calculation: Calculation::StrongBase(input),
        preset,
    })
}

pub fn weak_acid_request(args: &WeakAcidArgs) -> Result<CalcRequest, CliError> {
    let (input, preset) = resolve_weak(
        Operation::WeakAcid,
        args.preset.as_deref(),
        args.ka,
        args.concentration,
    )?;
    Ok(CalcRequest {
        calculation: Calculation::WeakAcid(input),
        preset,
    })
}

pub fn weak_base_request(args: &WeakBaseArgs) -> Result<CalcRequest, CliError> {
    let (input, preset) = resolve_weak(
        Operation::WeakBase,
        args.preset.as_deref(),
        args.kb,
        args.concentration,
    )?;
    Ok(CalcRequest {
        calculation: Calculation::WeakBase(input),
        preset,
    })
}

// =============================================================================
// Dispatch Table
// =============================================================================

/// Runs the engine operation the request selects.
pub fn dispatch<R: ErrorReporter>(engine: &PhEngine<R>, request: CalcRequest) -> CalcResponse {
    debug!(calculation = ?request.calculation, "dispatching calculation");

    let outcome = match request.calculation {
        Calculation::StrongAcid(input) => {
            CalcOutcome::Acid(engine.strong_acid_ph(input.concentration, input.valence))
        }
        Calculation::WeakAcid(input) => {
            CalcOutcome::Acid(engine.weak_acid_ph(input.constant, input.concentration))
        }
        Calculation::StrongBase(input) => {
            CalcOutcome::Base(engine.strong_base_ph(input.concentration, input.valence))
        }
        Calculation::WeakBase(input) => {
            CalcOutcome::Base(engine.weak_base_ph(input.constant, input.concentration))
        }
    };

    CalcResponse { request, outcome }
}

// =============================================================================
// Error Channel
// =============================================================================

/// Writes one line per rejected calculation, stderr by default.
///
/// The notice is the only user-facing output; the log only gets a `debug!`
/// event so the default `warn` filter does not print it a second time.
#[derive(Debug)]
pub struct NoticeReporter<W> {
    out: Mutex<W>,
}

impl NoticeReporter<io::Stderr> {
    pub fn stderr() -> Self {
        NoticeReporter::new(io::stderr())
    }
}

impl<W: Write> NoticeReporter<W> {
    pub fn new(out: W) -> Self {
        NoticeReporter {
            out: Mutex::new(out),
        }
    }
}

impl<W: Write> ErrorReporter for NoticeReporter<W> {
    fn report(&self, report: &ErrorReport) {
        debug!(
            operation = %report.operation,
            field = report.error.field(),
            "calculation rejected"
        );
        let mut out = self.out.lock().unwrap_or_else(PoisonError::into_inner);
        // A closed stderr must not turn a rejection into a crash.
        let _ = writeln!(out, "{report}");
    }
}

//! Command-line definitions.
//!
//! One subcommand per menu section: `home` plus the four calculators, and
//! `presets` to list the worked examples.

use clap::{Args, Parser, Subcommand};
use ph_core::Operation;

use crate::config::OutputFormat;

#[derive(Debug, Parser)]
#[command(name = "ph-calc", version, about = "pH calculator for acids and bases")]
pub struct Cli {
    /// Output format (overrides PH_CALC_FORMAT)
    #[arg(long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    /// Log debug events
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Log errors only
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// What this calculator does
    Home,

    /// pH of a strong acid (HCl, H2SO4, ...)
    StrongAcid(StrongArgs),

    /// pH of a weak acid (CH3COOH, HF, ...)
    WeakAcid(WeakAcidArgs),

    /// pOH and pH of a strong base (NaOH, KOH, ...)
    StrongBase(StrongArgs),

    /// pOH and pH of a weak base (NH4OH, ...)
    WeakBase(WeakBaseArgs),

    /// List the example presets
    Presets(PresetsArgs),
}

/// Inputs of the strong acid and strong base calculators.
#[derive(Debug, Clone, Default, Args)]
pub struct StrongArgs {
    /// Start from a named example (see `presets`)
    #[arg(short, long)]
    pub preset: Option<String>,

    /// Molar concentration (M)
    #[arg(short, long, allow_hyphen_values = true)]
    pub concentration: Option<f64>,

    /// Ionizable H+/OH- per formula unit
    #[arg(short = 'a', long, allow_hyphen_values = true)]
    pub valence: Option<f64>,
}

#[derive(Debug, Clone, Default, Args)]
pub struct WeakAcidArgs {
    /// Start from a named example (see `presets`)
    #[arg(short, long)]
    pub preset: Option<String>,

    /// Acid dissociation constant
    #[arg(short = 'k', long, allow_hyphen_values = true)]
    pub ka: Option<f64>,

    /// Molar concentration (M)
    #[arg(short, long, allow_hyphen_values = true)]
    pub concentration: Option<f64>,
}

#[derive(Debug, Clone, Default, Args)]
pub struct WeakBaseArgs {
    /// Start from a named example (see `presets`)
    #[arg(short, long)]
    pub preset: Option<String>,

    /// Base dissociation constant
    #[arg(short = 'k', long, allow_hyphen_values = true)]
    pub kb: Option<f64>,

    /// Molar concentration (M)
    #[arg(short, long, allow_hyphen_values = true)]
    pub concentration: Option<f64>,
}

#[derive(Debug, Clone, Default, Args)]
pub struct PresetsArgs {
    /// Only this calculator
    #[arg(value_enum)]
    pub calculator: Option<CalculatorArg>,
}

/// Calculator names as typed on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CalculatorArg {
    StrongAcid,
    WeakAcid,
    StrongBase,
    WeakBase,
}

impl From<CalculatorArg> for Operation {
    fn from(arg: CalculatorArg) -> Self {
        match arg {
            CalculatorArg::StrongAcid => Operation::StrongAcid,
            CalculatorArg::WeakAcid => Operation::WeakAcid,
            CalculatorArg::StrongBase => Operation::StrongBase,
            CalculatorArg::WeakBase => Operation::WeakBase,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_strong_acid() {
        let cli = Cli::parse_from(["ph-calc", "strong-acid", "-c", "0.01", "-a", "2"]);
        match cli.command {
            Command::StrongAcid(args) => {
                assert_eq!(args.concentration, Some(0.01));
                assert_eq!(args.valence, Some(2.0));
                assert!(args.preset.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_negative_and_scientific_values() {
        let cli = Cli::parse_from(["ph-calc", "weak-base", "--kb", "-1.3e-9", "--format", "json"]);
        assert_eq!(cli.format, Some(OutputFormat::Json));
        match cli.command {
            Command::WeakBase(args) => assert_eq!(args.kb, Some(-1.3e-9)),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_presets_filter() {
        let cli = Cli::parse_from(["ph-calc", "presets", "weak-acid"]);
        match cli.command {
            Command::Presets(args) => {
                assert_eq!(args.calculator.map(Operation::from), Some(Operation::WeakAcid))
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_verbose_conflicts_with_quiet() {
        assert!(Cli::try_parse_from(["ph-calc", "-v", "-q", "home"]).is_err());
    }
}

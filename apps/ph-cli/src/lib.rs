//! # ph-cli: pH Calculator Front End
//!
//! The presentation layer. Everything chemical is delegated to `ph-core`;
//! this crate only picks a calculator, resolves its numbers and prints.
//!
//! ## Module Structure
//! ```text
//! ph_cli/
//! ├── cli        - clap definitions (one subcommand per menu section)
//! ├── config     - PH_CALC_* environment configuration
//! ├── presets    - Worked examples, two per calculator
//! ├── dispatch   - Calculator → engine operation, error channel
//! ├── output     - Text panel / JSON rendering
//! └── error      - CliError
//! ```

pub mod cli;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod output;
pub mod presets;

use ph_core::PhEngine;
use tracing::info;

use crate::cli::{Cli, Command};
use crate::config::CalcConfig;
use crate::dispatch::{
    dispatch, strong_acid_request, strong_base_request, weak_acid_request, weak_base_request,
    NoticeReporter,
};
use crate::error::CliError;

/// Runs one command and returns the text to print on stdout.
///
/// A rejected calculation is not an error here: its notice goes to stderr
/// through [`NoticeReporter`] and the sentinel result is still rendered.
pub fn run(cli: &Cli, config: &CalcConfig) -> Result<String, CliError> {
    let format = config.format;

    let request = match &cli.command {
        Command::Home => return Ok(output::render_home()),
        Command::Presets(args) => {
            return output::render_presets(args.calculator.map(Into::into), format)
        }
        Command::StrongAcid(args) => strong_acid_request(args)?,
        Command::WeakAcid(args) => weak_acid_request(args)?,
        Command::StrongBase(args) => strong_base_request(args)?,
        Command::WeakBase(args) => weak_base_request(args)?,
    };

    let engine = PhEngine::new(NoticeReporter::stderr());
    let response = dispatch(&engine, request);
    info!(
        operation = %request.calculation.operation(),
        computed = response.outcome.report().is_none(),
        "calculation finished"
    );

    output::render(&response, format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use clap::Parser;

    fn run_args(args: &[&str]) -> Result<String, CliError> {
        let cli = Cli::parse_from(args);
        let config = CalcConfig::default().with_format(cli.format);
        run(&cli, &config)
    }

    #[test]
    fn test_home() {
        assert!(run_args(&["ph-calc", "home"]).unwrap().starts_with("pH Calculator"));
    }

    #[test]
    fn test_weak_acid_preset() {
        let text = run_args(&["ph-calc", "weak-acid", "--preset", "hf"]).unwrap();
        assert!(text.starts_with("Weak Acid: HF (Ka=6.6e-4) 0.01 M"));
        // sqrt(6.6e-6) = 2.569e-3
        assert!(text.contains("- [H+] = 2.57e-3 M"));
        assert!(text.contains("- pH = 2.59"));
    }

    #[test]
    fn test_rejected_input_still_renders() {
        let text = run_args(&["ph-calc", "strong-acid", "-c", "0", "-a", "1"]).unwrap();
        assert!(text.ends_with("- [H+] = 0.00e0 M\n- pH = 0.00"));
    }

    #[test]
    fn test_json_flag() {
        let cli = Cli::parse_from(["ph-calc", "--format", "json", "strong-base"]);
        let config = CalcConfig::default().with_format(cli.format);
        assert_eq!(config.format, OutputFormat::Json);
        let json: serde_json::Value = serde_json::from_str(&run(&cli, &config).unwrap()).unwrap();
        assert_eq!(json["result"]["poh"], 1.0);
    }

    #[test]
    fn test_unknown_preset_is_an_error() {
        let err = run_args(&["ph-calc", "strong-acid", "--preset", "nope"]).unwrap_err();
        assert!(matches!(err, CliError::UnknownPreset { .. }));
    }
}

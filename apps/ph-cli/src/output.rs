//! # Output
//!
//! Renders responses as a text panel or as JSON.
//!
//! ```text
//! Strong Base: Ca(OH)2 0.01 M (a=2)
//!
//! Input:
//! - concentration = 0.01 M
//! - valence = 2
//!
//! Result:
//! - [OH-] = 2.00e-2 M
//! - pOH = 1.70
//! - pH = 12.30
//! ```

use ph_core::{AcidResult, BaseResult, Operation, Outcome};
use serde::Serialize;

use crate::config::OutputFormat;
use crate::dispatch::{CalcOutcome, CalcResponse};
use crate::error::CliError;
use crate::presets::{presets_for, CalcInput, Preset};

// =============================================================================
// Calculation Results
// =============================================================================

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum ResultView {
    Acid(AcidResult),
    Base(BaseResult),
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
enum Status {
    Computed,
    Rejected,
}

#[derive(Debug, Serialize)]
struct JsonResponse {
    calculator: Operation,
    preset: Option<&'static str>,
    input: CalcInput,
    status: Status,
    result: ResultView,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl From<&CalcResponse> for JsonResponse {
    fn from(response: &CalcResponse) -> Self {
        let (result, computed) = match response.outcome {
            CalcOutcome::Acid(outcome) => (ResultView::Acid(*outcome.value()), outcome.is_computed()),
            CalcOutcome::Base(outcome) => (ResultView::Base(*outcome.value()), outcome.is_computed()),
        };

        JsonResponse {
            calculator: response.request.calculation.operation(),
            preset: response.request.preset,
            input: response.request.calculation.input(),
            status: if computed { Status::Computed } else { Status::Rejected },
            result,
            error: response.outcome.report().map(|report| report.message()),
        }
    }
}

/// Renders a calculation in the requested format.
pub fn render(response: &CalcResponse, format: OutputFormat) -> Result<String, CliError> {
    match format {
        OutputFormat::Text => Ok(render_text(response)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&JsonResponse::from(response))?),
    }
}

fn render_text(response: &CalcResponse) -> String {
    let operation = response.request.calculation.operation();
    let mut lines = Vec::new();

    match response.request.preset {
        Some(label) => lines.push(format!("{operation}: {label}")),
        None => lines.push(operation.to_string()),
    }

    lines.push(String::new());
    lines.push("Input:".to_string());
    lines.extend(input_lines(operation, response.request.calculation.input()));

    lines.push(String::new());
    lines.push("Result:".to_string());
    match response.outcome {
        CalcOutcome::Acid(outcome) => lines.extend(acid_lines(&outcome)),
        CalcOutcome::Base(outcome) => lines.extend(base_lines(&outcome)),
    }

    lines.join("\n")
}

fn input_lines(operation: Operation, input: CalcInput) -> Vec<String> {
    match input {
        CalcInput::Strong(input) => vec![
            format!("- concentration = {} M", input.concentration),
            format!("- valence = {}", input.valence),
        ],
        CalcInput::Weak(input) => {
            let name = if operation.is_base() { "Kb" } else { "Ka" };
            vec![
                format!("- {name} = {:e}", input.constant),
                format!("- concentration = {} M", input.concentration),
            ]
        }
    }
}

fn acid_lines(outcome: &Outcome<AcidResult>) -> Vec<String> {
    let result = outcome.value();
    vec![
        format!("- [H+] = {:.2e} M", result.h_plus),
        format!("- pH = {:.2}", result.ph),
    ]
}

fn base_lines(outcome: &Outcome<BaseResult>) -> Vec<String> {
    let result = outcome.value();
    vec![
        format!("- [OH-] = {:.2e} M", result.oh_minus),
        format!("- pOH = {:.2}", result.poh),
        format!("- pH = {:.2}", result.ph),
    ]
}

// =============================================================================
// Home & Presets
// =============================================================================

/// The landing section.
pub fn render_home() -> String {
    [
        "pH Calculator",
        "",
        "Computes the pH of:",
        "- Strong acids (HCl, H2SO4, ...)      ph-calc strong-acid",
        "- Weak acids (CH3COOH, HF, ...)       ph-calc weak-acid",
        "- Strong bases (NaOH, KOH, ...)       ph-calc strong-base",
        "- Weak bases (NH4OH, ...)             ph-calc weak-base",
        "",
        "Run `ph-calc presets` for worked examples.",
    ]
    .join("\n")
}

#[derive(Debug, Serialize)]
struct PresetGroup {
    calculator: Operation,
    presets: &'static [Preset],
}

/// Lists presets for one calculator, or for all of them.
pub fn render_presets(filter: Option<Operation>, format: OutputFormat) -> Result<String, CliError> {
    let groups: Vec<PresetGroup> = Operation::ALL
        .into_iter()
        .filter(|operation| filter.map_or(true, |wanted| wanted == *operation))
        .map(|calculator| PresetGroup {
            calculator,
            presets: presets_for(calculator),
        })
        .collect();

    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&groups)?),
        OutputFormat::Text => {
            let mut lines = Vec::new();
            for group in &groups {
                lines.push(format!("{}:", group.calculator));
                for preset in group.presets {
                    lines.push(format!("  {:<8} {}", preset.key, preset.label));
                }
            }
            Ok(lines.join("\n"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{StrongArgs, WeakBaseArgs};
    use crate::dispatch::{dispatch, strong_acid_request, strong_base_request, weak_base_request};
    use ph_core::PhEngine;
    use pretty_assertions::assert_eq;

    fn respond_strong_base(args: StrongArgs) -> CalcResponse {
        dispatch(&PhEngine::silent(), strong_base_request(&args).unwrap())
    }

    #[test]
    fn test_text_base_panel() {
        let response = respond_strong_base(StrongArgs {
            preset: Some("caoh2".to_string()),
            ..Default::default()
        });
        let expected = "\
Strong Base: Ca(OH)2 0.01 M (a=2)

Input:
- concentration = 0.01 M
- valence = 2

Result:
- [OH-] = 2.00e-2 M
- pOH = 1.70
- pH = 12.30";
        assert_eq!(render(&response, OutputFormat::Text).unwrap(), expected);
    }

    #[test]
    fn test_text_acid_panel_without_preset() {
        let args = StrongArgs {
            preset: None,
            concentration: Some(0.1),
            valence: Some(1.0),
        };
        let response = dispatch(&PhEngine::silent(), strong_acid_request(&args).unwrap());
        let expected = "\
Strong Acid

Input:
- concentration = 0.1 M
- valence = 1

Result:
- [H+] = 1.00e-1 M
- pH = 1.00";
        assert_eq!(render(&response, OutputFormat::Text).unwrap(), expected);
    }

    #[test]
    fn test_text_weak_base_input_uses_kb() {
        let response = dispatch(
            &PhEngine::silent(),
            weak_base_request(&WeakBaseArgs::default()).unwrap(),
        );
        let text = render(&response, OutputFormat::Text).unwrap();
        assert!(text.contains("- Kb = 1.8e-5"));
        assert!(text.contains("- pOH = 2.87"));
        assert!(text.contains("- pH = 11.13"));
    }

    #[test]
    fn test_text_rejected_shows_sentinel() {
        let response = respond_strong_base(StrongArgs {
            preset: None,
            concentration: Some(0.0),
            valence: Some(1.0),
        });
        let text = render(&response, OutputFormat::Text).unwrap();
        assert!(text.ends_with("- [OH-] = 0.00e0 M\n- pOH = 0.00\n- pH = 7.00"));
    }

    #[test]
    fn test_json_computed() {
        let response = respond_strong_base(StrongArgs::default());
        let json: serde_json::Value =
            serde_json::from_str(&render(&response, OutputFormat::Json).unwrap()).unwrap();

        assert_eq!(json["calculator"], "strong_base");
        assert_eq!(json["preset"], "NaOH 0.1 M (a=1)");
        assert_eq!(json["status"], "computed");
        assert_eq!(json["input"]["concentration"], 0.1);
        assert_eq!(json["result"]["ph"], 13.0);
        assert!(json.get("error").is_none());
    }

    #[test]
    fn test_json_rejected() {
        let response = respond_strong_base(StrongArgs {
            preset: None,
            concentration: Some(0.1),
            valence: Some(-1.0),
        });
        let json: serde_json::Value =
            serde_json::from_str(&render(&response, OutputFormat::Json).unwrap()).unwrap();

        assert_eq!(json["status"], "rejected");
        assert_eq!(json["result"]["ph"], 7.0);
        assert_eq!(
            json["error"],
            "Error: values must be positive (valence = -1)"
        );
    }

    #[test]
    fn test_presets_text_filtered() {
        let expected = "\
Weak Acid:
  ch3cooh  CH3COOH (Ka=1.8e-5) 0.1 M
  hf       HF (Ka=6.6e-4) 0.01 M";
        assert_eq!(
            render_presets(Some(Operation::WeakAcid), OutputFormat::Text).unwrap(),
            expected
        );
    }

    #[test]
    fn test_presets_json_lists_all() {
        let json: serde_json::Value =
            serde_json::from_str(&render_presets(None, OutputFormat::Json).unwrap()).unwrap();
        let groups = json.as_array().unwrap();
        assert_eq!(groups.len(), 4);
        assert_eq!(groups[3]["presets"][1]["key"], "aloh3");
        assert_eq!(groups[3]["presets"][1]["input"]["constant"], 1.3e-9);
    }

    #[test]
    fn test_home_lists_every_calculator() {
        let home = render_home();
        for command in ["strong-acid", "weak-acid", "strong-base", "weak-base"] {
            assert!(home.contains(command));
        }
    }
}

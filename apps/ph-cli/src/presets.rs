//! # Example Presets
//!
//! Two worked examples per calculator. Selecting a calculator without any
//! numbers uses its first preset.
//!
//! ```text
//! ┌──────────────┬─────────┬──────────────────────────────┐
//! │ Calculator   │ Key     │ Example                      │
//! ├──────────────┼─────────┼──────────────────────────────┤
//! │ Strong Acid  │ hcl     │ HCl 0.1 M (a=1)              │
//! │              │ h2so4   │ H2SO4 0.01 M (a=2)           │
//! │ Weak Acid    │ ch3cooh │ CH3COOH (Ka=1.8e-5) 0.1 M    │
//! │              │ hf      │ HF (Ka=6.6e-4) 0.01 M        │
//! │ Strong Base  │ naoh    │ NaOH 0.1 M (a=1)             │
//! │              │ caoh2   │ Ca(OH)2 0.01 M (a=2)         │
//! │ Weak Base    │ nh4oh   │ NH4OH (Kb=1.8e-5) 0.1 M      │
//! │              │ aloh3   │ Al(OH)3 (Kb=1.3e-9) 0.01 M   │
//! └──────────────┴─────────┴──────────────────────────────┘
//! ```

use ph_core::{Operation, StrongInput, WeakInput};
use serde::Serialize;

use crate::error::CliError;

/// Numbers a preset (or the user) supplies to one calculator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CalcInput {
    Strong(StrongInput),
    Weak(WeakInput),
}

impl CalcInput {
    pub fn strong(&self) -> Option<StrongInput> {
        match self {
            CalcInput::Strong(input) => Some(*input),
            CalcInput::Weak(_) => None,
        }
    }

    pub fn weak(&self) -> Option<WeakInput> {
        match self {
            CalcInput::Weak(input) => Some(*input),
            CalcInput::Strong(_) => None,
        }
    }
}

/// A named example.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Preset {
    pub key: &'static str,
    pub label: &'static str,
    pub input: CalcInput,
}

const fn strong(key: &'static str, label: &'static str, concentration: f64, valence: f64) -> Preset {
    Preset {
        key,
        label,
        input: CalcInput::Strong(StrongInput {
            concentration,
            valence,
        }),
    }
}

const fn weak(key: &'static str, label: &'static str, constant: f64, concentration: f64) -> Preset {
    Preset {
        key,
        label,
        input: CalcInput::Weak(WeakInput {
            constant,
            concentration,
        }),
    }
}

static STRONG_ACID: [Preset; 2] = [
    strong("hcl", "HCl 0.1 M (a=1)", 0.1, 1.0),
    strong("h2so4", "H2SO4 0.01 M (a=2)", 0.01, 2.0),
];

static WEAK_ACID: [Preset; 2] = [
    weak("ch3cooh", "CH3COOH (Ka=1.8e-5) 0.1 M", 1.8e-5, 0.1),
    weak("hf", "HF (Ka=6.6e-4) 0.01 M", 6.6e-4, 0.01),
];

static STRONG_BASE: [Preset; 2] = [
    strong("naoh", "NaOH 0.1 M (a=1)", 0.1, 1.0),
    strong("caoh2", "Ca(OH)2 0.01 M (a=2)", 0.01, 2.0),
];

static WEAK_BASE: [Preset; 2] = [
    weak("nh4oh", "NH4OH (Kb=1.8e-5) 0.1 M", 1.8e-5, 0.1),
    weak("aloh3", "Al(OH)3 (Kb=1.3e-9) 0.01 M", 1.3e-9, 0.01),
];

/// All presets of one calculator, default first.
pub fn presets_for(operation: Operation) -> &'static [Preset] {
    match operation {
        Operation::StrongAcid => &STRONG_ACID,
        Operation::WeakAcid => &WEAK_ACID,
        Operation::StrongBase => &STRONG_BASE,
        Operation::WeakBase => &WEAK_BASE,
    }
}

/// The preset used when the user gives neither numbers nor `--preset`.
pub fn default_preset(operation: Operation) -> &'static Preset {
    &presets_for(operation)[0]
}

/// Looks up a preset by key (case-insensitive).
pub fn find_preset(operation: Operation, key: &str) -> Result<&'static Preset, CliError> {
    let presets = presets_for(operation);
    presets
        .iter()
        .find(|preset| preset.key.eq_ignore_ascii_case(key.trim()))
        .ok_or_else(|| {
            let keys: Vec<&str> = presets.iter().map(|preset| preset.key).collect();
            CliError::unknown_preset(operation, key, &keys)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_calculator_has_two_presets() {
        for operation in Operation::ALL {
            assert_eq!(presets_for(operation).len(), 2);
        }
    }

    #[test]
    fn test_preset_shapes_match_calculator() {
        for operation in Operation::ALL {
            let weak = matches!(operation, Operation::WeakAcid | Operation::WeakBase);
            for preset in presets_for(operation) {
                assert_eq!(matches!(preset.input, CalcInput::Weak(_)), weak, "{}", preset.key);
            }
        }
    }

    #[test]
    fn test_find_preset() {
        let preset = find_preset(Operation::StrongAcid, "H2SO4").unwrap();
        assert_eq!(
            preset.input,
            CalcInput::Strong(StrongInput {
                concentration: 0.01,
                valence: 2.0
            })
        );

        let preset = find_preset(Operation::WeakBase, "aloh3").unwrap();
        assert_eq!(preset.label, "Al(OH)3 (Kb=1.3e-9) 0.01 M");
    }

    #[test]
    fn test_find_preset_wrong_calculator() {
        let err = find_preset(Operation::StrongBase, "hcl").unwrap_err();
        assert!(err.to_string().contains("naoh, caoh2"));
    }

    #[test]
    fn test_default_preset() {
        assert_eq!(default_preset(Operation::WeakAcid).key, "ch3cooh");
        assert_eq!(default_preset(Operation::StrongBase).key, "naoh");
    }
}

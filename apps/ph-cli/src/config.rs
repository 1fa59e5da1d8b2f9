//! CLI configuration.
//!
//! Configuration is loaded from environment variables with fallback to
//! defaults. Command-line flags override whatever is loaded here.
//!
//! | Variable         | Default | Meaning                               |
//! |------------------|---------|---------------------------------------|
//! | `PH_CALC_FORMAT` | `text`  | Output format, `text` or `json`       |
//! | `PH_CALC_LOG`    | unset   | `tracing` filter directive            |

use std::env;
use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

pub const FORMAT_VAR: &str = "PH_CALC_FORMAT";
pub const LOG_VAR: &str = "PH_CALC_LOG";

/// How results are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable result panel
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ConfigError::InvalidValue(FORMAT_VAR.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => f.write_str("text"),
            OutputFormat::Json => f.write_str("json"),
        }
    }
}

/// Calculator configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalcConfig {
    /// Output format when `--format` is not given
    pub format: OutputFormat,

    /// Log filter directive; overrides `--verbose`/`--quiet`
    pub log_filter: Option<String>,
}

impl CalcConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let format = match lookup(FORMAT_VAR) {
            Some(raw) => raw.parse()?,
            None => OutputFormat::default(),
        };

        let log_filter = lookup(LOG_VAR).filter(|value| !value.trim().is_empty());

        Ok(CalcConfig { format, log_filter })
    }

    /// Applies command-line overrides.
    pub fn with_format(mut self, format: Option<OutputFormat>) -> Self {
        if let Some(format) = format {
            self.format = format;
        }
        self
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = CalcConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, CalcConfig::default());
        assert_eq!(config.format, OutputFormat::Text);
        assert!(config.log_filter.is_none());
    }

    #[test]
    fn test_reads_environment() {
        let config =
            CalcConfig::from_lookup(lookup(&[(FORMAT_VAR, "JSON"), (LOG_VAR, "ph_cli=debug")]))
                .unwrap();
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.log_filter.as_deref(), Some("ph_cli=debug"));
    }

    #[test]
    fn test_blank_log_filter_is_ignored() {
        let config = CalcConfig::from_lookup(lookup(&[(LOG_VAR, "  ")])).unwrap();
        assert!(config.log_filter.is_none());
    }

    #[test]
    fn test_invalid_format() {
        let err = CalcConfig::from_lookup(lookup(&[(FORMAT_VAR, "xml")])).unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for PH_CALC_FORMAT");
    }

    #[test]
    fn test_flag_overrides_environment() {
        let config = CalcConfig::from_lookup(lookup(&[(FORMAT_VAR, "json")]))
            .unwrap()
            .with_format(Some(OutputFormat::Text));
        assert_eq!(config.format, OutputFormat::Text);

        let config = config.with_format(None);
        assert_eq!(config.format, OutputFormat::Text);
    }
}

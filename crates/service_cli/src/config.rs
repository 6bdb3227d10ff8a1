//! CLI configuration.
//!
//! Loaded from an optional TOML file:
//!
//! ```toml
//! [solver]
//! tolerance = 1e-8
//! max_iterations = 500
//!
//! [output]
//! format = "csv"
//! eigenvalues = 7
//! ```
//!
//! Every key is optional. `TRANSIENT_FORMAT` and `TRANSIENT_EIGENVALUES`
//! override the `[output]` section.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use conduction_core::math::solvers::SolverConfig;
use conduction_models::field::DEFAULT_EIGENVALUE_COUNT;
use serde::Deserialize;
use tracing::debug;

use crate::{CliError, Result};

/// Rendering of command results.
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Boxed, aligned table
    #[default]
    Table,
    /// Comma-separated values with a header row
    Csv,
    /// Pretty-printed JSON
    Json,
}

impl FromStr for OutputFormat {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "table" => Ok(Self::Table),
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            other => Err(CliError::InvalidArgument(format!(
                "Unknown format: {}. Supported: json, csv, table",
                other
            ))),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Table => "table",
            Self::Csv => "csv",
            Self::Json => "json",
        })
    }
}

/// `[solver]` section.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq)]
#[serde(default)]
pub struct SolverSection {
    /// Newton stopping tolerance on |f(λ)|
    pub tolerance: f64,
    /// Newton iteration cap per eigenvalue
    pub max_iterations: usize,
}

impl Default for SolverSection {
    fn default() -> Self {
        let defaults = SolverConfig::<f64>::default();
        Self {
            tolerance: defaults.tolerance,
            max_iterations: defaults.max_iterations,
        }
    }
}

/// `[output]` section.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq)]
#[serde(default)]
pub struct OutputSection {
    /// Default rendering
    pub format: OutputFormat,
    /// Default number of series terms
    pub eigenvalues: usize,
}

impl Default for OutputSection {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            eigenvalues: DEFAULT_EIGENVALUE_COUNT,
        }
    }
}

/// Whole configuration file.
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct TransientConfig {
    /// Root finder settings
    pub solver: SolverSection,
    /// Output defaults
    pub output: OutputSection,
}

impl TransientConfig {
    /// Parses a TOML document.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(|e| CliError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads `path`, falling back to defaults when the file does not exist.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "configuration file not found, using defaults");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Applies `TRANSIENT_FORMAT` and `TRANSIENT_EIGENVALUES`.
    pub fn with_env_override(mut self) -> Result<Self> {
        if let Ok(format) = std::env::var("TRANSIENT_FORMAT") {
            self.output.format = format.parse()?;
        }
        if let Ok(count) = std::env::var("TRANSIENT_EIGENVALUES") {
            self.output.eigenvalues = count.parse().map_err(|_| {
                CliError::Config(format!("TRANSIENT_EIGENVALUES must be an integer, got {}", count))
            })?;
        }
        self.validate()?;
        Ok(self)
    }

    /// Checks value ranges.
    pub fn validate(&self) -> Result<()> {
        let mut errors = Vec::new();

        if !(self.solver.tolerance.is_finite() && self.solver.tolerance > 0.0) {
            errors.push(format!(
                "solver.tolerance must be positive, got {}",
                self.solver.tolerance
            ));
        }
        if self.solver.max_iterations == 0 {
            errors.push("solver.max_iterations must be greater than 0".to_string());
        }
        if self.output.eigenvalues == 0 {
            errors.push("output.eigenvalues must be greater than 0".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(CliError::Config(errors.join("; ")))
        }
    }

    /// Root finder configuration for eigenvalue solves.
    pub fn solver_config(&self) -> SolverConfig<f64> {
        SolverConfig {
            tolerance: self.solver.tolerance,
            max_iterations: self.solver.max_iterations,
        }
    }
}

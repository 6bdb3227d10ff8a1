//! CLI error types.

use conduction_models::ConductionError;
use thiserror::Error;

/// Errors surfaced by the `transient` binary.
#[derive(Debug, Error)]
pub enum CliError {
    /// Analysis failed.
    #[error(transparent)]
    Conduction(#[from] ConductionError),

    /// Configuration file could not be parsed or holds invalid values.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Command line arguments are inconsistent.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV encoding failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON encoding failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;
    use conduction_models::Geometry;

    #[test]
    fn test_conduction_errors_display_unchanged() {
        let inner = ConductionError::TooManyEigenvalues {
            geometry: Geometry::Cylinder,
            requested: 9,
            max: 7,
        };
        let message = inner.to_string();
        let err: CliError = inner.into();
        assert_eq!(err.to_string(), message);
    }

    #[test]
    fn test_invalid_argument_display() {
        let err = CliError::InvalidArgument("either --time or --times".to_string());
        assert_eq!(err.to_string(), "Invalid argument: either --time or --times");
    }
}

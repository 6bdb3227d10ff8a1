//! Error types for conduction analysis.
//!
//! This module provides:
//! - `ConductionError`: Errors from eigenvalue solving, field evaluation and
//!   heat integration

use conduction_core::types::SolverError;
use thiserror::Error;

use crate::geometry::Geometry;

/// Conduction analysis errors.
///
/// Errors fall into three families:
/// - domain errors: Biot number or eigenvalue count outside what a geometry
///   supports (`BiotOutOfRange`, `TooManyEigenvalues`)
/// - non-convergence: the root finder could not produce an eigenvalue
///   (`NonConvergence`)
/// - input errors: missing or malformed inputs, checked before any numeric
///   work starts (`InvalidInput`)
///
/// # Examples
/// ```
/// use conduction_models::{ConductionError, Geometry};
///
/// let err = ConductionError::TooManyEigenvalues {
///     geometry: Geometry::Cylinder,
///     requested: 8,
///     max: 7,
/// };
/// assert!(err.is_domain_error());
/// assert!(format!("{}", err).contains("at most 7"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConductionError {
    /// Biot number negative, non-finite or above the geometry bound.
    #[error("Biot number {biot} outside the {geometry} range [0, {max}]")]
    BiotOutOfRange {
        /// Geometry whose bound was violated
        geometry: Geometry,
        /// The rejected Biot number
        biot: f64,
        /// Upper bound for the geometry
        max: f64,
    },

    /// More eigenvalues requested than the geometry supports.
    #[error("{geometry} supports at most {max} eigenvalues, {requested} requested")]
    TooManyEigenvalues {
        /// Geometry whose cap was exceeded
        geometry: Geometry,
        /// Number of eigenvalues requested
        requested: usize,
        /// Cap for the geometry
        max: usize,
    },

    /// Root finding failed for one eigenvalue.
    #[error("Eigenvalue {index} did not converge: {source}")]
    NonConvergence {
        /// Zero-based position of the failing eigenvalue
        index: usize,
        /// Underlying solver failure
        source: SolverError,
    },

    /// Missing or malformed input.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl ConductionError {
    /// Convenience constructor for [`ConductionError::InvalidInput`].
    pub fn invalid_input(message: impl Into<String>) -> Self {
        ConductionError::InvalidInput(message.into())
    }

    /// Biot number or eigenvalue count outside the supported range.
    pub fn is_domain_error(&self) -> bool {
        matches!(
            self,
            ConductionError::BiotOutOfRange { .. } | ConductionError::TooManyEigenvalues { .. }
        )
    }

    /// Root finder exhausted or diverged.
    pub fn is_non_convergence(&self) -> bool {
        matches!(self, ConductionError::NonConvergence { .. })
    }

    /// Missing or malformed input.
    pub fn is_input_error(&self) -> bool {
        matches!(self, ConductionError::InvalidInput(_))
    }
}

/// Result alias for conduction operations.
pub type Result<T> = std::result::Result<T, ConductionError>;

//! Error types for structured error handling.
//!
//! This module provides:
//! - `SolverError`: Errors from root-finding solvers

use thiserror::Error;

/// Root-finding solver errors.
///
/// Provides structured error handling for root-finding algorithms
/// with descriptive context for each failure mode.
///
/// # Variants
/// - `MaxIterationsExceeded`: Iteration budget exhausted before meeting tolerance
/// - `DerivativeNearZero`: Newton step undefined
/// - `NumericalInstability`: Iterate left the finite range
/// - `NoBracket`: Endpoints of a bracketed search do not straddle a root
///
/// # Examples
/// ```
/// use conduction_core::types::SolverError;
///
/// let err = SolverError::MaxIterationsExceeded { iterations: 100 };
/// assert!(format!("{}", err).contains("100 iterations"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SolverError {
    /// Solver failed to converge within maximum iterations.
    #[error("Failed to converge after {iterations} iterations")]
    MaxIterationsExceeded {
        /// Number of iterations attempted
        iterations: usize,
    },

    /// Derivative near zero (division by zero risk in Newton-Raphson).
    #[error("Derivative near zero at x = {x}")]
    DerivativeNearZero {
        /// The x value where derivative was near zero
        x: f64,
    },

    /// Numerical instability during computation.
    #[error("Numerical instability: {0}")]
    NumericalInstability(String),

    /// Bracket endpoints have function values of the same sign.
    #[error("No sign change between {a} and {b}")]
    NoBracket {
        /// Lower endpoint
        a: f64,
        /// Upper endpoint
        b: f64,
    },
}

impl SolverError {
    /// Returns `true` when the iteration budget ran out.
    pub fn is_max_iterations(&self) -> bool {
        matches!(self, SolverError::MaxIterationsExceeded { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_iterations_display() {
        let err = SolverError::MaxIterationsExceeded { iterations: 10_000 };
        assert_eq!(
            format!("{}", err),
            "Failed to converge after 10000 iterations"
        );
        assert!(err.is_max_iterations());
    }

    #[test]
    fn test_derivative_near_zero_display() {
        let err = SolverError::DerivativeNearZero { x: 1.5 };
        assert_eq!(format!("{}", err), "Derivative near zero at x = 1.5");
        assert!(!err.is_max_iterations());
    }

    #[test]
    fn test_numerical_instability_display() {
        let err = SolverError::NumericalInstability("iterate is NaN".to_string());
        assert_eq!(format!("{}", err), "Numerical instability: iterate is NaN");
    }

    #[test]
    fn test_no_bracket_display() {
        let err = SolverError::NoBracket { a: 1.0, b: 2.5 };
        assert_eq!(format!("{}", err), "No sign change between 1 and 2.5");
        assert!(!err.is_max_iterations());
    }

    #[test]
    fn test_error_trait_implementation() {
        let err = SolverError::MaxIterationsExceeded { iterations: 1 };
        let _: &dyn std::error::Error = &err;
    }

    #[test]
    fn test_clone_and_equality() {
        let err = SolverError::DerivativeNearZero { x: 0.25 };
        assert_eq!(err.clone(), err);
        assert_ne!(err, SolverError::DerivativeNearZero { x: 0.5 });
    }
}

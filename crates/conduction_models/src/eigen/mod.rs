//! Eigenvalues of the characteristic equations.
//!
//! - [`EigenvalueSolver`]: Newton root walk with per-geometry seed and step
//! - [`EigenvalueSet`]: the immutable, strictly increasing result

mod set;
mod solver;

pub use set::EigenvalueSet;
pub use solver::EigenvalueSolver;

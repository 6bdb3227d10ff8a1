//! # conduction_core: Numerical Foundation for Transient Conduction
//!
//! ## Layer 1 (Foundation) Role
//!
//! conduction_core is the bottom layer of the workspace, providing:
//! - Newton-Raphson and Brent root finding (`math::solvers`)
//! - Bessel functions of the first kind (`math::bessel`)
//! - Central-difference derivatives (`math::differentiation`)
//! - Error types: `SolverError` (`types::error`)
//!
//! It knows nothing about heat transfer; geometry and physics live in
//! `conduction_models`.
//!
//! ## Usage Examples
//!
//! ```rust
//! use conduction_core::math::bessel::bessel_j;
//! use conduction_core::math::solvers::NewtonRaphsonSolver;
//!
//! // First zero of J₀ starting from the classic 2.4 guess
//! let solver = NewtonRaphsonSolver::with_defaults();
//! let root = solver
//!     .find_root(|x: f64| bessel_j(0, x), |x| -bessel_j(1, x), 2.4)
//!     .unwrap();
//! assert!((root - 2.404_825_557_7).abs() < 1e-5);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for `SolverConfig` and `SolverError`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod types;

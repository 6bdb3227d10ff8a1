//! Numerical building blocks.
//!
//! - `solvers`: Newton-Raphson root finding with iteration control
//! - `bessel`: Bessel functions of the first kind by power series
//! - `differentiation`: Central-difference derivatives

pub mod bessel;
pub mod differentiation;
pub mod solvers;

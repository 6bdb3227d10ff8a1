//! # conduction_models (L2: Physics)
//!
//! Transient one-dimensional heat conduction in a plane wall, an infinite
//! cylinder and a sphere suddenly exposed to a fluid, solved as truncated
//! Fourier-Bessel series.
//!
//! This crate provides:
//! - Geometry definitions and characteristic equations (`geometry`)
//! - Ordered eigenvalue solving with per-geometry limits (`eigen`)
//! - Temperature fields, cached multi-time evaluation and profile requests
//!   (`field`)
//! - Heat content integration over sampled profiles (`heat`)
//! - Dimensionless groups (`params`)
//! - Flat entry points (`analysis`)
//!
//! ## Design Principles
//!
//! - **Enum-based geometry** for static dispatch over [`BodyShape`]
//! - **Immutable eigenvalue sets** shared across any number of evaluations
//! - **Builder pattern** for profile requests with eager input checks
//!
//! ## Example
//!
//! ```
//! use conduction_models::{EigenvalueSolver, Geometry, TemperatureField};
//!
//! let set = EigenvalueSolver::new(Geometry::Sphere).solve(30.0, 6).unwrap();
//! let field = TemperatureField::new(Geometry::Sphere, set.values(), 0.05).unwrap();
//!
//! // Long after exposure the sphere sits at the fluid temperature
//! let t = field.temperature(0.0, 50.0, 20.0, 500.0);
//! assert!((t - 500.0).abs() < 1e-9);
//! ```
//!
//! ## Feature Flags
//!
//! - `parallel` (default): evaluate the times of a series with rayon
//! - `serde`: Enable serialisation of results

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analysis;
pub mod eigen;
pub mod error;
pub mod field;
pub mod geometry;
pub mod heat;
pub mod params;

pub use eigen::{EigenvalueSet, EigenvalueSolver};
pub use error::{ConductionError, Result};
pub use field::{
    MirroredProfile, ProfileRequest, ProfileSeries, ProfileSolution, SpatialCoefficients,
    TemperatureField, TemperatureProfile,
};
pub use geometry::{BodyShape, Geometry, GeometrySpec};
pub use heat::{BodyDimensions, HeatContentIntegrator};

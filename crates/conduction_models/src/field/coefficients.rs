//! Time-independent series coefficients.
//!
//! θ(x, τ) = Σᵢ cᵢ(x) · e^(−λᵢ²τ). The first factor depends only on position
//! and the second only on time, so a scan over many times computes cᵢ(x)
//! once per coordinate and the decay factors once per time.

use crate::geometry::{BodyShape, Geometry};
use crate::params::temperature_from_gradient;

/// Per-coordinate, per-eigenvalue weights cᵢ(x).
///
/// # Examples
/// ```
/// use conduction_models::{EigenvalueSolver, Geometry, SpatialCoefficients, TemperatureField};
///
/// let set = EigenvalueSolver::new(Geometry::Sphere).solve(1.0, 5).unwrap();
/// let positions = [0.0, 0.5, 1.0];
/// let cached = SpatialCoefficients::compute(Geometry::Sphere, set.values(), &positions, 1.0);
/// let field = TemperatureField::new(Geometry::Sphere, set.values(), 1.0).unwrap();
///
/// for (fast, direct) in cached.gradients(0.3).iter().zip(field.gradients(&positions, 0.3)) {
///     assert!((fast - direct).abs() < 1e-12);
/// }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SpatialCoefficients {
    eigenvalues: Vec<f64>,
    rows: Vec<Vec<f64>>,
}

impl SpatialCoefficients {
    /// Computes cᵢ(x) for every position and eigenvalue.
    pub fn compute(geometry: Geometry, eigenvalues: &[f64], positions: &[f64], length: f64) -> Self {
        let rows = positions
            .iter()
            .map(|&position| {
                let xi = position / length;
                eigenvalues
                    .iter()
                    .map(|&lambda| geometry.coefficient(lambda, xi))
                    .collect()
            })
            .collect();
        Self {
            eigenvalues: eigenvalues.to_vec(),
            rows,
        }
    }

    /// Number of coordinates.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// `true` when no coordinates were given.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Coefficients of one coordinate, one per eigenvalue.
    pub fn row(&self, index: usize) -> Option<&[f64]> {
        self.rows.get(index).map(Vec::as_slice)
    }

    /// Decay factors e^(−λᵢ²τ).
    pub fn decay_factors(&self, fourier: f64) -> Vec<f64> {
        self.eigenvalues
            .iter()
            .map(|&lambda| (-lambda * lambda * fourier).exp())
            .collect()
    }

    /// θ at every coordinate for Fourier number `fourier`.
    pub fn gradients(&self, fourier: f64) -> Vec<f64> {
        let decay = self.decay_factors(fourier);
        self.rows
            .iter()
            .map(|row| row.iter().zip(&decay).map(|(c, d)| c * d).sum())
            .collect()
    }

    /// Temperatures at every coordinate for Fourier number `fourier`.
    pub fn temperatures(&self, fourier: f64, start: f64, ambient: f64) -> Vec<f64> {
        self.gradients(fourier)
            .into_iter()
            .map(|gradient| temperature_from_gradient(gradient, start, ambient))
            .collect()
    }

    /// Temperatures for each Fourier number, one row per time.
    ///
    /// Times are independent and evaluated on the rayon pool.
    #[cfg(feature = "parallel")]
    pub fn temperature_series(&self, fouriers: &[f64], start: f64, ambient: f64) -> Vec<Vec<f64>> {
        use rayon::prelude::*;

        fouriers
            .par_iter()
            .map(|&fourier| self.temperatures(fourier, start, ambient))
            .collect()
    }

    /// Temperatures for each Fourier number, one row per time.
    #[cfg(not(feature = "parallel"))]
    pub fn temperature_series(&self, fouriers: &[f64], start: f64, ambient: f64) -> Vec<Vec<f64>> {
        fouriers
            .iter()
            .map(|&fourier| self.temperatures(fourier, start, ambient))
            .collect()
    }
}

//! Direct evaluation of the series temperature field.

use super::SpatialCoefficients;
use crate::error::{ConductionError, Result};
use crate::geometry::{BodyShape, Geometry};
use crate::params::temperature_from_gradient;

/// Series solution for one body, borrowing its eigenvalues.
///
/// `gradient` is the dimensionless temperature
/// θ = (T − T_ambient)/(T_start − T_ambient), equal to 1 everywhere at τ = 0
/// (up to series truncation) and decaying to 0 as τ grows.
///
/// # Examples
/// ```
/// use conduction_models::{EigenvalueSolver, Geometry, TemperatureField};
///
/// let set = EigenvalueSolver::new(Geometry::Wall).solve(0.5, 6).unwrap();
/// let field = TemperatureField::new(Geometry::Wall, set.values(), 0.05).unwrap();
///
/// let centre = field.gradient(0.0, 0.5);
/// let surface = field.gradient(0.05, 0.5);
/// assert!(surface < centre && centre < 1.0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct TemperatureField<'a> {
    geometry: Geometry,
    eigenvalues: &'a [f64],
    length: f64,
}

impl<'a> TemperatureField<'a> {
    /// Creates a field for `geometry` with characteristic `length`
    /// (wall half-thickness or radius).
    ///
    /// # Errors
    /// `InvalidInput` if `eigenvalues` is empty or `length` is not positive.
    pub fn new(geometry: Geometry, eigenvalues: &'a [f64], length: f64) -> Result<Self> {
        if eigenvalues.is_empty() {
            return Err(ConductionError::invalid_input("no eigenvalues provided"));
        }
        if !(length.is_finite() && length > 0.0) {
            return Err(ConductionError::invalid_input(format!(
                "characteristic length must be positive, got {}",
                length
            )));
        }
        Ok(Self {
            geometry,
            eigenvalues,
            length,
        })
    }

    /// Geometry of the body.
    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    /// Eigenvalues summed by the series.
    pub fn eigenvalues(&self) -> &'a [f64] {
        self.eigenvalues
    }

    /// Characteristic length.
    pub fn length(&self) -> f64 {
        self.length
    }

    /// θ at `position` (distance from the centre) and Fourier number `fourier`.
    pub fn gradient(&self, position: f64, fourier: f64) -> f64 {
        let xi = position / self.length;
        self.eigenvalues
            .iter()
            .map(|&lambda| {
                self.geometry.amplitude(lambda)
                    * (-lambda * lambda * fourier).exp()
                    * self.geometry.mode(lambda, xi)
            })
            .sum()
    }

    /// θ at each of `positions`.
    pub fn gradients(&self, positions: &[f64], fourier: f64) -> Vec<f64> {
        positions
            .iter()
            .map(|&position| self.gradient(position, fourier))
            .collect()
    }

    /// Temperature at `position` for a body started at `start` in fluid at
    /// `ambient`.
    pub fn temperature(&self, position: f64, fourier: f64, start: f64, ambient: f64) -> f64 {
        temperature_from_gradient(self.gradient(position, fourier), start, ambient)
    }

    /// Temperatures at each of `positions`.
    pub fn temperatures(&self, positions: &[f64], fourier: f64, start: f64, ambient: f64) -> Vec<f64> {
        positions
            .iter()
            .map(|&position| self.temperature(position, fourier, start, ambient))
            .collect()
    }

    /// Time-independent coefficients at `positions` for repeated evaluation.
    pub fn coefficients(&self, positions: &[f64]) -> SpatialCoefficients {
        SpatialCoefficients::compute(self.geometry, self.eigenvalues, positions, self.length)
    }
}

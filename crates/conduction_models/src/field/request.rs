//! Profile requests built from physical inputs.

use conduction_core::math::solvers::SolverConfig;
use tracing::debug;

use super::profile::validate_positions;
use super::{coordinate_grid, ProfileSeries, TemperatureField, TemperatureProfile};
use crate::eigen::{EigenvalueSet, EigenvalueSolver};
use crate::error::{ConductionError, Result};
use crate::geometry::{BodyShape, Geometry};
use crate::params::{biot_number, fourier_number, thermal_diffusivity};

/// Default number of series terms for a profile.
pub const DEFAULT_EIGENVALUE_COUNT: usize = 6;

/// Temperature profile query for one body in a fluid.
///
/// Each physical quantity can be given directly or derived:
/// - Biot number directly, or from convection and conductivity
/// - diffusivity directly, or from conductivity, density and specific heat
/// - coordinates explicitly, or as a uniform step from the centre
///
/// Missing combinations are reported when the request is solved, before any
/// eigenvalue is computed.
///
/// # Examples
/// ```
/// use conduction_models::{Geometry, ProfileRequest};
///
/// // 40 mm copper plate, heated from 20 °C in 500 °C air for 7 minutes
/// let solution = ProfileRequest::new(Geometry::Wall, 20.0, 500.0, 0.02)
///     .with_step(0.005)
///     .with_conductivity(110.0)
///     .with_convection(120.0)
///     .with_diffusivity(33.9e-6)
///     .with_eigenvalue_count(7)
///     .solve(420.0)
///     .unwrap();
///
/// let surface = solution.profile.surface_temperature().unwrap();
/// assert!((surface - 279.0).abs() < 3.0);
/// ```
#[derive(Debug, Clone)]
pub struct ProfileRequest {
    geometry: Geometry,
    start: f64,
    ambient: f64,
    length: f64,
    eigenvalue_count: usize,
    coordinates: Option<Vec<f64>>,
    step: Option<f64>,
    biot: Option<f64>,
    convection: Option<f64>,
    conductivity: Option<f64>,
    diffusivity: Option<f64>,
    density: Option<f64>,
    specific_heat: Option<f64>,
    eigenvalues: Option<EigenvalueSet>,
    solver_config: SolverConfig<f64>,
}

/// Detailed result of [`ProfileRequest::solve`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProfileSolution {
    /// Thermal diffusivity used (m²/s).
    pub diffusivity: f64,
    /// Biot number used.
    pub biot: f64,
    /// Elapsed time (s).
    pub time: f64,
    /// Fourier number of `time`.
    pub fourier: f64,
    /// Eigenvalues summed by the series.
    pub eigenvalues: EigenvalueSet,
    /// Sampled temperatures.
    pub profile: TemperatureProfile,
}

struct Resolved {
    diffusivity: f64,
    biot: f64,
    coordinates: Vec<f64>,
    eigenvalues: EigenvalueSet,
}

impl ProfileRequest {
    /// New request for a body of characteristic `length` (half thickness
    /// of a wall, radius otherwise) starting at `start` in fluid at `ambient`.
    pub fn new(geometry: Geometry, start: f64, ambient: f64, length: f64) -> Self {
        Self {
            geometry,
            start,
            ambient,
            length,
            eigenvalue_count: DEFAULT_EIGENVALUE_COUNT,
            coordinates: None,
            step: None,
            biot: None,
            convection: None,
            conductivity: None,
            diffusivity: None,
            density: None,
            specific_heat: None,
            eigenvalues: None,
            solver_config: SolverConfig::default(),
        }
    }

    /// Number of series terms.
    pub fn with_eigenvalue_count(mut self, count: usize) -> Self {
        self.eigenvalue_count = count;
        self
    }

    /// Explicit sample positions, measured from the centre.
    pub fn with_coordinates(mut self, coordinates: Vec<f64>) -> Self {
        self.coordinates = Some(coordinates);
        self
    }

    /// Uniform sample spacing; used only without explicit coordinates.
    pub fn with_step(mut self, dx: f64) -> Self {
        self.step = Some(dx);
        self
    }

    /// Biot number, overriding convection and conductivity.
    pub fn with_biot(mut self, biot: f64) -> Self {
        self.biot = Some(biot);
        self
    }

    /// Convective coefficient h (W/m²K).
    pub fn with_convection(mut self, convection: f64) -> Self {
        self.convection = Some(convection);
        self
    }

    /// Thermal conductivity k (W/mK).
    pub fn with_conductivity(mut self, conductivity: f64) -> Self {
        self.conductivity = Some(conductivity);
        self
    }

    /// Thermal diffusivity α (m²/s), overriding the material properties.
    pub fn with_diffusivity(mut self, diffusivity: f64) -> Self {
        self.diffusivity = Some(diffusivity);
        self
    }

    /// Density (kg/m³) and specific heat (J/kgK).
    pub fn with_material(mut self, density: f64, specific_heat: f64) -> Self {
        self.density = Some(density);
        self.specific_heat = Some(specific_heat);
        self
    }

    /// Precomputed eigenvalues; the eigenvalue count is then ignored.
    ///
    /// The set must belong to this geometry and to the Biot number given
    /// directly or through convection and conductivity; without either, the
    /// set's own Biot number is used.
    pub fn with_eigenvalues(mut self, eigenvalues: EigenvalueSet) -> Self {
        self.eigenvalues = Some(eigenvalues);
        self
    }

    /// Newton settings for the eigenvalue solve.
    pub fn with_solver_config(mut self, config: SolverConfig<f64>) -> Self {
        self.solver_config = config;
        self
    }

    /// Geometry of the body.
    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    /// Characteristic length.
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Profile at `time` seconds.
    ///
    /// # Errors
    /// - `InvalidInput` for missing or inconsistent inputs, or negative time
    /// - domain and convergence errors from the eigenvalue solve
    pub fn solve(&self, time: f64) -> Result<ProfileSolution> {
        let resolved = self.resolve()?;
        validate_time(time)?;

        let fourier = fourier_number(resolved.diffusivity, time, self.length);
        let field = TemperatureField::new(self.geometry, resolved.eigenvalues.values(), self.length)?;
        let temperatures = field.temperatures(&resolved.coordinates, fourier, self.start, self.ambient);

        Ok(ProfileSolution {
            diffusivity: resolved.diffusivity,
            biot: resolved.biot,
            time,
            fourier,
            eigenvalues: resolved.eigenvalues,
            profile: TemperatureProfile::new_unchecked(resolved.coordinates, temperatures),
        })
    }

    /// Profiles at every time in `times` (seconds), sharing one eigenvalue
    /// solve and one set of spatial coefficients.
    ///
    /// # Errors
    /// As [`ProfileRequest::solve`], plus `InvalidInput` if `times` is empty.
    pub fn solve_series(&self, times: &[f64]) -> Result<ProfileSeries> {
        if times.is_empty() {
            return Err(ConductionError::invalid_input("no times provided"));
        }
        let resolved = self.resolve()?;
        for &time in times {
            validate_time(time)?;
        }

        debug!(
            geometry = %self.geometry,
            times = times.len(),
            coordinates = resolved.coordinates.len(),
            "evaluating profile series"
        );

        let field = TemperatureField::new(self.geometry, resolved.eigenvalues.values(), self.length)?;
        let coefficients = field.coefficients(&resolved.coordinates);
        let fouriers: Vec<f64> = times
            .iter()
            .map(|&time| fourier_number(resolved.diffusivity, time, self.length))
            .collect();
        let temperatures = coefficients.temperature_series(&fouriers, self.start, self.ambient);

        Ok(ProfileSeries::new(resolved.coordinates, times.to_vec(), temperatures))
    }

    fn resolve(&self) -> Result<Resolved> {
        if !(self.length.is_finite() && self.length > 0.0) {
            return Err(ConductionError::invalid_input(format!(
                "length must be positive, got {}",
                self.length
            )));
        }

        let diffusivity = match (self.diffusivity, self.conductivity, self.density, self.specific_heat) {
            (Some(alpha), ..) => alpha,
            (None, Some(k), Some(rho), Some(cp)) => thermal_diffusivity(k, rho, cp),
            _ => {
                return Err(ConductionError::invalid_input(
                    "diffusivity requires either a value or conductivity, density and specific heat",
                ))
            }
        };
        if !(diffusivity.is_finite() && diffusivity > 0.0) {
            return Err(ConductionError::invalid_input(format!(
                "diffusivity must be positive, got {}",
                diffusivity
            )));
        }

        let biot = match (self.biot, self.convection, self.conductivity, &self.eigenvalues) {
            (Some(biot), ..) => biot,
            (None, Some(h), Some(k), _) => biot_number(h, self.length, k),
            (None, _, _, Some(set)) => set.biot(),
            _ => {
                return Err(ConductionError::invalid_input(
                    "Biot number requires either a value or convection and conductivity",
                ))
            }
        };

        let coordinates = match (&self.coordinates, self.step) {
            (Some(coordinates), _) => {
                validate_positions(coordinates, self.length)?;
                coordinates.clone()
            }
            (None, Some(dx)) => coordinate_grid(self.length, dx)?,
            (None, None) => {
                return Err(ConductionError::invalid_input(
                    "coordinates require either explicit positions or a step",
                ))
            }
        };

        let spec = self.geometry.spec();
        if !spec.accepts_biot(biot) {
            return Err(ConductionError::BiotOutOfRange {
                geometry: self.geometry,
                biot,
                max: spec.max_biot,
            });
        }

        let eigenvalues = match &self.eigenvalues {
            Some(set) if set.geometry() != self.geometry => {
                return Err(ConductionError::invalid_input(format!(
                    "eigenvalues were solved for a {}, not a {}",
                    set.geometry(),
                    self.geometry
                )))
            }
            Some(set) if (set.biot() - biot).abs() > BIOT_MATCH * biot.abs().max(1.0) => {
                return Err(ConductionError::invalid_input(format!(
                    "eigenvalues were solved for Bi = {}, not Bi = {}",
                    set.biot(),
                    biot
                )))
            }
            Some(set) => set.clone(),
            None => EigenvalueSolver::new(self.geometry)
                .with_config(self.solver_config)
                .solve(biot, self.eigenvalue_count)?,
        };

        Ok(Resolved {
            diffusivity,
            biot,
            coordinates,
            eigenvalues,
        })
    }
}

/// Relative agreement required between a supplied eigenvalue set and the
/// request's Biot number.
const BIOT_MATCH: f64 = 1e-9;

fn validate_time(time: f64) -> Result<()> {
    if time.is_finite() && time >= 0.0 {
        Ok(())
    } else {
        Err(ConductionError::invalid_input(format!(
            "time must be finite and non-negative, got {}",
            time
        )))
    }
}

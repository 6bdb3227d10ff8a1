//! Heat absorbed by a body, integrated over a sampled profile.
//!
//! The body is cut into shells between consecutive samples (slabs, annuli
//! or spherical shells). Each shell stores `ρ·cp·(T̄ − T_start)·ΔV`, with
//! `T̄` the mean of its two bounding samples. A profile that stops short of
//! the surface is closed with one partial shell at the temperature linearly
//! extrapolated to the surface.

use crate::error::{ConductionError, Result};
use crate::field::TemperatureProfile;
use crate::geometry::{BodyShape, Geometry};

/// Dimensions of a body for heat integration.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "geometry", rename_all = "lowercase"))]
pub enum BodyDimensions {
    /// Plane wall of full `thickness` and face `area` (m, m²).
    Wall {
        /// Full thickness.
        thickness: f64,
        /// Face area.
        area: f64,
    },
    /// Cylinder of `radius` and axial `length` (m).
    Cylinder {
        /// Radius.
        radius: f64,
        /// Axial length.
        length: f64,
    },
    /// Sphere of `radius` (m).
    Sphere {
        /// Radius.
        radius: f64,
    },
}

impl BodyDimensions {
    /// Geometry of the body.
    pub fn geometry(&self) -> Geometry {
        match self {
            Self::Wall { .. } => Geometry::Wall,
            Self::Cylinder { .. } => Geometry::Cylinder,
            Self::Sphere { .. } => Geometry::Sphere,
        }
    }

    /// Distance from the centre to the surface: half the wall thickness,
    /// the radius otherwise.
    pub fn boundary(&self) -> f64 {
        match *self {
            Self::Wall { thickness, .. } => thickness / 2.0,
            Self::Cylinder { radius, .. } | Self::Sphere { radius } => radius,
        }
    }

    /// Multiplier turning a volume element into a volume: face area of a
    /// wall, axial length of a cylinder, 1 for a sphere.
    pub fn transverse_extent(&self) -> f64 {
        match *self {
            Self::Wall { area, .. } => area,
            Self::Cylinder { length, .. } => length,
            Self::Sphere { .. } => 1.0,
        }
    }

    /// Number of mirrored halves covered by one centre-to-surface profile.
    pub fn symmetry_factor(&self) -> f64 {
        match self {
            Self::Wall { .. } => 2.0,
            Self::Cylinder { .. } | Self::Sphere { .. } => 1.0,
        }
    }

    /// Volume between distances `inner` and `outer` from the centre, on one
    /// side of a wall.
    pub fn shell_volume(&self, inner: f64, outer: f64) -> f64 {
        self.geometry().volume_element(inner, outer) * self.transverse_extent()
    }

    /// Total volume of the body.
    pub fn volume(&self) -> f64 {
        self.shell_volume(0.0, self.boundary()) * self.symmetry_factor()
    }

    fn validate(&self) -> Result<()> {
        let positive = |v: f64| v.is_finite() && v > 0.0;
        let valid = match *self {
            Self::Wall { thickness, area } => positive(thickness) && positive(area),
            Self::Cylinder { radius, length } => positive(radius) && positive(length),
            Self::Sphere { radius } => positive(radius),
        };
        if valid {
            Ok(())
        } else {
            Err(ConductionError::invalid_input(format!(
                "body dimensions must be positive: {:?}",
                self
            )))
        }
    }
}

/// Integrates the heat stored in a body of known material.
///
/// # Examples
/// ```
/// use conduction_models::{BodyDimensions, HeatContentIntegrator, TemperatureProfile};
///
/// let dims = BodyDimensions::Sphere { radius: 1.0 };
/// let integrator = HeatContentIntegrator::new(dims, 1.0, 1.0).unwrap();
/// let uniform = TemperatureProfile::new(vec![0.0, 0.5, 1.0], vec![11.0; 3]).unwrap();
///
/// let heat = integrator.integrate(&uniform, 10.0).unwrap();
/// assert!((heat - 4.0 / 3.0 * std::f64::consts::PI).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeatContentIntegrator {
    dimensions: BodyDimensions,
    density: f64,
    specific_heat: f64,
}

impl HeatContentIntegrator {
    /// Integrator for a body of `density` (kg/m³) and `specific_heat` (J/kgK).
    ///
    /// # Errors
    /// `InvalidInput` for non-positive dimensions or material properties.
    pub fn new(dimensions: BodyDimensions, density: f64, specific_heat: f64) -> Result<Self> {
        dimensions.validate()?;
        if !(density.is_finite() && density > 0.0 && specific_heat.is_finite() && specific_heat > 0.0) {
            return Err(ConductionError::invalid_input(format!(
                "density and specific heat must be positive, got {} and {}",
                density, specific_heat
            )));
        }
        Ok(Self {
            dimensions,
            density,
            specific_heat,
        })
    }

    /// Body dimensions.
    pub fn dimensions(&self) -> &BodyDimensions {
        &self.dimensions
    }

    /// Heat (J) gained since the body was uniformly at `start`; negative
    /// when the body has cooled.
    ///
    /// # Errors
    /// `InvalidInput` for fewer than two samples or a sample beyond the
    /// surface.
    pub fn integrate(&self, profile: &TemperatureProfile, start: f64) -> Result<f64> {
        if profile.len() < 2 {
            return Err(ConductionError::invalid_input(format!(
                "heat integration needs at least two samples, got {}",
                profile.len()
            )));
        }

        let boundary = self.dimensions.boundary();
        let x = profile.coordinates();
        let t = profile.temperatures();
        let n = x.len();
        if x[n - 1] > boundary {
            return Err(ConductionError::invalid_input(format!(
                "sample at {} lies beyond the surface at {}",
                x[n - 1],
                boundary
            )));
        }

        let capacity = self.density * self.specific_heat;
        let mut heat: f64 = (1..n)
            .map(|i| {
                let mean = 0.5 * (t[i - 1] + t[i]);
                capacity * (mean - start) * self.dimensions.shell_volume(x[i - 1], x[i])
            })
            .sum();

        if x[n - 1] < boundary {
            let slope = (t[n - 1] - t[n - 2]) / (x[n - 1] - x[n - 2]);
            let surface = t[n - 1] + slope * (boundary - x[n - 1]);
            heat += capacity * (surface - start) * self.dimensions.shell_volume(x[n - 1], boundary);
        }

        Ok(heat * self.dimensions.symmetry_factor())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    fn integrate_heat(
        profile: &TemperatureProfile,
        start: f64,
        dims: BodyDimensions,
        density: f64,
        specific_heat: f64,
    ) -> Result<f64> {
        HeatContentIntegrator::new(dims, density, specific_heat)?.integrate(profile, start)
    }

    fn uniform(coordinates: Vec<f64>, value: f64) -> TemperatureProfile {
        let n = coordinates.len();
        TemperatureProfile::new(coordinates, vec![value; n]).unwrap()
    }

    // ========================================
    // Dimensions
    // ========================================

    #[test]
    fn test_boundaries() {
        assert_eq!(BodyDimensions::Wall { thickness: 0.04, area: 1.0 }.boundary(), 0.02);
        assert_eq!(BodyDimensions::Cylinder { radius: 0.1, length: 2.0 }.boundary(), 0.1);
        assert_eq!(BodyDimensions::Sphere { radius: 0.3 }.boundary(), 0.3);
    }

    #[test]
    fn test_volumes() {
        assert_relative_eq!(
            BodyDimensions::Wall { thickness: 0.04, area: 2.0 }.volume(),
            0.08,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            BodyDimensions::Cylinder { radius: 0.5, length: 2.0 }.volume(),
            PI * 0.25 * 2.0,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            BodyDimensions::Sphere { radius: 2.0 }.volume(),
            32.0 / 3.0 * PI,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_rejects_bad_dimensions_and_material() {
        let sphere = BodyDimensions::Sphere { radius: 1.0 };
        assert!(HeatContentIntegrator::new(BodyDimensions::Sphere { radius: 0.0 }, 1.0, 1.0).is_err());
        assert!(HeatContentIntegrator::new(sphere, -1.0, 1.0).is_err());
        assert!(HeatContentIntegrator::new(sphere, 1.0, f64::NAN).is_err());
    }

    // ========================================
    // Integration
    // ========================================

    #[test]
    fn test_uniform_profile_gives_total_sensible_heat() {
        let cases = [
            (BodyDimensions::Wall { thickness: 0.04, area: 2.0 }, vec![0.0, 0.01, 0.02]),
            (BodyDimensions::Cylinder { radius: 0.1, length: 3.0 }, vec![0.0, 0.05, 0.1]),
            (BodyDimensions::Sphere { radius: 0.1 }, vec![0.0, 0.025, 0.05, 0.1]),
        ];
        for (dims, coordinates) in cases {
            let heat = integrate_heat(&uniform(coordinates, 30.0), 20.0, dims, 7900.0, 477.0).unwrap();
            assert_relative_eq!(heat, 7900.0 * 477.0 * 10.0 * dims.volume(), max_relative = 1e-12);
        }
    }

    #[test]
    fn test_partial_shell_uses_extrapolated_surface() {
        // Surface at 0.01 extrapolates to 30 from (0, 10) and (0.005, 20)
        let profile = TemperatureProfile::new(vec![0.0, 0.005], vec![10.0, 20.0]).unwrap();
        let dims = BodyDimensions::Wall { thickness: 0.02, area: 1.0 };
        let heat = integrate_heat(&profile, 0.0, dims, 1.0, 1.0).unwrap();
        assert_relative_eq!(heat, 2.0 * (15.0 * 0.005 + 30.0 * 0.005), max_relative = 1e-12);
    }

    #[test]
    fn test_short_uniform_profile_covers_whole_sphere() {
        let dims = BodyDimensions::Sphere { radius: 1.0 };
        let heat = integrate_heat(&uniform(vec![0.0, 0.5], 12.0), 10.0, dims, 1.0, 1.0).unwrap();
        assert_relative_eq!(heat, 2.0 * dims.volume(), max_relative = 1e-12);
    }

    #[test]
    fn test_cooling_gives_negative_heat() {
        let dims = BodyDimensions::Cylinder { radius: 1.0, length: 1.0 };
        let heat = integrate_heat(&uniform(vec![0.0, 1.0], 5.0), 10.0, dims, 1.0, 1.0).unwrap();
        assert!(heat < 0.0);
    }

    #[test]
    fn test_two_samples_is_enough() {
        let dims = BodyDimensions::Sphere { radius: 1.0 };
        assert!(integrate_heat(&uniform(vec![0.0, 1.0], 1.0), 0.0, dims, 1.0, 1.0).is_ok());
    }

    #[test]
    fn test_fewer_than_two_samples_rejected() {
        let dims = BodyDimensions::Sphere { radius: 1.0 };
        for coordinates in [vec![], vec![0.0]] {
            let err = integrate_heat(&uniform(coordinates, 1.0), 0.0, dims, 1.0, 1.0).unwrap_err();
            assert!(err.is_input_error());
        }
    }

    #[test]
    fn test_sample_beyond_surface_rejected() {
        let dims = BodyDimensions::Wall { thickness: 0.02, area: 1.0 };
        let err = integrate_heat(&uniform(vec![0.0, 0.02], 1.0), 0.0, dims, 1.0, 1.0).unwrap_err();
        assert!(err.to_string().contains("beyond the surface"));
    }
}

//! Flat entry points over the building blocks.
//!
//! Each function validates its arguments, so callers that only need one
//! answer do not have to assemble solvers and fields themselves.

use tracing::debug;

use crate::eigen::{EigenvalueSet, EigenvalueSolver};
use crate::error::{ConductionError, Result};
use crate::field::{validate_positions, ProfileSeries, TemperatureField, TemperatureProfile};
use crate::geometry::{BodyShape, Geometry};
use crate::heat::{BodyDimensions, HeatContentIntegrator};

/// First `count` eigenvalues of `geometry` at `biot`, with default Newton
/// settings.
///
/// # Errors
/// - `BiotOutOfRange` / `TooManyEigenvalues` outside the geometry limits
/// - `InvalidInput` if `count` is zero
/// - `NonConvergence` if a root cannot be found
///
/// # Examples
/// ```
/// use conduction_models::analysis::solve_eigenvalues;
/// use conduction_models::Geometry;
///
/// let set = solve_eigenvalues(Geometry::Sphere, 30.0, 2).unwrap();
/// assert!((set.values()[0] - 3.03724).abs() < 1e-4);
/// ```
pub fn solve_eigenvalues(geometry: Geometry, biot: f64, count: usize) -> Result<EigenvalueSet> {
    EigenvalueSolver::new(geometry).solve(biot, count)
}

/// Temperature at `position` (distance from the centre) of a body with
/// characteristic `length`, at Fourier number `fourier`.
///
/// `biot` must be the Biot number that `eigenvalues` solve; it is checked
/// against the geometry limits.
///
/// # Errors
/// - `BiotOutOfRange` outside the geometry limits
/// - `InvalidInput` for empty eigenvalues, non-positive length, a position
///   outside `[0, length]` or a negative Fourier number
#[allow(clippy::too_many_arguments)]
pub fn evaluate_temperature(
    geometry: Geometry,
    eigenvalues: &[f64],
    biot: f64,
    position: f64,
    length: f64,
    fourier: f64,
    start: f64,
    ambient: f64,
) -> Result<f64> {
    let field = checked_field(geometry, eigenvalues, biot, length)?;
    validate_positions(std::slice::from_ref(&position), length)?;
    validate_fourier(fourier)?;
    Ok(field.temperature(position, fourier, start, ambient))
}

/// Temperatures at each of `positions`, one Fourier number.
///
/// # Errors
/// As [`evaluate_temperature`]; positions must also be strictly increasing.
#[allow(clippy::too_many_arguments)]
pub fn evaluate_temperatures(
    geometry: Geometry,
    eigenvalues: &[f64],
    biot: f64,
    positions: &[f64],
    length: f64,
    fourier: f64,
    start: f64,
    ambient: f64,
) -> Result<Vec<f64>> {
    let field = checked_field(geometry, eigenvalues, biot, length)?;
    validate_positions(positions, length)?;
    validate_fourier(fourier)?;
    Ok(field.temperatures(positions, fourier, start, ambient))
}

/// Temperatures at shared `coordinates` for every Fourier number in
/// `fourier_times`.
///
/// Position weights are computed once and reused for every time; the
/// series rows are keyed by Fourier number.
///
/// # Errors
/// As [`evaluate_temperatures`], plus `InvalidInput` if `fourier_times` is
/// empty.
#[allow(clippy::too_many_arguments)]
pub fn evaluate_temperature_series(
    geometry: Geometry,
    eigenvalues: &[f64],
    biot: f64,
    coordinates: &[f64],
    length: f64,
    fourier_times: &[f64],
    start: f64,
    ambient: f64,
) -> Result<ProfileSeries> {
    if fourier_times.is_empty() {
        return Err(ConductionError::invalid_input("no times provided"));
    }
    let field = checked_field(geometry, eigenvalues, biot, length)?;
    validate_positions(coordinates, length)?;
    for &fourier in fourier_times {
        validate_fourier(fourier)?;
    }

    debug!(
        geometry = %geometry,
        times = fourier_times.len(),
        coordinates = coordinates.len(),
        "evaluating temperature series"
    );

    let coefficients = field.coefficients(coordinates);
    let temperatures = coefficients.temperature_series(fourier_times, start, ambient);
    Ok(ProfileSeries::new(
        coordinates.to_vec(),
        fourier_times.to_vec(),
        temperatures,
    ))
}

/// Heat (J) gained by a body since it was uniformly at `start`.
///
/// # Errors
/// `InvalidInput` for fewer than two samples, samples beyond the surface,
/// or non-positive dimensions or material properties.
pub fn integrate_heat(
    profile: &TemperatureProfile,
    start: f64,
    dimensions: BodyDimensions,
    density: f64,
    specific_heat: f64,
) -> Result<f64> {
    HeatContentIntegrator::new(dimensions, density, specific_heat)?.integrate(profile, start)
}

fn checked_field(
    geometry: Geometry,
    eigenvalues: &[f64],
    biot: f64,
    length: f64,
) -> Result<TemperatureField<'_>> {
    let spec = geometry.spec();
    if !spec.accepts_biot(biot) {
        return Err(ConductionError::BiotOutOfRange {
            geometry,
            biot,
            max: spec.max_biot,
        });
    }
    TemperatureField::new(geometry, eigenvalues, length)
}

fn validate_fourier(fourier: f64) -> Result<()> {
    if fourier.is_finite() && fourier >= 0.0 {
        Ok(())
    } else {
        Err(ConductionError::invalid_input(format!(
            "Fourier number must be finite and non-negative, got {}",
            fourier
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_scalar_and_vector_forms_agree() {
        let set = solve_eigenvalues(Geometry::Cylinder, 5.0, 5).unwrap();
        let positions = [0.0, 0.02, 0.04];
        let temps =
            evaluate_temperatures(Geometry::Cylinder, set.values(), 5.0, &positions, 0.04, 0.2, 20.0, 300.0)
                .unwrap();
        for (position, temp) in positions.iter().zip(&temps) {
            let single =
                evaluate_temperature(Geometry::Cylinder, set.values(), 5.0, *position, 0.04, 0.2, 20.0, 300.0)
                    .unwrap();
            assert_eq!(single, *temp);
        }
    }

    #[test]
    fn test_biot_is_checked() {
        let err = evaluate_temperature(Geometry::Cylinder, &[1.0], 101.0, 0.0, 1.0, 0.1, 0.0, 1.0)
            .unwrap_err();
        assert!(err.is_domain_error());
    }

    #[test]
    fn test_positions_beyond_surface_rejected() {
        let set = solve_eigenvalues(Geometry::Wall, 1.0, 6).unwrap();
        let err = evaluate_temperature(Geometry::Wall, set.values(), 1.0, 3.0, 1.0, 0.1, 20.0, 500.0)
            .unwrap_err();
        assert!(err.is_input_error());

        let err = evaluate_temperatures(
            Geometry::Wall,
            set.values(),
            1.0,
            &[0.0, 0.5, 1.0001],
            1.0,
            0.1,
            20.0,
            500.0,
        )
        .unwrap_err();
        assert!(err.is_input_error());

        let err = evaluate_temperature_series(
            Geometry::Wall,
            set.values(),
            1.0,
            &[0.0, 2.0],
            1.0,
            &[0.1, 0.2],
            20.0,
            500.0,
        )
        .unwrap_err();
        assert!(err.is_input_error());

        // the surface itself is a valid position
        assert!(
            evaluate_temperature(Geometry::Wall, set.values(), 1.0, 1.0, 1.0, 0.1, 20.0, 500.0).is_ok()
        );
    }

    #[test]
    fn test_empty_eigenvalues_rejected() {
        let err = evaluate_temperature(Geometry::Wall, &[], 1.0, 0.0, 1.0, 0.1, 0.0, 1.0).unwrap_err();
        assert!(err.is_input_error());
    }

    #[test]
    fn test_negative_inputs_rejected() {
        let set = solve_eigenvalues(Geometry::Wall, 1.0, 3).unwrap();
        assert!(evaluate_temperature(Geometry::Wall, set.values(), 1.0, -0.1, 1.0, 0.1, 0.0, 1.0).is_err());
        assert!(evaluate_temperature(Geometry::Wall, set.values(), 1.0, 0.1, 1.0, -0.1, 0.0, 1.0).is_err());
    }

    #[test]
    fn test_series_rows_match_direct_evaluation() {
        let set = solve_eigenvalues(Geometry::Sphere, 2.0, 6).unwrap();
        let coordinates = [0.0, 0.25, 0.5, 0.75, 1.0];
        let taus = [0.01, 0.1, 1.0];
        let series =
            evaluate_temperature_series(Geometry::Sphere, set.values(), 2.0, &coordinates, 1.0, &taus, 25.0, 100.0)
                .unwrap();
        for (row, &tau) in series.temperatures().iter().zip(&taus) {
            let direct =
                evaluate_temperatures(Geometry::Sphere, set.values(), 2.0, &coordinates, 1.0, tau, 25.0, 100.0)
                    .unwrap();
            for (a, b) in row.iter().zip(&direct) {
                assert_relative_eq!(*a, *b, epsilon = 1e-10);
            }
        }
    }

    #[test]
    fn test_series_requires_times() {
        let err = evaluate_temperature_series(Geometry::Wall, &[1.0], 1.0, &[0.0], 1.0, &[], 0.0, 1.0)
            .unwrap_err();
        assert!(err.is_input_error());
    }
}

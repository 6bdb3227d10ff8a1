//! End-to-end profile and heat scenarios.

use approx::assert_relative_eq;
use conduction_models::analysis::{
    evaluate_temperature_series, evaluate_temperatures, integrate_heat, solve_eigenvalues,
};
use conduction_models::params::{biot_number, fourier_number};
use conduction_models::{BodyDimensions, Geometry, ProfileRequest, TemperatureProfile};
use proptest::prelude::*;

const START: f64 = 20.0;
const AMBIENT: f64 = 500.0;
const LENGTH: f64 = 0.02;
const CONDUCTIVITY: f64 = 110.0;
const CONVECTION: f64 = 120.0;
const DIFFUSIVITY: f64 = 33.9e-6;

fn heated_body(geometry: Geometry) -> ProfileRequest {
    ProfileRequest::new(geometry, START, AMBIENT, LENGTH)
        .with_step(0.005)
        .with_conductivity(CONDUCTIVITY)
        .with_convection(CONVECTION)
        .with_diffusivity(DIFFUSIVITY)
        .with_eigenvalue_count(7)
}

// ========================================
// Profiles
// ========================================

#[test]
fn test_wall_surface_after_seven_minutes() {
    let solution = heated_body(Geometry::Wall).solve(420.0).unwrap();
    assert_eq!(solution.profile.coordinates().len(), 5);
    assert_relative_eq!(
        solution.profile.surface_temperature().unwrap(),
        279.0,
        max_relative = 1e-2
    );
}

#[test]
fn test_curved_bodies_heat_faster() {
    let wall = heated_body(Geometry::Wall).solve(420.0).unwrap();
    let cylinder = heated_body(Geometry::Cylinder).solve(420.0).unwrap();
    let sphere = heated_body(Geometry::Sphere).solve(420.0).unwrap();

    let surface = |s: &conduction_models::ProfileSolution| s.profile.surface_temperature().unwrap();
    assert_relative_eq!(surface(&cylinder), 398.15, max_relative = 1e-3);
    assert_relative_eq!(surface(&sphere), 453.02, max_relative = 1e-3);
    assert!(surface(&wall) < surface(&cylinder));
    assert!(surface(&cylinder) < surface(&sphere));
}

#[test]
fn test_mirrored_profile_is_symmetric() {
    let solution = heated_body(Geometry::Wall).solve(60.0).unwrap();
    let full = solution.profile.mirrored();
    let temps = full.temperatures();
    assert_eq!(temps.len(), 2 * solution.profile.len() - 1);
    for i in 0..temps.len() {
        assert_eq!(temps[i], temps[temps.len() - 1 - i]);
    }
}

#[test]
fn test_long_times_reach_ambient() {
    for geometry in Geometry::ALL {
        let set = solve_eigenvalues(geometry, 2.0, 6).unwrap();
        let temps = evaluate_temperatures(
            geometry,
            set.values(),
            2.0,
            &[0.0, 0.5, 1.0],
            1.0,
            1e6,
            START,
            AMBIENT,
        )
        .unwrap();
        for t in temps {
            assert_relative_eq!(t, AMBIENT, epsilon = 1e-9);
        }
    }
}

#[test]
fn test_series_matches_request_solves() {
    let request = heated_body(Geometry::Sphere);
    let times = [10.0, 60.0, 420.0];
    let series = request.solve_series(&times).unwrap();

    let biot = biot_number(CONVECTION, LENGTH, CONDUCTIVITY);
    let set = solve_eigenvalues(Geometry::Sphere, biot, 7).unwrap();
    let taus: Vec<f64> = times
        .iter()
        .map(|&t| fourier_number(DIFFUSIVITY, t, LENGTH))
        .collect();
    let flat = evaluate_temperature_series(
        Geometry::Sphere,
        set.values(),
        biot,
        series.coordinates(),
        LENGTH,
        &taus,
        START,
        AMBIENT,
    )
    .unwrap();

    assert_eq!(series.temperatures(), flat.temperatures());
    assert_eq!(flat.times(), taus.as_slice());
}

// ========================================
// Heat content
// ========================================

#[test]
fn test_heat_is_bounded_by_full_equilibrium() {
    let density = 8933.0;
    let specific_heat = 385.0;
    let dims = BodyDimensions::Sphere { radius: LENGTH };
    let ceiling = density * specific_heat * (AMBIENT - START) * dims.volume();

    let mut previous = 0.0;
    for time in [30.0, 120.0, 420.0, 1800.0] {
        let solution = heated_body(Geometry::Sphere).solve(time).unwrap();
        let heat = integrate_heat(&solution.profile, START, dims, density, specific_heat).unwrap();
        assert!(heat > previous && heat < ceiling, "t={} heat={}", time, heat);
        previous = heat;
    }
}

#[test]
fn test_wall_heat_counts_both_halves() {
    let profile = TemperatureProfile::new(vec![0.0, 0.01], vec![30.0, 30.0]).unwrap();
    let dims = BodyDimensions::Wall {
        thickness: 0.02,
        area: 1.0,
    };
    let heat = integrate_heat(&profile, 20.0, dims, 1.0, 1.0).unwrap();
    assert_relative_eq!(heat, 10.0 * 0.02, max_relative = 1e-12);
}

#[test]
fn test_heat_needs_two_samples() {
    let dims = BodyDimensions::Cylinder {
        radius: 1.0,
        length: 1.0,
    };
    let single = TemperatureProfile::new(vec![0.0], vec![1.0]).unwrap();
    assert!(integrate_heat(&single, 0.0, dims, 1.0, 1.0).unwrap_err().is_input_error());

    let pair = TemperatureProfile::new(vec![0.0, 1.0], vec![1.0, 1.0]).unwrap();
    assert!(integrate_heat(&pair, 0.0, dims, 1.0, 1.0).is_ok());
}

// ========================================
// Property-based tests
// ========================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn prop_temperatures_stay_between_start_and_ambient(
        biot in 0.01_f64..10.0,
        tau in 0.05_f64..5.0,
    ) {
        for geometry in Geometry::ALL {
            let set = solve_eigenvalues(geometry, biot, 6).unwrap();
            let temps = evaluate_temperatures(
                geometry, set.values(), biot, &[0.0, 0.25, 0.5, 0.75, 1.0], 1.0, tau, START, AMBIENT,
            ).unwrap();
            for t in temps {
                prop_assert!(t > START - 1e-6 && t < AMBIENT + 1e-6, "{} {}", geometry, t);
            }
        }
    }
}

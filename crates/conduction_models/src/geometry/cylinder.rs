//! Infinite solid cylinder of radius R.
//!
//! The characteristic equation involves `J₁(λ)/J₀(λ)`; its derivative is
//! taken numerically.

use conduction_core::math::bessel::bessel_j;
use conduction_core::math::differentiation::derivative;

use super::{BodyShape, GeometrySpec};

/// Zeros of J₀, each the pole closing one branch of the ratio J₁/J₀.
const J0_ZEROS: [f64; 7] = [
    2.404_825_557_695_773,
    5.520_078_110_286_311,
    8.653_727_912_911_013,
    11.791_534_439_014_281,
    14.930_917_708_487_787,
    18.071_063_967_910_924,
    21.211_636_629_879_259,
];

/// Zero at the origin followed by the positive zeros of J₁.
const J1_ZEROS: [f64; 7] = [
    0.0,
    3.831_705_970_207_512,
    7.015_586_669_815_619,
    10.173_468_135_062_722,
    13.323_691_936_314_223,
    16.470_630_050_877_634,
    19.615_858_510_468_243,
];

/// Distance kept from a zero of J₀, wide enough for the series to resolve
/// its sign.
const POLE_OFFSET: f64 = 1e-6;

/// Cylinder.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cylinder;

#[inline]
fn bessel_ratio(x: f64) -> f64 {
    bessel_j(1, x) / bessel_j(0, x)
}

impl BodyShape for Cylinder {
    fn spec(&self) -> GeometrySpec {
        GeometrySpec::CYLINDER
    }

    /// `λ·J₁(λ)/J₀(λ) − Bi`
    #[inline]
    fn characteristic(&self, lambda: f64, biot: f64) -> f64 {
        lambda * bessel_ratio(lambda) - biot
    }

    /// `J₁/J₀ + λ·d(J₁/J₀)/dλ`, central difference with half-step 1e-8.
    fn characteristic_derivative(&self, lambda: f64) -> f64 {
        bessel_ratio(lambda) + lambda * derivative(bessel_ratio, lambda)
    }

    /// `[j₁,ₖ, j₀,ₖ₊₁)`: the ratio runs from 0 up to its pole between a zero
    /// of J₁ and the next zero of J₀.
    fn branch(&self, index: usize) -> Option<(f64, f64)> {
        let lower = *J1_ZEROS.get(index)?;
        let pole = *J0_ZEROS.get(index)?;
        Some((lower, pole - POLE_OFFSET))
    }

    /// `2/λ · J₁(λ) / (J₀(λ)² + J₁(λ)²)`
    fn amplitude(&self, lambda: f64) -> f64 {
        let j0 = bessel_j(0, lambda);
        let j1 = bessel_j(1, lambda);
        2.0 / lambda * j1 / (j0 * j0 + j1 * j1)
    }

    /// `J₀(λξ)`
    #[inline]
    fn mode(&self, lambda: f64, xi: f64) -> f64 {
        bessel_j(0, lambda * xi)
    }

    #[inline]
    fn volume_element(&self, inner: f64, outer: f64) -> f64 {
        std::f64::consts::PI * (outer * outer - inner * inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_characteristic_vanishes_at_known_root() {
        // Bi = 1 → λ₁ = 1.2557837
        assert!(Cylinder.characteristic(1.255_783_6, 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_numerical_derivative_is_consistent() {
        let lambda = 1.7;
        let h = 1e-5;
        let numeric = (Cylinder.characteristic(lambda + h, 0.0)
            - Cylinder.characteristic(lambda - h, 0.0))
            / (2.0 * h);
        assert_relative_eq!(
            Cylinder.characteristic_derivative(lambda),
            numeric,
            max_relative = 1e-5
        );
    }

    #[test]
    fn test_small_biot_amplitude_tends_to_one() {
        assert_relative_eq!(Cylinder.amplitude(1e-3), 1.0, max_relative = 1e-5);
    }

    #[test]
    fn test_branches_interlace_and_hold_one_root() {
        for index in 0..7 {
            let (lower, upper) = Cylinder.branch(index).unwrap();
            assert!(lower < upper);
            assert!(bessel_j(1, lower).abs() < 1e-8);
            assert!(Cylinder.characteristic(lower, 50.0) < 0.0);
            assert!(Cylinder.characteristic(upper, 100.0) > 0.0);
        }
        assert!(Cylinder.branch(7).is_none());
    }

    #[test]
    fn test_mode_and_volume() {
        assert_eq!(Cylinder.mode(2.0, 0.0), 1.0);
        assert_relative_eq!(Cylinder.volume_element(0.0, 1.0), std::f64::consts::PI);
    }
}

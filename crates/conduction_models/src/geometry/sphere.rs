//! Solid sphere of radius R.

use std::f64::consts::PI;

use super::{BodyShape, GeometrySpec};

/// Distance kept from the poles of cot λ.
const POLE_OFFSET: f64 = 1e-9;

/// Sphere.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sphere;

impl BodyShape for Sphere {
    fn spec(&self) -> GeometrySpec {
        GeometrySpec::SPHERE
    }

    /// `1 − λ/tan λ − Bi`
    #[inline]
    fn characteristic(&self, lambda: f64, biot: f64) -> f64 {
        1.0 - lambda / lambda.tan() - biot
    }

    /// `−1/tan λ + λ/sin² λ`
    #[inline]
    fn characteristic_derivative(&self, lambda: f64) -> f64 {
        let sin = lambda.sin();
        -1.0 / lambda.tan() + lambda / (sin * sin)
    }

    /// `(kπ, (k + 1)π)`, between consecutive poles of cot λ.
    fn branch(&self, index: usize) -> Option<(f64, f64)> {
        let lower = index as f64 * PI;
        Some((lower + POLE_OFFSET, lower + PI - POLE_OFFSET))
    }

    /// `4·(sin λ − λ cos λ) / (2λ − sin 2λ)`
    #[inline]
    fn amplitude(&self, lambda: f64) -> f64 {
        4.0 * (lambda.sin() - lambda * lambda.cos()) / (2.0 * lambda - (2.0 * lambda).sin())
    }

    /// `sin(λξ)/(λξ)`, equal to 1 at the centre.
    #[inline]
    fn mode(&self, lambda: f64, xi: f64) -> f64 {
        if xi == 0.0 {
            return 1.0;
        }
        let arg = lambda * xi;
        arg.sin() / arg
    }

    #[inline]
    fn volume_element(&self, inner: f64, outer: f64) -> f64 {
        4.0 / 3.0 * PI * (outer.powi(3) - inner.powi(3))
    }
}

//! Infinite plane wall of half-thickness L, symmetric about its mid-plane.

use std::f64::consts::{FRAC_PI_2, PI};

use super::{BodyShape, GeometrySpec};

/// Distance kept from the poles of tan λ.
const POLE_OFFSET: f64 = 1e-9;

/// Plane wall.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Wall;

impl BodyShape for Wall {
    fn spec(&self) -> GeometrySpec {
        GeometrySpec::WALL
    }

    /// `λ·tan λ − Bi`
    #[inline]
    fn characteristic(&self, lambda: f64, biot: f64) -> f64 {
        lambda * lambda.tan() - biot
    }

    /// `tan λ + λ/cos² λ`
    #[inline]
    fn characteristic_derivative(&self, lambda: f64) -> f64 {
        let cos = lambda.cos();
        lambda.tan() + lambda / (cos * cos)
    }

    /// `[kπ, kπ + π/2)`, where tan λ ≥ 0.
    fn branch(&self, index: usize) -> Option<(f64, f64)> {
        let lower = index as f64 * PI;
        Some((lower, lower + FRAC_PI_2 - POLE_OFFSET))
    }

    /// `4·sin λ / (2λ + sin 2λ)`
    #[inline]
    fn amplitude(&self, lambda: f64) -> f64 {
        4.0 * lambda.sin() / (2.0 * lambda + (2.0 * lambda).sin())
    }

    /// `cos(λξ)`
    #[inline]
    fn mode(&self, lambda: f64, xi: f64) -> f64 {
        (lambda * xi).cos()
    }

    #[inline]
    fn volume_element(&self, inner: f64, outer: f64) -> f64 {
        outer - inner
    }
}

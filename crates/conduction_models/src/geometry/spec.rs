//! Per-geometry solver configuration records.
//!
//! Each geometry carries the limits and root-walking parameters its
//! characteristic equation needs. Successive roots of all three equations are
//! spaced by roughly π, so the search for root `k + 1` starts one `step` past
//! root `k`.

use std::f64::consts::{FRAC_PI_2, PI};

/// Limits and root-search parameters for one geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeometrySpec {
    /// Largest accepted Biot number.
    pub max_biot: f64,
    /// Starting guess for the first eigenvalue.
    pub seed: f64,
    /// Offset from one eigenvalue to the starting guess for the next.
    pub step: f64,
    /// Largest number of eigenvalues the root walk can produce reliably.
    pub max_eigenvalues: Option<usize>,
}

impl GeometrySpec {
    /// Infinite plane wall: `λ·tan λ = Bi`.
    pub const WALL: GeometrySpec = GeometrySpec {
        max_biot: 100_000.0,
        seed: FRAC_PI_2 - 1e-8,
        step: PI,
        max_eigenvalues: None,
    };

    /// Infinite cylinder: `λ·J₁(λ)/J₀(λ) = Bi`.
    pub const CYLINDER: GeometrySpec = GeometrySpec {
        max_biot: 100.0,
        seed: 2.4,
        step: PI,
        max_eigenvalues: Some(7),
    };

    /// Sphere: `1 − λ/tan λ = Bi`.
    pub const SPHERE: GeometrySpec = GeometrySpec {
        max_biot: 100_000.0,
        seed: PI - 1e-8,
        step: PI,
        max_eigenvalues: None,
    };

    /// `true` when `biot` is finite, non-negative and within `max_biot`.
    #[inline]
    pub fn accepts_biot(&self, biot: f64) -> bool {
        biot.is_finite() && biot >= 0.0 && biot <= self.max_biot
    }

    /// `true` when `count` eigenvalues stay within the cap.
    #[inline]
    pub fn accepts_count(&self, count: usize) -> bool {
        self.max_eigenvalues.map_or(true, |max| count <= max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_biot_bounds() {
        assert!(GeometrySpec::WALL.accepts_biot(100_000.0));
        assert!(!GeometrySpec::WALL.accepts_biot(100_000.1));
        assert!(GeometrySpec::CYLINDER.accepts_biot(100.0));
        assert!(!GeometrySpec::CYLINDER.accepts_biot(100.01));
        assert!(!GeometrySpec::SPHERE.accepts_biot(-0.1));
        assert!(!GeometrySpec::SPHERE.accepts_biot(f64::NAN));
        assert!(GeometrySpec::SPHERE.accepts_biot(0.0));
    }

    #[test]
    fn test_eigenvalue_caps() {
        assert!(GeometrySpec::CYLINDER.accepts_count(7));
        assert!(!GeometrySpec::CYLINDER.accepts_count(8));
        assert!(GeometrySpec::WALL.accepts_count(500));
        assert!(GeometrySpec::SPHERE.accepts_count(500));
    }

    #[test]
    fn test_seeds_sit_just_below_the_first_pole() {
        assert!(GeometrySpec::WALL.seed < FRAC_PI_2);
        assert!(GeometrySpec::SPHERE.seed < PI);
        assert_eq!(GeometrySpec::CYLINDER.seed, 2.4);
    }
}

//! Body geometries and their characteristic equations.
//!
//! This module provides:
//! - [`BodyShape`]: the per-geometry pieces of the series solution
//! - [`Wall`], [`Cylinder`], [`Sphere`]: the three implementors
//! - [`Geometry`]: a `Copy` tag that dispatches statically to them
//! - [`GeometrySpec`]: Biot bound, root seed, root step and eigenvalue cap
//!
//! ## Example
//!
//! ```
//! use conduction_models::geometry::{BodyShape, Geometry};
//!
//! let geometry: Geometry = "c".parse().unwrap();
//! assert_eq!(geometry, Geometry::Cylinder);
//! assert_eq!(geometry.spec().max_eigenvalues, Some(7));
//! assert_eq!(geometry.to_string(), "cylinder");
//! ```

mod cylinder;
mod spec;
mod sphere;
mod traits;
mod wall;

use std::fmt;
use std::str::FromStr;

pub use cylinder::Cylinder;
pub use spec::GeometrySpec;
pub use sphere::Sphere;
pub use traits::BodyShape;
pub use wall::Wall;

use crate::error::ConductionError;

/// Closed set of supported geometries.
///
/// Dispatches to the concrete shape through `match`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Geometry {
    /// Infinite plane wall (half-thickness L)
    Wall,
    /// Infinite cylinder (radius R)
    Cylinder,
    /// Sphere (radius R)
    Sphere,
}

impl Geometry {
    /// All geometries in declaration order.
    pub const ALL: [Geometry; 3] = [Geometry::Wall, Geometry::Cylinder, Geometry::Sphere];

    /// Lowercase name.
    pub fn name(&self) -> &'static str {
        match self {
            Geometry::Wall => "wall",
            Geometry::Cylinder => "cylinder",
            Geometry::Sphere => "sphere",
        }
    }
}

impl BodyShape for Geometry {
    #[inline]
    fn spec(&self) -> GeometrySpec {
        match self {
            Geometry::Wall => Wall.spec(),
            Geometry::Cylinder => Cylinder.spec(),
            Geometry::Sphere => Sphere.spec(),
        }
    }

    #[inline]
    fn characteristic(&self, lambda: f64, biot: f64) -> f64 {
        match self {
            Geometry::Wall => Wall.characteristic(lambda, biot),
            Geometry::Cylinder => Cylinder.characteristic(lambda, biot),
            Geometry::Sphere => Sphere.characteristic(lambda, biot),
        }
    }

    #[inline]
    fn characteristic_derivative(&self, lambda: f64) -> f64 {
        match self {
            Geometry::Wall => Wall.characteristic_derivative(lambda),
            Geometry::Cylinder => Cylinder.characteristic_derivative(lambda),
            Geometry::Sphere => Sphere.characteristic_derivative(lambda),
        }
    }

    #[inline]
    fn branch(&self, index: usize) -> Option<(f64, f64)> {
        match self {
            Geometry::Wall => Wall.branch(index),
            Geometry::Cylinder => Cylinder.branch(index),
            Geometry::Sphere => Sphere.branch(index),
        }
    }

    #[inline]
    fn amplitude(&self, lambda: f64) -> f64 {
        match self {
            Geometry::Wall => Wall.amplitude(lambda),
            Geometry::Cylinder => Cylinder.amplitude(lambda),
            Geometry::Sphere => Sphere.amplitude(lambda),
        }
    }

    #[inline]
    fn mode(&self, lambda: f64, xi: f64) -> f64 {
        match self {
            Geometry::Wall => Wall.mode(lambda, xi),
            Geometry::Cylinder => Cylinder.mode(lambda, xi),
            Geometry::Sphere => Sphere.mode(lambda, xi),
        }
    }

    #[inline]
    fn volume_element(&self, inner: f64, outer: f64) -> f64 {
        match self {
            Geometry::Wall => Wall.volume_element(inner, outer),
            Geometry::Cylinder => Cylinder.volume_element(inner, outer),
            Geometry::Sphere => Sphere.volume_element(inner, outer),
        }
    }
}

impl fmt::Display for Geometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Geometry {
    type Err = ConductionError;

    /// Accepts the full names and the one-letter codes `p` (plane wall),
    /// `c` (cylinder) and `e` (sphere), case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "wall" | "plane" | "p" => Ok(Geometry::Wall),
            "cylinder" | "c" => Ok(Geometry::Cylinder),
            "sphere" | "e" => Ok(Geometry::Sphere),
            other => Err(ConductionError::invalid_input(format!(
                "Unknown geometry '{}'. Supported: wall (p), cylinder (c), sphere (e)",
                other
            ))),
        }
    }
}

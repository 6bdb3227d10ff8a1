//! Geometry behaviour shared by the three bodies.

use super::GeometrySpec;

/// One-dimensional body with a convective boundary.
///
/// Implementors supply the pieces of the series solution that differ per
/// shape. With ξ = x/L the dimensionless temperature is
///
/// θ(ξ, τ) = Σᵢ amplitude(λᵢ) · e^(−λᵢ²τ) · mode(λᵢ, ξ)
///
/// where the λᵢ are the roots of `characteristic(λ, Bi) = 0`.
pub trait BodyShape {
    /// Limits and root-search parameters.
    fn spec(&self) -> GeometrySpec;

    /// Characteristic function whose roots are the eigenvalues.
    fn characteristic(&self, lambda: f64, biot: f64) -> f64;

    /// Derivative of [`BodyShape::characteristic`] with respect to λ.
    fn characteristic_derivative(&self, lambda: f64) -> f64;

    /// Interval holding the root with zero-based `index` and no other.
    ///
    /// The characteristic function is continuous on it, non-positive at the
    /// lower end for any Biot number ≥ 0 and positive at the upper end for
    /// any accepted Biot number. `None` past the last tabulated branch.
    fn branch(&self, index: usize) -> Option<(f64, f64)>;

    /// Time-independent series amplitude for eigenvalue `lambda`.
    fn amplitude(&self, lambda: f64) -> f64;

    /// Spatial mode at `xi = position / length`.
    fn mode(&self, lambda: f64, xi: f64) -> f64;

    /// Volume between `inner` and `outer` per unit transverse extent
    /// (per unit area for a wall, per unit axial length for a cylinder,
    /// absolute for a sphere).
    fn volume_element(&self, inner: f64, outer: f64) -> f64;

    /// `τ`-independent coefficient at `xi`, the product the fast path caches.
    #[inline]
    fn coefficient(&self, lambda: f64, xi: f64) -> f64 {
        self.amplitude(lambda) * self.mode(lambda, xi)
    }
}

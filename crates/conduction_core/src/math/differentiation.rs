//! Numerical differentiation.
//!
//! Used where no closed-form derivative is at hand,
//! e.g. the ratio `J₁(x)/J₀(x)` in the cylinder characteristic equation.

use num_traits::Float;

/// Default half-step for [`central_difference`].
pub const DEFAULT_STEP: f64 = 1e-8;

/// Central-difference derivative `(f(x + h) − f(x − h)) / 2h`.
///
/// # Arguments
/// * `f` - Function to differentiate
/// * `x` - Evaluation point
/// * `h` - Half the distance between the two evaluation points
///
/// # Examples
/// ```
/// use conduction_core::math::differentiation::central_difference;
///
/// let slope = central_difference(|x: f64| x * x, 3.0, 1e-6);
/// assert!((slope - 6.0).abs() < 1e-6);
/// ```
#[inline]
pub fn central_difference<T, F>(f: F, x: T, h: T) -> T
where
    T: Float,
    F: Fn(T) -> T,
{
    let two = T::one() + T::one();
    (f(x + h) - f(x - h)) / (two * h)
}

/// [`central_difference`] with [`DEFAULT_STEP`].
#[inline]
pub fn derivative<F>(f: F, x: f64) -> f64
where
    F: Fn(f64) -> f64,
{
    central_difference(f, x, DEFAULT_STEP)
}

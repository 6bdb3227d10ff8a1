//! Brent's method root-finding solver.

use super::SolverConfig;
use crate::types::SolverError;
use num_traits::Float;

/// Brent's method root finder.
///
/// Combines bisection, secant and inverse quadratic interpolation. It needs
/// no derivative and cannot leave the bracket, so it converges for any
/// function that is continuous on `[a, b]` and changes sign there.
///
/// # Example
///
/// ```
/// use conduction_core::math::solvers::{BrentSolver, SolverConfig};
///
/// let solver = BrentSolver::new(SolverConfig::new(1e-12, 100));
///
/// // x·tan(x) = 1 on its first branch
/// let f = |x: f64| x * x.tan() - 1.0;
/// let root = solver.find_root(f, 0.0, 1.5).unwrap();
/// assert!((root - 0.860_333_589).abs() < 1e-8);
/// ```
#[derive(Debug, Clone)]
pub struct BrentSolver<T: Float> {
    config: SolverConfig<T>,
}

impl<T: Float> BrentSolver<T> {
    /// Create a new Brent solver with the given configuration.
    pub fn new(config: SolverConfig<T>) -> Self {
        Self { config }
    }

    /// Create a solver with default configuration.
    pub fn with_defaults() -> Self {
        Self {
            config: SolverConfig::default(),
        }
    }

    /// Find a root of `f` in the bracket `[a, b]`.
    ///
    /// An endpoint where `|f| <= tolerance` is returned as is. Otherwise
    /// `f(a)` and `f(b)` must have opposite signs.
    ///
    /// # Returns
    ///
    /// * `Ok(x)` - Root where `|f(x)| <= tolerance` or the bracket has
    ///   shrunk below the tolerance
    /// * `Err(SolverError::NoBracket)` - `f(a)` and `f(b)` have the same sign
    /// * `Err(SolverError::MaxIterationsExceeded)` - Failed to converge
    pub fn find_root<F>(&self, f: F, a: T, b: T) -> Result<T, SolverError>
    where
        F: Fn(T) -> T,
    {
        let tol = self.config.tolerance;
        let mut a = a;
        let mut b = b;
        let mut fa = f(a);
        let mut fb = f(b);

        if fa.abs() <= tol {
            return Ok(a);
        }
        if fb.abs() <= tol {
            return Ok(b);
        }
        if fa * fb > T::zero() || fa.is_nan() || fb.is_nan() {
            return Err(SolverError::NoBracket {
                a: a.to_f64().unwrap_or(f64::NAN),
                b: b.to_f64().unwrap_or(f64::NAN),
            });
        }

        // b holds the best estimate
        if fa.abs() < fb.abs() {
            std::mem::swap(&mut a, &mut b);
            std::mem::swap(&mut fa, &mut fb);
        }

        let mut c = a;
        let mut fc = fa;
        let mut d = b - a;
        let mut e = d;

        let two = T::from(2.0).unwrap();
        let three = T::from(3.0).unwrap();

        for _ in 0..self.config.max_iterations {
            if fb.abs() <= tol {
                return Ok(b);
            }

            let m = (c - b) / two;
            if m.abs() <= tol {
                return Ok(b);
            }

            let interpolated = if fb != fa {
                let s = fb / fa;
                let (p, q) = if fa != fc && fb != fc {
                    let r = fb / fc;
                    let t = fa / fc;
                    (
                        s * (t * (r - t) * (c - b) - (T::one() - r) * (b - a)),
                        (t - T::one()) * (r - T::one()) * (s - T::one()),
                    )
                } else {
                    (two * m * s, T::one() - s)
                };
                if p.abs() < (three * m * q).abs() / two && p.abs() < (e * q).abs() / two {
                    Some(p / q)
                } else {
                    None
                }
            } else {
                None
            };

            match interpolated {
                Some(step) => {
                    e = d;
                    d = step;
                }
                None => {
                    d = m;
                    e = m;
                }
            }

            a = b;
            fa = fb;
            b = if d.abs() > tol {
                b + d
            } else if m > T::zero() {
                b + tol
            } else {
                b - tol
            };
            fb = f(b);

            // keep the root between b and c
            if (fb > T::zero()) == (fc > T::zero()) {
                c = a;
                fc = fa;
                d = b - a;
                e = d;
            }

            if fc.abs() < fb.abs() {
                a = b;
                b = c;
                c = a;
                fa = fb;
                fb = fc;
                fc = fa;
            }
        }

        Err(SolverError::MaxIterationsExceeded {
            iterations: self.config.max_iterations,
        })
    }

    /// Returns a reference to the solver configuration.
    pub fn config(&self) -> &SolverConfig<T> {
        &self.config
    }
}

impl<T: Float> Default for BrentSolver<T> {
    fn default() -> Self {
        Self::with_defaults()
    }
}

//! Bessel functions of the first kind by power series.
//!
//! ## Mathematical Definition
//!
//! Jₙ(x) = Σᵢ (−1)ⁱ / (i!·(i+n)!) · (x/2)^(2i+n)
//!
//! Successive terms are generated by the ratio
//!
//! termᵢ₊₁ / termᵢ = −(x/2)² / ((i+1)·(i+1+n))
//!
//! so no factorial is ever formed and the tail underflows to zero instead of
//! overflowing.
//!
//! ## Accuracy
//!
//! The alternating series loses digits to cancellation as `x` grows. With the
//! default 120 terms the result is usable up to `x ≈ 35`; above
//! [`LARGE_ARGUMENT`] the sum is extended by [`EXTRA_TERMS`] terms, which keeps
//! the series converged but cannot recover the cancelled digits. Orders above
//! ~10 are not meaningful in double precision.

use num_traits::Float;

/// Default number of series terms.
pub const DEFAULT_TERMS: usize = 120;

/// Argument above which the series is extended.
pub const LARGE_ARGUMENT: f64 = 35.0;

/// Terms added beyond [`LARGE_ARGUMENT`].
pub const EXTRA_TERMS: usize = 48;

/// Evaluates Jₙ(x) with [`DEFAULT_TERMS`] terms.
///
/// # Examples
/// ```
/// use conduction_core::math::bessel::bessel_j;
///
/// assert!((bessel_j(0, 0.0_f64) - 1.0).abs() < 1e-15);
/// assert!(bessel_j(1, 0.0_f64).abs() < 1e-15);
///
/// // First zero of J₀
/// assert!(bessel_j(0, 2.404_825_557_695_773_f64).abs() < 1e-9);
/// ```
#[inline]
pub fn bessel_j<T: Float>(order: u32, x: T) -> T {
    bessel_j_with_terms(order, x, DEFAULT_TERMS)
}

/// Evaluates Jₙ(x) summing `terms` series terms, or `terms + EXTRA_TERMS`
/// when `x > LARGE_ARGUMENT`.
///
/// # Arguments
/// * `order` - Non-negative integer order `n`
/// * `x` - Evaluation point
/// * `terms` - Number of series terms for moderate arguments
///
/// # Examples
/// ```
/// use conduction_core::math::bessel::bessel_j_with_terms;
///
/// // A single term is the leading power (x/2)ⁿ/n!
/// let leading = bessel_j_with_terms(2, 1.0_f64, 1);
/// assert!((leading - 0.125).abs() < 1e-15);
/// ```
pub fn bessel_j_with_terms<T: Float>(order: u32, x: T, terms: usize) -> T {
    let large = T::from(LARGE_ARGUMENT).unwrap();
    let count = if x > large { terms + EXTRA_TERMS } else { terms };

    let half = x / T::from(2.0).unwrap();
    let n = T::from(order).unwrap();

    // (x/2)ⁿ / n!
    let mut term = T::one();
    for k in 1..=order {
        term = term * half / T::from(k).unwrap();
    }

    let ratio = -(half * half);
    let mut sum = T::zero();
    for i in 0..count {
        sum = sum + term;
        let next = T::from(i + 1).unwrap();
        term = term * ratio / (next * (next + n));
    }
    sum
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_reference_values_order_zero() {
        assert_abs_diff_eq!(bessel_j(0, 1.0_f64), 0.765_197_686_557_966_6, epsilon = 1e-14);
        assert_abs_diff_eq!(bessel_j(0, 10.0_f64), -0.245_935_764_451_348_3, epsilon = 1e-11);
    }

    #[test]
    fn test_reference_values_order_one() {
        assert_abs_diff_eq!(bessel_j(1, 1.0_f64), 0.440_050_585_744_933_5, epsilon = 1e-14);
        assert_abs_diff_eq!(bessel_j(1, 10.0_f64), 0.043_472_746_168_861_44, epsilon = 1e-11);
    }

    #[test]
    fn test_reference_values_higher_orders() {
        assert_abs_diff_eq!(bessel_j(2, 5.0_f64), 0.046_565_116_277_752_21, epsilon = 1e-12);
        assert_abs_diff_eq!(bessel_j(3, 2.0_f64), 0.128_943_249_474_402_0, epsilon = 1e-13);
    }

    #[test]
    fn test_known_zeros() {
        assert_abs_diff_eq!(bessel_j(0, 2.404_825_557_695_773_f64), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(bessel_j(1, 3.831_705_970_207_512_f64), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(bessel_j(0, 5.520_078_110_286_311_f64), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_origin() {
        assert_eq!(bessel_j(0, 0.0_f64), 1.0);
        for order in 1..8 {
            assert_eq!(bessel_j(order, 0.0_f64), 0.0);
        }
    }

    #[test]
    fn test_parity() {
        // Jₙ(−x) = (−1)ⁿ Jₙ(x)
        let x = 3.7_f64;
        assert_abs_diff_eq!(bessel_j(0, -x), bessel_j(0, x), epsilon = 1e-15);
        assert_abs_diff_eq!(bessel_j(1, -x), -bessel_j(1, x), epsilon = 1e-15);
    }

    #[test]
    fn test_large_argument_extends_series() {
        // One requested term is just the leading power below the threshold...
        assert_eq!(bessel_j_with_terms(0, 34.0_f64, 1), 1.0);
        // ...but is extended above it.
        assert_ne!(bessel_j_with_terms(0, 36.0_f64, 1), 1.0);
    }

    #[test]
    fn test_f32_support() {
        let value = bessel_j(0, 1.0_f32);
        assert!((value - 0.765_197_7).abs() < 1e-5);
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(200))]

            #[test]
            fn test_three_term_recurrence(order in 1u32..6, x in 0.5_f64..20.0) {
                // J_{n−1}(x) + J_{n+1}(x) = (2n/x)·Jₙ(x)
                let lhs = bessel_j(order - 1, x) + bessel_j(order + 1, x);
                let rhs = 2.0 * order as f64 / x * bessel_j(order, x);
                prop_assert!((lhs - rhs).abs() < 1e-8, "n={} x={} lhs={} rhs={}", order, x, lhs, rhs);
            }

            #[test]
            fn test_bounded_by_one(order in 0u32..6, x in 0.0_f64..25.0) {
                prop_assert!(bessel_j(order, x).abs() <= 1.0 + 1e-9);
            }
        }
    }
}

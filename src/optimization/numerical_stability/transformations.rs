//! Numerical stability utilities.
//!
//! Provides safe implementations of log-space combinations that are prone to
//! overflow/underflow in naïve form. Likelihood terms in this crate routinely
//! sit in the hundreds or thousands on the log scale, so they are never
//! exponentiated directly.
//!
//! # Provided items
//! - [`log_add_exp(a, b)`]: stable `ln(exp(a) + exp(b))`.
//! - [`ln_add_expm1(c, z)`]: stable `ln(c + exp(z) - 1)`, the Gompertz
//!   survival term of the likelihood.

/// Numerically stable `ln(exp(a) + exp(b))`.
///
/// Evaluated as `max(a, b) + ln1p(exp(-|a - b|))`, which never overflows and
/// keeps full precision when one term dominates.
///
/// Edge cases:
/// - Either input NaN → NaN.
/// - `max(a, b) = +inf` → `+inf`; both `-inf` → `-inf`.
/// - One input `-inf` → the other input, exactly.
///
/// # Parameters
/// - `a`, `b`: log-scale terms.
///
/// # Returns
/// - `ln(exp(a) + exp(b))` as `f64`.
pub fn log_add_exp(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        return f64::NAN;
    }
    let m = a.max(b);
    if m.is_infinite() {
        return m;
    }
    m + (-(a - b).abs()).exp().ln_1p()
}

/// Numerically stable `ln(c + exp(z) - 1)` for `c > 0`, `z >= 0`.
///
/// For `z <= 1` this is `ln(c + expm1(z))`, which keeps precision for small
/// `z`. Above that it is evaluated as `z + ln1p((c - 1) · exp(-z))`, so
/// `exp(z)` is never formed and the result stays finite for any finite `z`.
///
/// Edge cases:
/// - NaN in either input → NaN.
/// - `z = +inf` → `+inf`.
pub fn ln_add_expm1(c: f64, z: f64) -> f64 {
    if z <= 1.0 {
        (c + z.exp_m1()).ln()
    } else {
        z + ((c - 1.0) * (-z).exp()).ln_1p()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    // Purpose
    // -------
    // Agreement with the naïve formula where the latter is safe.
    //
    // Given
    // -----
    // - `(a, b) = (-2.5, 0.75)`.
    //
    // Expect
    // ------
    // - Equal to `ln(exp(a) + exp(b))` to 1e-14.
    fn log_add_exp_matches_naive_formula() {
        let (a, b) = (-2.5_f64, 0.75_f64);

        assert_relative_eq!(log_add_exp(a, b), (a.exp() + b.exp()).ln(), max_relative = 1e-14);
    }

    #[test]
    // Purpose
    // -------
    // Large log-terms do not overflow.
    //
    // Given
    // -----
    // - `(a, b) = (5210.68, 5894.91)`, far beyond `exp` range.
    //
    // Expect
    // ------
    // - Result is finite and equals the larger term to machine precision.
    fn log_add_exp_handles_large_terms() {
        let out = log_add_exp(5210.68, 5894.91);

        assert!(out.is_finite());
        assert_relative_eq!(out, 5894.91, max_relative = 1e-15);
    }

    #[test]
    // Purpose
    // -------
    // Infinite and NaN inputs follow the documented edge cases.
    //
    // Given
    // -----
    // - Combinations of `-inf`, `+inf`, NaN and a finite value.
    //
    // Expect
    // ------
    // - `-inf` is the identity; `+inf` absorbs; NaN propagates.
    fn log_add_exp_edge_cases() {
        assert_eq!(log_add_exp(-3.0, f64::NEG_INFINITY), -3.0);
        assert_eq!(log_add_exp(f64::NEG_INFINITY, f64::NEG_INFINITY), f64::NEG_INFINITY);
        assert_eq!(log_add_exp(f64::INFINITY, 1.0), f64::INFINITY);
        assert!(log_add_exp(f64::NAN, 1.0).is_nan());
        assert!(log_add_exp(1.0, f64::NAN).is_nan());
    }

    #[test]
    // Purpose
    // -------
    // `ln(c + e^z - 1)` stays finite where `e^z` overflows.
    //
    // Given
    // -----
    // - `(c, z) = (1, 1000)` and `(c, z) = (3, 800)`.
    //
    // Expect
    // ------
    // - `1000` exactly; `800 + ln1p(2 e^-800) == 800`.
    fn ln_add_expm1_handles_overflowing_exponent() {
        assert_eq!(ln_add_expm1(1.0, 1000.0), 1000.0);
        assert_eq!(ln_add_expm1(3.0, 800.0), 800.0);
        assert_eq!(ln_add_expm1(2.0, f64::INFINITY), f64::INFINITY);
    }

    #[test]
    // Purpose
    // -------
    // Both branches agree with the naive formula around the switch point,
    // including small `c` where `c - 1` is close to `-1`.
    //
    // Given
    // -----
    // - `c` in `{1e-6, 0.5, 1, 4, 1e6}`, `z` in `{0, 1e-9, 0.7, 1.0, 1.3, 20}`.
    //
    // Expect
    // ------
    // - Relative agreement to 1e-12 with `ln(c + expm1(z))`.
    fn ln_add_expm1_matches_naive_formula() {
        for &c in &[1e-6, 0.5, 1.0, 4.0, 1e6] {
            for &z in &[0.0, 1e-9, 0.7, 1.0, 1.3, 20.0] {
                let naive = (c + f64::exp_m1(z)).ln();
                assert_relative_eq!(ln_add_expm1(c, z), naive, max_relative = 1e-12, epsilon = 1e-15);
            }
        }
    }

    proptest! {
        #[test]
        // Purpose
        // -------
        // `log_add_exp` is symmetric and bounded below by the larger term.
        fn prop_log_add_exp_symmetric_and_bounded(a in -700.0f64..700.0, b in -700.0f64..700.0) {
            let ab = log_add_exp(a, b);
            prop_assert_eq!(ab, log_add_exp(b, a));
            prop_assert!(ab >= a.max(b));
            prop_assert!(ab <= a.max(b) + std::f64::consts::LN_2 + 1e-12);
        }
    }
}

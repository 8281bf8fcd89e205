//! Integral kernel — the per-customer integrand of the GGompertz/NBD
//! likelihood.
//!
//! Purpose
//! -------
//! Evaluate
//!
//! ```text
//! f(y) = (y + alpha)^-(r + x) · (beta + exp(b·y) - 1)^-(s + 1) · exp(b·y)
//! ```
//!
//! whose integral over `[t_x, t_cal]` is the "died after the last purchase
//! but before the end of the window" contribution `L2` of each customer.
//!
//! Key behaviors
//! -------------
//! - [`IntegralKernel`] is a small `Copy` value carrying the model scalars and
//!   one customer's `(alpha_i, beta_i, x_i)`. Quadrature code captures it by
//!   value in a closure, so no shared or global state is involved.
//! - [`IntegralKernel::ln_eval`] works in log space: `ln(beta + exp(b·y) - 1)`
//!   goes through [`ln_add_expm1`], so large `b·y` never forms `exp(b·y)`.
//!   [`IntegralKernel::eval`] is its exponential.
//!
//! Invariants & assumptions
//! ------------------------
//! - `r, b, s, alpha, beta > 0`, `x >= 0`, `y >= 0`; for such inputs
//!   `ln_eval` is finite and `eval` is non-negative (it may underflow to `0`).
use crate::{
    ggomnbd::core::params::GGomNBDParams, optimization::numerical_stability::ln_add_expm1,
};

/// `IntegralKernel` — integrand for one customer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntegralKernel {
    pub r: f64,
    pub b: f64,
    pub s: f64,
    pub alpha: f64,
    pub beta: f64,
    pub x: f64,
}

impl IntegralKernel {
    /// Build the kernel for a customer with scales `(alpha, beta)` and `x`
    /// repeat transactions.
    pub fn new(params: &GGomNBDParams, alpha: f64, beta: f64, x: f64) -> Self {
        IntegralKernel { r: params.r, b: params.b, s: params.s, alpha, beta, x }
    }

    /// `ln f(y)`.
    #[inline]
    pub fn ln_eval(&self, y: f64) -> f64 {
        let by = self.b * y;
        -(self.r + self.x) * (y + self.alpha).ln() - (self.s + 1.0) * ln_add_expm1(self.beta, by)
            + by
    }

    /// Evaluate the integrand at `y`.
    #[inline]
    pub fn eval(&self, y: f64) -> f64 {
        self.ln_eval(y).exp()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn params(r: f64, alpha_0: f64, b: f64, s: f64, beta_0: f64) -> GGomNBDParams {
        GGomNBDParams { r, alpha_0, b, s, beta_0 }
    }

    #[test]
    // Purpose
    // -------
    // Pointwise check against the closed form.
    //
    // Given
    // -----
    // - `r = 1, b = 0.01, s = 1, alpha = 1, beta = 1, x = 0`, at `y = 5`.
    //
    // Expect
    // ------
    // - `f(5) = 6^-1 · exp(0.05)^-2 · exp(0.05) = exp(-0.05) / 6`.
    fn eval_matches_closed_form() {
        let k = IntegralKernel::new(&params(1.0, 1.0, 0.01, 1.0, 1.0), 1.0, 1.0, 0.0);

        assert_relative_eq!(k.eval(5.0), (-0.05_f64).exp() / 6.0, max_relative = 1e-14);
    }

    #[test]
    // Purpose
    // -------
    // At `y = 0` the Gompertz factors vanish and only the purchase term
    // remains.
    //
    // Given
    // -----
    // - `alpha = 2, beta = 3, r = 0.5, x = 2, s = 1.5`.
    //
    // Expect
    // ------
    // - `f(0) = 2^-2.5 · 3^-2.5`.
    fn eval_at_origin_reduces_to_scale_terms() {
        let k = IntegralKernel::new(&params(0.5, 9.0, 0.2, 1.5, 9.0), 2.0, 3.0, 2.0);

        assert_relative_eq!(
            k.eval(0.0),
            2.0_f64.powf(-2.5) * 3.0_f64.powf(-2.5),
            max_relative = 1e-14
        );
    }

    #[test]
    // Purpose
    // -------
    // The kernel takes the customer scales, not the base scales.
    //
    // Given
    // -----
    // - Base scales 100, customer scales 1.
    //
    // Expect
    // ------
    // - Same value as a kernel built from base scales 1.
    fn new_uses_customer_scales() {
        let k1 = IntegralKernel::new(&params(1.0, 100.0, 0.1, 1.0, 100.0), 1.0, 1.0, 3.0);
        let k2 = IntegralKernel::new(&params(1.0, 1.0, 0.1, 1.0, 1.0), 1.0, 1.0, 3.0);

        assert_eq!(k1, k2);
        assert!(k1.eval(2.0) > 0.0);
    }

    #[test]
    // Purpose
    // -------
    // Large `b·y` no longer produces `0 · inf = NaN`.
    //
    // Given
    // -----
    // - `r = 1, b = 10, s = 1, alpha = 1, beta = 1, x = 2`, at `y = 100`
    //   (`exp(b·y) = exp(1000)` overflows).
    //
    // Expect
    // ------
    // - `ln f(100) = -3 ln 101 - 1000` and `f(100) == 0.0` (underflow, not
    //   NaN).
    fn ln_eval_is_finite_for_overflowing_exponent() {
        let k = IntegralKernel::new(&params(1.0, 1.0, 10.0, 1.0, 1.0), 1.0, 1.0, 2.0);

        assert_relative_eq!(k.ln_eval(100.0), -3.0 * 101.0_f64.ln() - 1000.0, max_relative = 1e-14);
        assert_eq!(k.eval(100.0), 0.0);
    }
}

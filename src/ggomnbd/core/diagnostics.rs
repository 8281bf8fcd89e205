//! Diagnostics — non-fatal numerical warnings raised during evaluation.
//!
//! Purpose
//! -------
//! Surface numerical trouble that does not invalidate the inputs: integrals
//! that may under/overflow across the batch, and per-customer quadrature that
//! stopped before meeting its error target. These never abort an evaluation
//! and never change its results.
//!
//! Key behaviors
//! -------------
//! - [`check_integral_divergence`] bounds the integrand from below and above
//!   using batch extrema of `t_x`, `x`, `alpha_i` and `beta_i`, and flags a
//!   lower bound of exactly `0` or an upper bound above [`DIVERGENCE_UPPER`].
//! - [`emit_warnings`] forwards each warning to the `log` facade at `warn`
//!   level; the same values are also returned to the caller.
//!
//! Conventions
//! -----------
//! - The heuristic is batch-level: it reads the extrema once per evaluation,
//!   not per customer.
use crate::ggomnbd::core::{data::CustomerData, params::{GGomNBDParams, ScaleParams}};

/// Upper-bound threshold above which the integral may overflow.
pub const DIVERGENCE_UPPER: f64 = 1e200;

/// `DiagnosticWarning` — non-fatal numerical warning.
#[derive(Debug, Clone, PartialEq)]
pub enum DiagnosticWarning {
    /// The lower bound of the integrand underflowed to zero, so `ln` of some
    /// integral may be `-inf`.
    IntegralMayDivergeToNegInf { lower_bound: f64 },

    /// The upper bound of the integrand exceeds [`DIVERGENCE_UPPER`], so some
    /// integral may overflow to `+inf`.
    IntegralMayDivergeToPosInf { upper_bound: f64 },

    /// Adaptive quadrature stopped before meeting its error target for one
    /// customer; the best estimate was used.
    QuadratureNotConverged { customer: usize, value: f64, abs_error: f64, n_intervals: usize },
}

impl std::fmt::Display for DiagnosticWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DiagnosticWarning::IntegralMayDivergeToNegInf { lower_bound } => {
                write!(
                    f,
                    "Integral may diverge to -inf: integrand lower bound is {lower_bound}"
                )
            }
            DiagnosticWarning::IntegralMayDivergeToPosInf { upper_bound } => {
                write!(
                    f,
                    "Integral may diverge to +inf: integrand upper bound is {upper_bound}"
                )
            }
            DiagnosticWarning::QuadratureNotConverged {
                customer,
                value,
                abs_error,
                n_intervals,
            } => {
                write!(
                    f,
                    "Quadrature for customer {customer} did not converge: value = {value}, \
                     abs_error = {abs_error}, subintervals = {n_intervals}"
                )
            }
        }
    }
}

fn min_max(values: impl Iterator<Item = f64>) -> (f64, f64) {
    values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)))
}

/// Batch-level check for possibly divergent integrals.
///
/// With `t_lo/t_hi` the extrema of `t_x`, `x_hi = max x`, and the extrema of
/// the scales:
///
/// ```text
/// lower = (t_hi + alpha_hi)^-(r + x_hi) · (beta_hi + exp(b·t_hi) - 1)^-(s+1) · exp(b·t_lo)
/// upper = (t_lo + alpha_lo)^-(r + x_hi) · (beta_lo + exp(b·t_lo) - 1)^-(s+1) · exp(b·t_hi)
/// ```
///
/// Returns
/// -------
/// Zero, one or two warnings. Results of the evaluation are not affected.
pub fn check_integral_divergence(
    params: &GGomNBDParams, scales: &ScaleParams, data: &CustomerData,
) -> Vec<DiagnosticWarning> {
    let (t_lo, t_hi) = data.t_x_range();
    let x_hi = data.max_x();
    let (alpha_lo, alpha_hi) = min_max(scales.alpha_i.iter().copied());
    let (beta_lo, beta_hi) = min_max(scales.beta_i.iter().copied());
    let (r, b, s) = (params.r, params.b, params.s);

    let lower = (t_hi + alpha_hi).powf(-(r + x_hi))
        * (beta_hi + (b * t_hi).exp_m1()).powf(-(s + 1.0))
        * (b * t_lo).exp();
    let upper = (t_lo + alpha_lo).powf(-(r + x_hi))
        * (beta_lo + (b * t_lo).exp_m1()).powf(-(s + 1.0))
        * (b * t_hi).exp();

    let mut warnings = Vec::new();
    if lower == 0.0 {
        warnings.push(DiagnosticWarning::IntegralMayDivergeToNegInf { lower_bound: lower });
    }
    if upper > DIVERGENCE_UPPER {
        warnings.push(DiagnosticWarning::IntegralMayDivergeToPosInf { upper_bound: upper });
    }
    warnings
}

/// Log every warning at `warn` level.
pub fn emit_warnings(warnings: &[DiagnosticWarning]) {
    for warning in warnings {
        log::warn!("{warning}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn params(r: f64, b: f64, s: f64) -> GGomNBDParams {
        GGomNBDParams { r, alpha_0: 1.0, b, s, beta_0: 1.0 }
    }

    #[test]
    // Purpose
    // -------
    // Moderate inputs raise no warning.
    //
    // Given
    // -----
    // - The golden single-customer scenario.
    //
    // Expect
    // ------
    // - Empty warning list.
    fn moderate_inputs_raise_no_warning() {
        let p = params(1.0, 0.01, 1.0);
        let data = CustomerData::new(array![0.0], array![0.0], array![10.0]).unwrap();
        let scales = ScaleParams::constant(&p, 1);

        assert!(check_integral_divergence(&p, &scales, &data).is_empty());
    }

    #[test]
    // Purpose
    // -------
    // A huge transaction count drives the lower bound to zero.
    //
    // Given
    // -----
    // - `x = 1e6`, `t_x = 5`, `alpha = 1`, so `6^-1e6` underflows.
    //
    // Expect
    // ------
    // - `IntegralMayDivergeToNegInf { lower_bound: 0.0 }`.
    fn large_count_flags_negative_divergence() {
        let p = params(1.0, 0.1, 1.0);
        let data = CustomerData::new(array![1e6], array![5.0], array![10.0]).unwrap();
        let scales = ScaleParams::constant(&p, 1);

        let warnings = check_integral_divergence(&p, &scales, &data);

        assert_eq!(warnings, vec![DiagnosticWarning::IntegralMayDivergeToNegInf { lower_bound: 0.0 }]);
    }

    #[test]
    // Purpose
    // -------
    // Tiny scales with a large exponent drive the upper bound past the
    // threshold.
    //
    // Given
    // -----
    // - `t_x = 0` for one customer, `alpha = 1e-10`, `x = 30`, `r = 1`.
    //   `(1e-10)^-31 = 1e310` overflows.
    //
    // Expect
    // ------
    // - An `IntegralMayDivergeToPosInf` warning.
    fn tiny_scale_flags_positive_divergence() {
        let p = params(1.0, 0.1, 1.0);
        let data = CustomerData::new(array![30.0, 0.0], array![0.0, 1.0], array![5.0, 5.0]).unwrap();
        let scales = ScaleParams { alpha_i: array![1e-10, 1.0], beta_i: array![1.0, 1.0] };

        let warnings = check_integral_divergence(&p, &scales, &data);

        assert!(warnings
            .iter()
            .any(|w| matches!(w, DiagnosticWarning::IntegralMayDivergeToPosInf { .. })));
    }

    #[test]
    // Purpose
    // -------
    // Display output identifies the customer of a non-converged integral.
    //
    // Given
    // -----
    // - `QuadratureNotConverged { customer: 7, .. }`.
    //
    // Expect
    // ------
    // - Message mentions `customer 7`.
    fn display_names_customer() {
        let w = DiagnosticWarning::QuadratureNotConverged {
            customer: 7,
            value: 0.5,
            abs_error: 1e-3,
            n_intervals: 10,
        };

        assert!(w.to_string().contains("customer 7"));
    }
}

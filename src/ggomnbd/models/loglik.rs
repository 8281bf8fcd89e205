//! Per-customer log-likelihood evaluation for the GGompertz/NBD model.
//!
//! Purpose
//! -------
//! Turn decoded parameters and a customer cohort into per-customer
//! log-likelihood contributions, and aggregate them into the negative sum
//! consumed by minimizers. Both model variants share this evaluator; they
//! differ only in how the per-customer scales were produced.
//!
//! Key behaviors
//! -------------
//! - For each customer `i`, with `G = ln Γ(r + x_i) - ln Γ(r)`:
//!
//!   ```text
//!   L1 = G + r·(ln α_i - ln(α_i + t_cal)) - x·ln(α_i + t_cal)
//!          + s·(ln β_i - ln(β_i - 1 + exp(b·t_cal)))
//!   L2 = G + ln b + r·ln α_i + ln s + s·ln β_i + ln ∫_{t_x}^{t_cal} f(y) dy
//!   LL = ln(exp(L1) + exp(L2))      (stable log-add-exp)
//!   ```
//!
//! - The integral is carried in log space. Quadrature runs on
//!   `f(y) / f(t_x)`, and `ln f(t_x)` is added back afterwards. The integrand
//!   is therefore `1` at the lower limit, so the absolute tolerance stays
//!   meaningful when `f` itself is far below `epsabs`.
//!
//! - The integrals run serially or on the rayon pool with one
//!   [`QuadratureWorkspace`] per worker. Output is always in customer order
//!   and the final sum is sequential, so serial and parallel runs agree
//!   bit-for-bit.
//! - Batch divergence checks and non-converged quadrature are collected as
//!   [`DiagnosticWarning`]s, logged at `warn` level, and returned alongside
//!   the values.
//!
//! Invariants & assumptions
//! ------------------------
//! - Inputs come from validated containers: positive finite parameters and
//!   scales, `0 <= t_x <= t_cal`, `x >= 0`.
//! - When `t_x == t_cal` the integral is exactly `0`, `L2 = -inf` and
//!   `LL == L1`.
//! - Terms involving `exp(b·t)` go through
//!   [`ln_add_expm1`], so `L1` and `L2` stay finite when `b·t` exceeds the
//!   range of `exp`.
//! - NaN/inf produced by the numerics propagate to the outputs; they are not
//!   clamped.
use crate::{
    ggomnbd::{
        core::{
            data::CustomerData,
            diagnostics::{DiagnosticWarning, check_integral_divergence, emit_warnings},
            kernel::IntegralKernel,
            options::GGomNBDOptions,
            params::{DecodedParams, GGomNBDParams},
            quadrature::{QuadratureOutcome, QuadratureWorkspace},
        },
        errors::{GGomNBDError, GGomNBDResult},
    },
    optimization::numerical_stability::{ln_add_expm1, log_add_exp},
};
use ndarray::{Array1, ArrayView1};
use rayon::prelude::*;
use statrs::function::gamma::ln_gamma;

/// `CustomerTerms` — log-likelihood pieces for one customer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CustomerTerms {
    /// Alive-at-`t_cal` contribution.
    pub l1: f64,
    /// Died-in-`(t_x, t_cal]` contribution.
    pub l2: f64,
    /// Combined contribution `ln(exp(l1) + exp(l2))`.
    pub ll: f64,
}

/// Combine the closed-form and integral terms for one customer.
///
/// Parameters
/// ----------
/// - `params`: decoded model scalars (`r`, `b`, `s` are used).
/// - `alpha`, `beta`: the customer's scales.
/// - `x`, `t_cal`: the customer's count and window length.
/// - `ln_integral`: `ln ∫_{t_x}^{t_cal} f(y) dy` for the same customer.
pub fn customer_terms(
    params: &GGomNBDParams, alpha: f64, beta: f64, x: f64, t_cal: f64, ln_integral: f64,
) -> CustomerTerms {
    let (r, b, s) = (params.r, params.b, params.s);
    let g = ln_gamma(r + x) - ln_gamma(r);
    let ln_alpha = alpha.ln();
    let ln_alpha_t = (alpha + t_cal).ln();
    let ln_beta = beta.ln();

    let l1 = g + r * (ln_alpha - ln_alpha_t) - x * ln_alpha_t
        + s * (ln_beta - ln_add_expm1(beta, b * t_cal));
    let l2 = g + b.ln() + r * ln_alpha + s.ln() + s * ln_beta + ln_integral;

    CustomerTerms { l1, l2, ll: log_add_exp(l1, l2) }
}

/// `LLEvaluation` — everything produced by one evaluation.
///
/// Fields
/// ------
/// - `ll`, `l1`, `l2`: length-`n` vectors in customer order.
/// - `ln_integrals`: `ln ∫_{t_x}^{t_cal} f(y) dy` per customer (`-inf` when
///   `t_x == t_cal`).
/// - `warnings`: diagnostics raised during this evaluation (also logged).
#[derive(Debug, Clone, PartialEq)]
pub struct LLEvaluation {
    pub ll: Array1<f64>,
    pub l1: Array1<f64>,
    pub l2: Array1<f64>,
    pub ln_integrals: Array1<f64>,
    pub warnings: Vec<DiagnosticWarning>,
}

impl LLEvaluation {
    /// `-Σ LL_i`, the quantity a minimizer drives down.
    pub fn negative_sum(&self) -> f64 {
        negative_sum(self.ll.view())
    }

    /// `Σ LL_i`, the log-likelihood of the cohort.
    pub fn total(&self) -> f64 {
        -self.negative_sum()
    }
}

/// `-Σ ll_i`; NaN and infinities propagate.
pub fn negative_sum(ll: ArrayView1<'_, f64>) -> f64 {
    -ll.iter().sum::<f64>()
}

/// Evaluate every customer's log-likelihood terms.
///
/// Parameters
/// ----------
/// - `decoded`: output of the parameter transform; `decoded.scales` must
///   cover exactly `data.len()` customers.
/// - `data`: validated cohort.
/// - `options`: quadrature settings and the parallel switch.
///
/// Errors
/// ------
/// - `GGomNBDError::LengthMismatch` if the scales do not match the cohort
///   size. Numerical trouble is never an error; see [`LLEvaluation::warnings`].
pub fn evaluate_ll(
    decoded: &DecodedParams, data: &CustomerData, options: &GGomNBDOptions,
) -> GGomNBDResult<LLEvaluation> {
    let n = data.len();
    if decoded.scales.len() != n {
        return Err(GGomNBDError::LengthMismatch {
            name: "alpha_i",
            expected: n,
            actual: decoded.scales.len(),
        });
    }

    let model = &decoded.model;
    let alpha = &decoded.scales.alpha_i;
    let beta = &decoded.scales.beta_i;
    let quad = &options.quadrature;

    let mut warnings = check_integral_divergence(model, &decoded.scales, data);

    // Each outcome is for `f(y) / f(t_x)`; the second element is `ln f(t_x)`.
    let integrate_customer = |ws: &mut QuadratureWorkspace, i: usize| {
        let (t_x, t_cal) = (data.t_x[i], data.t_cal[i]);
        let kernel = IntegralKernel::new(model, alpha[i], beta[i], data.x[i]);
        let ln_scale = kernel.ln_eval(t_x);
        let ln_scale = if ln_scale.is_finite() { ln_scale } else { 0.0 };
        let outcome = ws.integrate(move |y| (kernel.ln_eval(y) - ln_scale).exp(), t_x, t_cal, quad);
        (outcome, ln_scale)
    };

    let outcomes: Vec<(QuadratureOutcome, f64)> = if options.parallel {
        (0..n)
            .into_par_iter()
            .map_init(|| QuadratureWorkspace::new(quad.limit), integrate_customer)
            .collect()
    } else {
        let mut ws = QuadratureWorkspace::new(quad.limit);
        (0..n).map(|i| integrate_customer(&mut ws, i)).collect()
    };

    let mut ll = Array1::zeros(n);
    let mut l1 = Array1::zeros(n);
    let mut l2 = Array1::zeros(n);
    let mut ln_integrals = Array1::zeros(n);
    for (i, (outcome, ln_scale)) in outcomes.iter().enumerate() {
        if !outcome.converged {
            let scale = ln_scale.exp();
            warnings.push(DiagnosticWarning::QuadratureNotConverged {
                customer: i,
                value: outcome.value * scale,
                abs_error: outcome.abs_error * scale,
                n_intervals: outcome.n_intervals,
            });
        }
        let ln_integral = ln_scale + outcome.value.ln();
        let terms = customer_terms(model, alpha[i], beta[i], data.x[i], data.t_cal[i], ln_integral);
        ll[i] = terms.ll;
        l1[i] = terms.l1;
        l2[i] = terms.l2;
        ln_integrals[i] = ln_integral;
    }

    emit_warnings(&warnings);
    let evaluation = LLEvaluation { ll, l1, l2, ln_integrals, warnings };
    log::debug!(
        "GGompertz/NBD evaluation: n = {n}, sum LL = {}, warnings = {}",
        evaluation.total(),
        evaluation.warnings.len()
    );
    Ok(evaluation)
}

//! Integration tests for the GGompertz/NBD log-likelihood pipeline.
//!
//! Purpose
//! -------
//! - Validate the end-to-end path: raw arrays → validated containers →
//!   parameter transform → per-customer quadrature → stable combination →
//!   aggregate, against reference values computed with 50-digit arithmetic.
//! - Exercise the static-covariate variant against the no-covariate one and
//!   the optimizer seam through `argmin`'s traits.
//!
//! Coverage
//! --------
//! - `ggomnbd::models::ggomnbd`:
//!   - Free functions and model types for both variants.
//!   - Reference values for a single customer, a mixed cohort, an extreme
//!     large-count customer, and a hazard steep enough to overflow `exp`.
//!   - Covariate reductions and dimension checks.
//! - `optimization::loglik_optimizer`:
//!   - `ArgMinAdapter` cost sign convention and finite-difference gradient.
//!
//! Exclusions
//! ----------
//! - Quadrature internals, divergence heuristics, and option validation are
//!   covered by unit tests.
//! - Parameter estimation itself; the crate only supplies the objective.
use approx::assert_relative_eq;
use argmin::core::{CostFunction, Gradient};
use ndarray::{Array1, Array2, array};
use rust_clv::{
    ggomnbd::{
        GGomNBDError,
        core::{
            covariates::{Covariates, StaticCovData},
            data::CustomerData,
            options::{GGomNBDOptions, QuadratureOptions},
        },
        models::ggomnbd::{
            GGomNBDNoCov, GGomNBDStaticCov, ggomnbd_nocov_ll_ind, ggomnbd_nocov_ll_sum,
            ggomnbd_staticcov_ll_ind,
        },
    },
    optimization::loglik_optimizer::ArgMinAdapter,
};

/// Purpose
/// -------
/// Map natural-scale `(r, alpha_0, b, s, beta_0)` to the log-scale layout.
fn log_params(r: f64, alpha: f64, b: f64, s: f64, beta: f64) -> Array1<f64> {
    array![r.ln(), alpha.ln(), b.ln(), s.ln(), beta.ln()]
}

/// Purpose
/// -------
/// Five customers spanning zero repeaters, mid-window histories, and a
/// long-tenured heavy buyer, with their reference contributions at
/// `(r, alpha_0, b, s, beta_0) = (0.8, 5, 0.05, 1.5, 3)`.
fn reference_cohort() -> (Array1<f64>, Array1<f64>, Array1<f64>, Array1<f64>) {
    let x = array![0.0, 2.0, 5.0, 1.0, 12.0];
    let t_x = array![0.0, 4.5, 8.0, 0.5, 29.0];
    let t_cal = array![10.0, 10.0, 12.0, 3.0, 30.0];
    let expected = array![
        -0.76415355240449689887,
        -5.9133680987570249727,
        -10.918993046207968777,
        -2.6660810341876573735,
        -25.982911669208980734,
    ];
    (x, t_x, t_cal, expected)
}

#[test]
// Purpose
// -------
// Reproduce the single-customer reference scenario through the free function.
//
// Given
// -----
// - `x = 0`, `t_x = 0`, `t_cal = 10`; all natural-scale parameters 1 except
//   `b = 0.01`.
//
// Expect
// ------
// - `LL ≈ -2.2490688527847858` and `ll_sum` is its negation.
fn single_customer_matches_reference() {
    let params = log_params(1.0, 1.0, 0.01, 1.0, 1.0);
    let (x, t_x, t_cal) = (array![0.0], array![0.0], array![10.0]);

    let ll = ggomnbd_nocov_ll_ind(&params, &x, &t_x, &t_cal).unwrap();
    let sum = ggomnbd_nocov_ll_sum(&params, &x, &t_x, &t_cal).unwrap();

    assert_relative_eq!(ll[0], -2.2490688527847857894, max_relative = 1e-8);
    assert_relative_eq!(sum, 2.2490688527847857894, max_relative = 1e-8);
}

#[test]
// Purpose
// -------
// Every customer of a heterogeneous cohort matches its reference value, and
// the aggregate is the negative sum.
//
// Given
// -----
// - `reference_cohort()`.
//
// Expect
// ------
// - Per-customer agreement to 1e-8 relative; `ll_sum == -Σ expected`.
fn cohort_matches_reference_values() {
    let (x, t_x, t_cal, expected) = reference_cohort();
    let params = log_params(0.8, 5.0, 0.05, 1.5, 3.0);

    let ll = ggomnbd_nocov_ll_ind(&params, &x, &t_x, &t_cal).unwrap();
    let sum = ggomnbd_nocov_ll_sum(&params, &x, &t_x, &t_cal).unwrap();

    for (got, want) in ll.iter().zip(expected.iter()) {
        assert_relative_eq!(*got, *want, max_relative = 1e-8);
    }
    assert_relative_eq!(sum, -expected.sum(), max_relative = 1e-8);
}

#[test]
// Purpose
// -------
// Large log-terms combine without overflow.
//
// Given
// -----
// - `x = 1000`, `t_x = 1`, `t_cal = 2`; `(r, α, b, s, β) = (1, 0.001, 0.1, 1, 1)`,
//   so `L1 ≈ 5210.68` and `L2 ≈ 5894.91`.
//
// Expect
// ------
// - Finite `LL ≈ 5894.9104823089510587`; `L1` and `L2` match their
//   references.
fn large_count_is_numerically_stable() {
    let data = CustomerData::new(array![1000.0], array![1.0], array![2.0]).unwrap();
    let model = GGomNBDNoCov::default();

    let eval = model.evaluate(log_params(1.0, 0.001, 0.1, 1.0, 1.0).view(), &data).unwrap();

    assert!(eval.ll[0].is_finite());
    assert_relative_eq!(eval.l1[0], 5210.6797205519832581, max_relative = 1e-10);
    assert_relative_eq!(eval.l2[0], 5894.9104823089510587, max_relative = 1e-7);
    assert_relative_eq!(eval.ll[0], 5894.9104823089510587, max_relative = 1e-7);
}

#[test]
// Purpose
// -------
// A steep Gompertz hazard over a long calibration window, where
// `exp(b · t_cal)` overflows, still yields a finite objective.
//
// Given
// -----
// - `x = 2`, `t_x = 5`, `t_cal = 100`; `(r, α, b, s, β) = (1, 1, 10, 1, 1)`.
//
// Expect
// ------
// - `LL ≈ -54.730187168425105` and `ll_sum` is its negation.
fn steep_hazard_gives_finite_objective() {
    let params = log_params(1.0, 1.0, 10.0, 1.0, 1.0);
    let (x, t_x, t_cal) = (array![2.0], array![5.0], array![100.0]);

    let ll = ggomnbd_nocov_ll_ind(&params, &x, &t_x, &t_cal).unwrap();
    let sum = ggomnbd_nocov_ll_sum(&params, &x, &t_x, &t_cal).unwrap();

    assert!(ll[0].is_finite());
    assert_relative_eq!(ll[0], -54.730187168425105, max_relative = 1e-8);
    assert_relative_eq!(sum, 54.730187168425105, max_relative = 1e-8);
}

#[test]
// Purpose
// -------
// A transaction-covariate shift is equivalent to moving `log alpha_0`.
//
// Given
// -----
// - One customer with `cov_trans = [[2]]`, `theta_trans = [0.3]`, no life
//   covariates.
//
// Expect
// ------
// - Same contribution as the no-covariate model with
//   `log alpha_0 - 2 · 0.3`.
fn transaction_covariate_shifts_alpha() {
    let (x, t_x, t_cal) = (array![3.0], array![6.0], array![10.0]);
    let base = log_params(0.8, 5.0, 0.05, 1.5, 3.0);
    let mut params = base.to_vec();
    params.push(0.3);
    let mut shifted = base.clone();
    shifted[1] -= 2.0 * 0.3;

    let with_cov = ggomnbd_staticcov_ll_ind(
        &Array1::from(params),
        &x,
        &t_x,
        &t_cal,
        &Array2::zeros((1, 0)),
        &array![[2.0]],
    )
    .unwrap();
    let without = ggomnbd_nocov_ll_ind(&shifted, &x, &t_x, &t_cal).unwrap();

    assert_relative_eq!(with_cov[0], without[0], max_relative = 1e-10);
}

#[test]
// Purpose
// -------
// A lifetime-covariate shift is equivalent to moving `log beta_0`.
//
// Given
// -----
// - The reference cohort, `cov_life` all ones, `theta_life = [-0.5]`.
//
// Expect
// ------
// - Same per-customer vector as the no-covariate model with
//   `log beta_0 + 0.5`.
fn lifetime_covariate_shifts_beta() {
    let (x, t_x, t_cal, _) = reference_cohort();
    let base = log_params(0.8, 5.0, 0.05, 1.5, 3.0);
    let mut params = base.to_vec();
    params.push(-0.5);
    let mut shifted = base.clone();
    shifted[4] += 0.5;
    let data = StaticCovData::new(
        CustomerData::new(x.clone(), t_x.clone(), t_cal.clone()).unwrap(),
        Covariates::new(Array2::ones((5, 1)), Array2::zeros((5, 0))).unwrap(),
    )
    .unwrap();

    let with_cov = GGomNBDStaticCov::default().ll_ind(Array1::from(params).view(), &data).unwrap();
    let without = ggomnbd_nocov_ll_ind(&shifted, &x, &t_x, &t_cal).unwrap();

    for (a, b) in with_cov.iter().zip(without.iter()) {
        assert_relative_eq!(*a, *b, max_relative = 1e-10);
    }
}

#[test]
// Purpose
// -------
// Invalid inputs are rejected before evaluation.
//
// Given
// -----
// - A 6-entry no-covariate vector; a cohort with `t_x > t_cal`.
//
// Expect
// ------
// - `ParamLengthMismatch` and `InvalidTimeWindow` respectively.
fn invalid_inputs_are_rejected() {
    let (x, t_x, t_cal, _) = reference_cohort();
    let too_long = Array1::zeros(6);

    let length_err = ggomnbd_nocov_ll_sum(&too_long, &x, &t_x, &t_cal).unwrap_err();
    let window_err =
        ggomnbd_nocov_ll_sum(&log_params(1.0, 1.0, 0.1, 1.0, 1.0), &array![1.0], &array![4.0], &array![3.0])
            .unwrap_err();

    assert_eq!(length_err, GGomNBDError::ParamLengthMismatch { expected: 5, actual: 6 });
    assert_eq!(window_err, GGomNBDError::InvalidTimeWindow { index: 0, t_x: 4.0, t_cal: 3.0 });
}

#[test]
// Purpose
// -------
// The argmin adapter exposes `-Σ LL` as the cost and a gradient that agrees
// with a manual central difference.
//
// Given
// -----
// - The reference cohort, tight quadrature tolerances so the objective is
//   smooth at finite-difference scale.
//
// Expect
// ------
// - `cost == ll_sum`; each gradient entry within 1e-3 (absolute, plus
//   1e-2 relative) of `(c(θ + h e_i) - c(θ - h e_i)) / 2h` with `h = 1e-5`.
fn argmin_adapter_cost_and_gradient() {
    let (x, t_x, t_cal, _) = reference_cohort();
    let data = CustomerData::new(x, t_x, t_cal).unwrap();
    let options = GGomNBDOptions::new(QuadratureOptions::new(1e-14, 1e-12, 1000).unwrap(), true);
    let model = GGomNBDNoCov::new(options);
    let adapter = ArgMinAdapter::new(&model, &data);
    let theta = log_params(0.8, 5.0, 0.05, 1.5, 3.0);

    let cost = adapter.cost(&theta).unwrap();
    let grad = adapter.gradient(&theta).unwrap();

    assert_relative_eq!(cost, model.ll_sum(theta.view(), &data).unwrap(), max_relative = 1e-14);
    let h = 1e-5;
    for i in 0..theta.len() {
        let mut up = theta.clone();
        let mut down = theta.clone();
        up[i] += h;
        down[i] -= h;
        let manual = (adapter.cost(&up).unwrap() - adapter.cost(&down).unwrap()) / (2.0 * h);
        assert!(
            (grad[i] - manual).abs() <= 1e-3 + 1e-2 * manual.abs(),
            "gradient mismatch at {i}: adapter {} vs manual {manual}",
            grad[i]
        );
    }
}

//! GGompertz/NBD model variants — no-covariate and static-covariate entry
//! points.
//!
//! Purpose
//! -------
//! Expose the public evaluation surface of the crate. Each variant decodes
//! its parameter vector, evaluates every customer through the shared
//! evaluator, and returns either the per-customer vector or the negative sum.
//!
//! Key behaviors
//! -------------
//! - [`GGomNBDNoCov`] uses the layout `[log r, log alpha_0, log b, log s,
//!   log beta_0]` and constant scales.
//! - [`GGomNBDStaticCov`] appends `theta_life` then `theta_trans` (original
//!   scale) and derives per-customer scales from the covariate matrices.
//! - Both implement [`LogLikelihood`] with `value = Σ LL_i`, so
//!   [`ArgMinAdapter`](crate::optimization::loglik_optimizer::ArgMinAdapter)
//!   exposes the cost `-Σ LL_i` to `argmin`.
//! - The free functions (`ggomnbd_*_ll_ind`, `ggomnbd_*_ll_sum`) validate raw
//!   arrays and evaluate with default options.
//!
//! Invariants & assumptions
//! ------------------------
//! - All shape and domain checks happen before any integral is computed.
//! - Evaluations are pure: the same inputs always give the same outputs, and
//!   nothing is cached between calls.
//!
//! Downstream usage
//! ----------------
//! - One-off evaluation: call the free functions with raw arrays.
//! - Repeated evaluation inside an optimizer: build [`CustomerData`] /
//!   [`StaticCovData`] once, then call `ll_sum` (or go through the adapter).
use crate::{
    ggomnbd::{
        core::{
            covariates::{Covariates, StaticCovData},
            data::CustomerData,
            options::GGomNBDOptions,
            params::{N_MODEL_PARAMS, decode_nocov, decode_staticcov},
        },
        errors::GGomNBDResult,
        models::loglik::{LLEvaluation, evaluate_ll},
    },
    optimization::{
        errors::OptResult,
        loglik_optimizer::{Cost, LogLikelihood, Theta},
    },
};
use ndarray::{Array1, Array2, ArrayView1};

/// `GGomNBDNoCov` — GGompertz/NBD model without covariates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GGomNBDNoCov {
    pub options: GGomNBDOptions,
}

impl GGomNBDNoCov {
    pub fn new(options: GGomNBDOptions) -> Self {
        GGomNBDNoCov { options }
    }

    /// Number of parameters this variant expects.
    pub fn n_params(&self) -> usize {
        N_MODEL_PARAMS
    }

    /// Full evaluation: per-customer terms, integrals and warnings.
    ///
    /// Errors
    /// ------
    /// - Any parameter error from [`decode_nocov`].
    pub fn evaluate(
        &self, log_params: ArrayView1<'_, f64>, data: &CustomerData,
    ) -> GGomNBDResult<LLEvaluation> {
        let decoded = decode_nocov(log_params, data.len())?;
        evaluate_ll(&decoded, data, &self.options)
    }

    /// Per-customer log-likelihood contributions.
    pub fn ll_ind(
        &self, log_params: ArrayView1<'_, f64>, data: &CustomerData,
    ) -> GGomNBDResult<Array1<f64>> {
        Ok(self.evaluate(log_params, data)?.ll)
    }

    /// Negative total log-likelihood `-Σ LL_i`.
    pub fn ll_sum(&self, log_params: ArrayView1<'_, f64>, data: &CustomerData) -> GGomNBDResult<f64> {
        Ok(self.evaluate(log_params, data)?.negative_sum())
    }
}

impl LogLikelihood for GGomNBDNoCov {
    type Data = CustomerData;

    /// Total log-likelihood `Σ LL_i` at `θ = [log r, log alpha_0, log b,
    /// log s, log beta_0]`.
    fn value(&self, theta: &Theta, data: &Self::Data) -> OptResult<Cost> {
        Ok(self.evaluate(theta.view(), data)?.total())
    }

    /// Checks the layout and that `θ` decodes to positive parameters.
    fn check(&self, theta: &Theta, data: &Self::Data) -> OptResult<()> {
        decode_nocov(theta.view(), data.len())?;
        Ok(())
    }
}

/// `GGomNBDStaticCov` — GGompertz/NBD model with static covariates.
///
/// Parameter layout
/// ----------------
/// `[log r, log alpha_0, log b, log s, log beta_0, theta_life (k_life),
/// theta_trans (k_trans)]`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GGomNBDStaticCov {
    pub options: GGomNBDOptions,
}

impl GGomNBDStaticCov {
    pub fn new(options: GGomNBDOptions) -> Self {
        GGomNBDStaticCov { options }
    }

    /// Number of parameters expected for the given covariates.
    pub fn n_params(&self, covariates: &Covariates) -> usize {
        N_MODEL_PARAMS + covariates.k_life() + covariates.k_trans()
    }

    /// Full evaluation: per-customer terms, integrals and warnings.
    ///
    /// Errors
    /// ------
    /// - Any parameter error from [`decode_staticcov`], including
    ///   `ParamLengthMismatch` when `params.len() != 5 + k_life + k_trans`.
    pub fn evaluate(
        &self, params: ArrayView1<'_, f64>, data: &StaticCovData,
    ) -> GGomNBDResult<LLEvaluation> {
        let decoded = decode_staticcov(params, &data.covariates)?;
        evaluate_ll(&decoded, &data.customers, &self.options)
    }

    /// Per-customer log-likelihood contributions.
    pub fn ll_ind(
        &self, params: ArrayView1<'_, f64>, data: &StaticCovData,
    ) -> GGomNBDResult<Array1<f64>> {
        Ok(self.evaluate(params, data)?.ll)
    }

    /// Negative total log-likelihood `-Σ LL_i`.
    pub fn ll_sum(&self, params: ArrayView1<'_, f64>, data: &StaticCovData) -> GGomNBDResult<f64> {
        Ok(self.evaluate(params, data)?.negative_sum())
    }
}

impl LogLikelihood for GGomNBDStaticCov {
    type Data = StaticCovData;

    fn value(&self, theta: &Theta, data: &Self::Data) -> OptResult<Cost> {
        Ok(self.evaluate(theta.view(), data)?.total())
    }

    fn check(&self, theta: &Theta, data: &Self::Data) -> OptResult<()> {
        decode_staticcov(theta.view(), &data.covariates)?;
        Ok(())
    }
}

// ---- Free functions (default options) ----

/// Per-customer log-likelihood, no covariates.
///
/// Errors
/// ------
/// - Data validation errors from [`CustomerData::new`].
/// - Parameter errors from [`decode_nocov`].
pub fn ggomnbd_nocov_ll_ind(
    log_params: &Array1<f64>, x: &Array1<f64>, t_x: &Array1<f64>, t_cal: &Array1<f64>,
) -> GGomNBDResult<Array1<f64>> {
    let data = CustomerData::new(x.clone(), t_x.clone(), t_cal.clone())?;
    GGomNBDNoCov::default().ll_ind(log_params.view(), &data)
}

/// Negative total log-likelihood, no covariates.
pub fn ggomnbd_nocov_ll_sum(
    log_params: &Array1<f64>, x: &Array1<f64>, t_x: &Array1<f64>, t_cal: &Array1<f64>,
) -> GGomNBDResult<f64> {
    let data = CustomerData::new(x.clone(), t_x.clone(), t_cal.clone())?;
    GGomNBDNoCov::default().ll_sum(log_params.view(), &data)
}

fn static_cov_data(
    x: &Array1<f64>, t_x: &Array1<f64>, t_cal: &Array1<f64>, cov_life: &Array2<f64>,
    cov_trans: &Array2<f64>,
) -> GGomNBDResult<StaticCovData> {
    let customers = CustomerData::new(x.clone(), t_x.clone(), t_cal.clone())?;
    let covariates = Covariates::new(cov_life.clone(), cov_trans.clone())?;
    StaticCovData::new(customers, covariates)
}

/// Per-customer log-likelihood with static covariates.
///
/// Errors
/// ------
/// - Data validation errors from [`CustomerData::new`] and [`Covariates::new`].
/// - `CovariateRowMismatch` if a matrix does not have one row per customer.
/// - Parameter errors from [`decode_staticcov`].
pub fn ggomnbd_staticcov_ll_ind(
    params: &Array1<f64>, x: &Array1<f64>, t_x: &Array1<f64>, t_cal: &Array1<f64>,
    cov_life: &Array2<f64>, cov_trans: &Array2<f64>,
) -> GGomNBDResult<Array1<f64>> {
    let data = static_cov_data(x, t_x, t_cal, cov_life, cov_trans)?;
    GGomNBDStaticCov::default().ll_ind(params.view(), &data)
}

/// Negative total log-likelihood with static covariates.
pub fn ggomnbd_staticcov_ll_sum(
    params: &Array1<f64>, x: &Array1<f64>, t_x: &Array1<f64>, t_cal: &Array1<f64>,
    cov_life: &Array2<f64>, cov_trans: &Array2<f64>,
) -> GGomNBDResult<f64> {
    let data = static_cov_data(x, t_x, t_cal, cov_life, cov_trans)?;
    GGomNBDStaticCov::default().ll_sum(params.view(), &data)
}

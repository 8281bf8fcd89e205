//! GGompertz/NBD parameters — decoding optimizer vectors into model scalars
//! and per-customer scales.
//!
//! Purpose
//! -------
//! Implement the parameter transform between the flat, optimizer-facing
//! parameter vector and the quantities the likelihood needs: the scalars
//! `(r, alpha_0, b, s, beta_0)` and the per-customer scale vectors
//! `(alpha_i, beta_i)`.
//!
//! Key behaviors
//! -------------
//! - [`GGomNBDParams::from_log`] exponentiates the five log-scale entries
//!   `[r, alpha_0, b, s, beta_0]`, so positivity holds by construction for
//!   any finite input that does not overflow/underflow.
//! - [`ScaleParams::constant`] fills both scale vectors with the base values
//!   (no-covariate variant).
//! - [`ScaleParams::from_covariates`] computes
//!   `alpha_i = alpha_0 · exp(-cov_trans_i · theta_trans)` and
//!   `beta_i = beta_0 · exp(-cov_life_i · theta_life)` as a matrix–vector
//!   product followed by an elementwise map.
//! - [`decode_nocov`] / [`decode_staticcov`] bundle both steps and perform all
//!   layout checks before any numeric work.
//!
//! Invariants & assumptions
//! ------------------------
//! - Static-covariate layout is strictly positional:
//!   `[r, alpha_0, b, s, beta_0 | theta_life (k_life) | theta_trans (k_trans)]`;
//!   the first five are on log scale, the coefficients on original scale.
//! - After a successful decode every scalar and every `alpha_i`, `beta_i` is
//!   finite and strictly positive.
//!
//! Conventions
//! -----------
//! - Vectors are `ndarray::Array1<f64>`; matrices are row-per-customer
//!   `Array2<f64>`.
//!
//! Testing notes
//! -------------
//! - Unit tests cover decoding, layout errors, covariate collapse to the
//!   no-covariate scales, and a proptest over random log-scale inputs and
//!   covariate matrices for the positivity invariant.
use crate::ggomnbd::{
    core::{
        covariates::Covariates,
        validation::{
            validate_finite_params, validate_param_len, validate_positive_param,
            validate_positive_scales,
        },
    },
    errors::GGomNBDResult,
};
use ndarray::{Array1, ArrayView1, s};

/// Number of model parameters `[r, alpha_0, b, s, beta_0]` at the head of
/// every parameter vector.
pub const N_MODEL_PARAMS: usize = 5;

/// `GGomNBDParams` — decoded scalar model parameters.
///
/// Fields
/// ------
/// - `r`: shape of the Gamma heterogeneity of the purchase process.
/// - `alpha_0`: base scale of the purchase-process heterogeneity.
/// - `b`: scale of the Gompertz hazard.
/// - `s`: shape of the Gamma heterogeneity of the lifetime process.
/// - `beta_0`: base scale of the lifetime-process heterogeneity.
///
/// Invariants
/// ----------
/// - All fields are finite and strictly positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GGomNBDParams {
    pub r: f64,
    pub alpha_0: f64,
    pub b: f64,
    pub s: f64,
    pub beta_0: f64,
}

impl GGomNBDParams {
    /// Decode `[log r, log alpha_0, log b, log s, log beta_0]`.
    ///
    /// Parameters
    /// ----------
    /// - `log_params`: `ArrayView1<f64>`
    ///   Exactly five finite log-scale entries, in the order above.
    ///
    /// Returns
    /// -------
    /// `GGomNBDResult<GGomNBDParams>`
    ///   Decoded parameters, all finite and `> 0`.
    ///
    /// Errors
    /// ------
    /// - `GGomNBDError::ParamLengthMismatch` if `log_params.len() != 5`.
    /// - `GGomNBDError::NonFiniteParam` for NaN/±inf entries.
    /// - `GGomNBDError::NonPositiveParam` if `exp` overflows or underflows.
    pub fn from_log(log_params: ArrayView1<'_, f64>) -> GGomNBDResult<Self> {
        validate_param_len(log_params, N_MODEL_PARAMS)?;
        validate_finite_params(log_params)?;
        Self::decode_head(log_params)
    }

    // Assumes the first five entries exist and are finite.
    fn decode_head(params: ArrayView1<'_, f64>) -> GGomNBDResult<Self> {
        Ok(GGomNBDParams {
            r: validate_positive_param("r", params[0].exp())?,
            alpha_0: validate_positive_param("alpha_0", params[1].exp())?,
            b: validate_positive_param("b", params[2].exp())?,
            s: validate_positive_param("s", params[3].exp())?,
            beta_0: validate_positive_param("beta_0", params[4].exp())?,
        })
    }
}

/// `CovariateCoefs` — coefficients for the static covariates (original scale).
#[derive(Debug, Clone, PartialEq)]
pub struct CovariateCoefs {
    /// Coefficients for the lifetime covariates; length `k_life`.
    pub theta_life: Array1<f64>,
    /// Coefficients for the transaction covariates; length `k_trans`.
    pub theta_trans: Array1<f64>,
}

/// `ScaleParams` — per-customer scale parameters.
///
/// Invariants
/// ----------
/// - `alpha_i.len() == beta_i.len() == n`; every entry finite and `> 0`.
#[derive(Debug, Clone, PartialEq)]
pub struct ScaleParams {
    pub alpha_i: Array1<f64>,
    pub beta_i: Array1<f64>,
}

impl ScaleParams {
    /// Constant scales for the no-covariate variant.
    pub fn constant(params: &GGomNBDParams, n: usize) -> Self {
        ScaleParams {
            alpha_i: Array1::from_elem(n, params.alpha_0),
            beta_i: Array1::from_elem(n, params.beta_0),
        }
    }

    /// Per-customer scales from static covariates.
    ///
    /// Computes `alpha_i = alpha_0 · exp(-(cov_trans · theta_trans)_i)` and
    /// `beta_i = beta_0 · exp(-(cov_life · theta_life)_i)`.
    ///
    /// Errors
    /// ------
    /// - `GGomNBDError::ParamLengthMismatch` if a coefficient vector does not
    ///   match its matrix's column count.
    /// - `GGomNBDError::NonPositiveScale` if any scale overflows to `+inf` or
    ///   underflows to `0` (extreme linear predictors).
    pub fn from_covariates(
        params: &GGomNBDParams, coefs: &CovariateCoefs, covariates: &Covariates,
    ) -> GGomNBDResult<Self> {
        validate_param_len(coefs.theta_life.view(), covariates.k_life())?;
        validate_param_len(coefs.theta_trans.view(), covariates.k_trans())?;

        let alpha_0 = params.alpha_0;
        let beta_0 = params.beta_0;
        let alpha_i = covariates.trans.dot(&coefs.theta_trans).mapv(|eta| alpha_0 * (-eta).exp());
        let beta_i = covariates.life.dot(&coefs.theta_life).mapv(|eta| beta_0 * (-eta).exp());

        validate_positive_scales("alpha_i", alpha_i.view())?;
        validate_positive_scales("beta_i", beta_i.view())?;
        Ok(ScaleParams { alpha_i, beta_i })
    }

    /// Number of customers covered.
    pub fn len(&self) -> usize {
        self.alpha_i.len()
    }

    /// `true` when no customers are covered.
    pub fn is_empty(&self) -> bool {
        self.alpha_i.is_empty()
    }
}

/// `DecodedParams` — output of the parameter transform.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedParams {
    pub model: GGomNBDParams,
    pub scales: ScaleParams,
}

/// Decode the no-covariate parameter vector for `n` customers.
///
/// Errors
/// ------
/// - See [`GGomNBDParams::from_log`].
pub fn decode_nocov(log_params: ArrayView1<'_, f64>, n: usize) -> GGomNBDResult<DecodedParams> {
    let model = GGomNBDParams::from_log(log_params)?;
    let scales = ScaleParams::constant(&model, n);
    Ok(DecodedParams { model, scales })
}

/// Decode the static-covariate parameter vector.
///
/// Parameters
/// ----------
/// - `params`: `ArrayView1<f64>`
///   `[log r, log alpha_0, log b, log s, log beta_0, theta_life.., theta_trans..]`
///   with total length `5 + k_life + k_trans`.
/// - `covariates`: `&Covariates`
///   Covariate matrices whose column counts define the layout.
///
/// Errors
/// ------
/// - `GGomNBDError::ParamLengthMismatch` if the total length is wrong; this
///   is checked before anything is exponentiated.
/// - `GGomNBDError::NonFiniteParam` for NaN/±inf entries anywhere.
/// - `GGomNBDError::NonPositiveParam` / `NonPositiveScale` on overflow or
///   underflow of a decoded value.
pub fn decode_staticcov(
    params: ArrayView1<'_, f64>, covariates: &Covariates,
) -> GGomNBDResult<DecodedParams> {
    let k_life = covariates.k_life();
    let k_trans = covariates.k_trans();
    validate_param_len(params, N_MODEL_PARAMS + k_life + k_trans)?;
    validate_finite_params(params)?;

    let model = GGomNBDParams::decode_head(params)?;
    let life_end = N_MODEL_PARAMS + k_life;
    let coefs = CovariateCoefs {
        theta_life: params.slice(s![N_MODEL_PARAMS..life_end]).to_owned(),
        theta_trans: params.slice(s![life_end..]).to_owned(),
    };
    let scales = ScaleParams::from_covariates(&model, &coefs, covariates)?;
    Ok(DecodedParams { model, scales })
}

//! ggomnbd — Gamma-Gompertz/NBD customer-lifetime log-likelihood.
//!
//! Purpose
//! -------
//! Evaluate the log-likelihood of customer repeat-purchase summaries
//! `(x, t_x, t_cal)` under the GGompertz/NBD model: a Gamma-heterogeneous
//! Poisson purchase process combined with a Gompertz-hazard lifetime whose
//! scale is Gamma-heterogeneous. The evaluator is the objective function of an
//! external maximum-likelihood optimizer; it does not estimate parameters
//! itself.
//!
//! Key behaviors
//! -------------
//! - [`core`] validates data, decodes parameters, and integrates the
//!   per-customer kernel with adaptive Gauss–Kronrod quadrature.
//! - [`models`] combines the closed-form and integral terms per customer and
//!   exposes the no-covariate and static-covariate variants.
//! - [`errors`] defines [`GGomNBDError`], raised only for invalid arguments.
//!   Numerical trouble is reported as
//!   [`DiagnosticWarning`](core::DiagnosticWarning) and never aborts an
//!   evaluation.
//!
//! Invariants & assumptions
//! ------------------------
//! - Parameters are positional: `[log r, log alpha_0, log b, log s,
//!   log beta_0]`, followed for the covariate variant by `theta_life` and
//!   `theta_trans` on their original scale.
//! - Evaluation holds no state between calls; identical inputs give identical
//!   outputs whether or not the rayon pool is used.
//!
//! Conventions
//! -----------
//! - Indexing is 0-based and customer-ordered throughout.
//! - Diagnostics go through the `log` facade; the crate never installs a
//!   logger.
//!
//! Downstream usage
//! ----------------
//! 1. Build [`CustomerData`] (and [`Covariates`] / [`StaticCovData`]).
//! 2. Pick [`GGomNBDOptions`] (defaults: `1e-8` tolerances, 1000
//!    subintervals, parallel).
//! 3. Call `GGomNBDNoCov::ll_sum` / `GGomNBDStaticCov::ll_sum`, or hand the
//!    model to `ArgMinAdapter` for an `argmin` solver.

pub mod core;
pub mod errors;
pub mod models;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::core::{
    Covariates, CustomerData, DiagnosticWarning, GGomNBDOptions, GGomNBDParams, QuadratureOptions,
    StaticCovData,
};
pub use self::errors::{GGomNBDError, GGomNBDResult};
pub use self::models::{
    GGomNBDNoCov, GGomNBDStaticCov, LLEvaluation, ggomnbd_nocov_ll_ind, ggomnbd_nocov_ll_sum,
    ggomnbd_staticcov_ll_ind, ggomnbd_staticcov_ll_sum,
};

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use rust_clv::ggomnbd::prelude::*;
//
// to import the main model surface in a single line.

pub mod prelude {
    pub use super::{
        Covariates, CustomerData, DiagnosticWarning, GGomNBDError, GGomNBDNoCov, GGomNBDOptions,
        GGomNBDResult, GGomNBDStaticCov, LLEvaluation, QuadratureOptions, StaticCovData,
        ggomnbd_nocov_ll_ind, ggomnbd_nocov_ll_sum, ggomnbd_staticcov_ll_ind,
        ggomnbd_staticcov_ll_sum,
    };
}

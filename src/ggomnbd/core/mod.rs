//! core — GGompertz/NBD data, parameters, integrand, and quadrature.
//!
//! Purpose
//! -------
//! Collect the building blocks of the GGompertz/NBD likelihood: validated
//! customer and covariate containers, the parameter transform, the
//! per-customer integrand, the adaptive Gauss–Kronrod integrator, evaluation
//! options, and non-fatal numerical diagnostics. The evaluator in
//! `ggomnbd::models` composes these.
//!
//! Key behaviors
//! -------------
//! - Validate inputs once at the boundary ([`CustomerData`], [`Covariates`],
//!   [`StaticCovData`], [`QuadratureOptions`]).
//! - Decode optimizer vectors into positive scalars and per-customer scales
//!   ([`decode_nocov`], [`decode_staticcov`]).
//! - Integrate [`IntegralKernel`] over `[t_x, t_cal]` with a reusable
//!   [`QuadratureWorkspace`].
//! - Flag possibly divergent integrals and non-converged quadrature as
//!   [`DiagnosticWarning`]s.
//!
//! Invariants & assumptions
//! ------------------------
//! - After decoding, `r, alpha_0, b, s, beta_0` and every `alpha_i`, `beta_i`
//!   are finite and strictly positive.
//! - No process-wide state: integration context travels as a `Copy` kernel
//!   captured by value, and each worker owns its workspace.
//!
//! Conventions
//! -----------
//! - Indexing is 0-based; position `i` always refers to customer `i`.
//! - Apart from [`diagnostics::emit_warnings`], this module performs no
//!   logging.

pub mod covariates;
pub mod data;
pub mod diagnostics;
pub mod kernel;
pub mod options;
pub mod params;
pub mod quadrature;
pub mod validation;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::covariates::{Covariates, StaticCovData};
pub use self::data::CustomerData;
pub use self::diagnostics::{DiagnosticWarning, check_integral_divergence, emit_warnings};
pub use self::kernel::IntegralKernel;
pub use self::options::{GGomNBDOptions, QuadratureOptions};
pub use self::params::{
    CovariateCoefs, DecodedParams, GGomNBDParams, N_MODEL_PARAMS, ScaleParams, decode_nocov,
    decode_staticcov,
};
pub use self::quadrature::{QuadratureOutcome, QuadratureWorkspace, integrate};

// ---- Optional convenience prelude for downstream crates -------------------

pub mod prelude {
    pub use super::covariates::{Covariates, StaticCovData};
    pub use super::data::CustomerData;
    pub use super::diagnostics::DiagnosticWarning;
    pub use super::options::{GGomNBDOptions, QuadratureOptions};
    pub use super::params::{DecodedParams, GGomNBDParams, ScaleParams};
}

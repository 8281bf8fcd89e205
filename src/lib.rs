//! rust_clv — GGompertz/NBD customer-lifetime log-likelihood evaluation.
//!
//! Purpose
//! -------
//! Serve as the crate root for the Gamma-Gompertz/NBD likelihood evaluator:
//! given customer repeat-purchase summaries `(x, t_x, t_cal)`, optional
//! static covariates, and a positional parameter vector, compute
//! per-customer log-likelihood contributions and their negative sum for an
//! external maximum-likelihood optimizer.
//!
//! Key behaviors
//! -------------
//! - [`ggomnbd`] holds the model: validated containers, the parameter
//!   transform, adaptive Gauss–Kronrod quadrature of the per-customer
//!   integral, the stable `L1`/`L2` combination, and the two model variants.
//! - [`optimization`] holds the optimizer seam (`LogLikelihood`,
//!   `ArgMinAdapter`, finite-difference gradients) and stable log-space
//!   arithmetic.
//!
//! Invariants & assumptions
//! ------------------------
//! - Invalid arguments are rejected before any numeric work and surfaced as
//!   `GGomNBDError`; numerical trouble is surfaced as `DiagnosticWarning`s
//!   (logged via `log::warn!` and returned) and never aborts an evaluation.
//! - Evaluations are pure and thread-safe; per-customer integrals may run on
//!   the rayon pool without changing results.
//!
//! Downstream usage
//! ----------------
//! - Most callers need only `rust_clv::ggomnbd::prelude::*`.
//! - Optimizer integrations add `rust_clv::optimization::prelude::*` and wrap
//!   a model in `ArgMinAdapter`.
//!
//! Testing notes
//! -------------
//! - Unit tests live in each module; `tests/integration_ggomnbd_pipeline.rs`
//!   checks reference values computed with 50-digit arithmetic, the
//!   covariate reductions, dimension checks, and the argmin adapter.

pub mod ggomnbd;
pub mod optimization;

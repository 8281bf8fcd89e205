//! models — GGompertz/NBD evaluator and variant entry points.
//!
//! Purpose
//! -------
//! Wire the `ggomnbd::core` building blocks into the two public model
//! variants and the shared per-customer evaluator.
//!
//! Key behaviors
//! -------------
//! - [`loglik`] evaluates `L1`, `L2` and `LL` per customer (serial or on the
//!   rayon pool) and aggregates `-Σ LL_i`.
//! - [`ggomnbd`] exposes [`GGomNBDNoCov`], [`GGomNBDStaticCov`] and the
//!   default-option free functions.
//!
//! Testing notes
//! -------------
//! - Unit tests live next to each submodule; end-to-end reference values are
//!   checked in `tests/integration_ggomnbd_pipeline.rs`.

pub mod ggomnbd;
pub mod loglik;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::ggomnbd::{
    GGomNBDNoCov, GGomNBDStaticCov, ggomnbd_nocov_ll_ind, ggomnbd_nocov_ll_sum,
    ggomnbd_staticcov_ll_ind, ggomnbd_staticcov_ll_sum,
};
pub use self::loglik::{CustomerTerms, LLEvaluation, customer_terms, evaluate_ll, negative_sum};

pub mod prelude {
    pub use super::ggomnbd::{GGomNBDNoCov, GGomNBDStaticCov};
    pub use super::loglik::LLEvaluation;
}

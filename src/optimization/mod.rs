//! optimization — optimizer seam and shared numerical helpers.
//!
//! Purpose
//! -------
//! Provide the pieces an external maximum-likelihood optimizer needs to drive
//! the GGompertz/NBD likelihood: the [`LogLikelihood`](loglik_optimizer::LogLikelihood)
//! trait, the `argmin` adapter, finite-difference gradients, the
//! [`OptError`](errors::OptError) type, and stable log-space arithmetic.
//!
//! Conventions
//! -----------
//! - This layer never logs and holds no state between calls.

pub mod errors;
pub mod loglik_optimizer;
pub mod numerical_stability;

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use rust_clv::optimization::prelude::*;
//
// to import the optimizer seam in a single line.

pub mod prelude {
    pub use super::errors::{OptError, OptResult};
    pub use super::loglik_optimizer::prelude::*;
    pub use super::numerical_stability::prelude::*;
}

//! loglik_optimizer — the seam between log-likelihood models and `argmin`.
//!
//! Purpose
//! -------
//! Let an external optimizer consume any model implementing
//! [`LogLikelihood`] without knowing anything about the model: the adapter
//! turns `ℓ(θ)` into an `argmin` cost `-ℓ(θ)` with a gradient, falling back to
//! finite differences when the model has no analytic gradient.
//!
//! Key behaviors
//! -------------
//! - [`ArgMinAdapter`] implements `argmin::core::{CostFunction, Gradient}`.
//! - [`finite_diff`] provides central/forward gradients with error capture.
//! - [`validation`] holds the gradient and value checks used by both.
//!
//! Conventions
//! -----------
//! - Maximize `ℓ`, minimize `-ℓ`. Model gradients are gradients of `ℓ`.
//! - The outer optimization loop (solver choice, stopping rules, starting
//!   values) belongs to the caller.

pub mod adapter;
pub mod finite_diff;
pub mod traits;
pub mod types;
pub mod validation;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::adapter::ArgMinAdapter;
pub use self::traits::LogLikelihood;
pub use self::types::{Cost, Grad, Theta};

pub mod prelude {
    pub use super::adapter::ArgMinAdapter;
    pub use super::traits::LogLikelihood;
    pub use super::types::{Cost, Grad, Theta};
}

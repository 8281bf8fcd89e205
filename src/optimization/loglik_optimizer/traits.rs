//! Public trait surface for log-likelihood objectives.
//!
//! - [`LogLikelihood`]: trait models implement to be handed to an optimizer.
//!
//! Convention: a caller *maximizes* a log-likelihood `ℓ(θ)` by minimizing the
//! cost `c(θ) = -ℓ(θ)`. If an analytic gradient is provided, it should be the
//! gradient of the log-likelihood (`∇ℓ(θ)`); the adapter flips the sign as
//! needed.
use crate::optimization::{
    errors::{OptError, OptResult},
    loglik_optimizer::{Cost, Grad, Theta},
};

/// Model-implemented log-likelihood interface.
///
/// - `type Data`: per-model data carried into `value`/`grad`/`check`.
///
/// Required:
/// - `value(&Theta, &Data) -> OptResult<Cost>`: evaluate `ℓ(θ)`.
///   - Errors: return a descriptive `OptError` for invalid inputs or model failures.
/// - `check(&Theta, &Data) -> OptResult<()>`: validation hook to reject
///   obviously invalid `θ`/`data` pairs before the first evaluation.
///
/// Optional:
/// - `grad(&Theta, &Data) -> OptResult<Grad>`: analytic gradient `∇ℓ(θ)`.
///   If not implemented, finite differences are used automatically.
pub trait LogLikelihood {
    type Data: 'static;

    // Required methods
    fn value(&self, theta: &Theta, data: &Self::Data) -> OptResult<Cost>;
    fn check(&self, theta: &Theta, data: &Self::Data) -> OptResult<()>;

    // Optional methods
    fn grad(&self, _theta: &Theta, _data: &Self::Data) -> OptResult<Grad> {
        Err(OptError::GradientNotImplemented)
    }
}

//! loglik_optimizer::finite_diff — finite-difference gradients with error
//! capture.
//!
//! Purpose
//! -------
//! Provide finite-difference gradient approximations around a parameter
//! vector, together with validation, so the adapter can serve gradients for
//! objectives that have no analytic derivative (the GGompertz/NBD likelihood
//! depends on its parameters through a numerical integral).
//!
//! Key behaviors
//! -------------
//! - [`fd_gradient`] tries central differences first and falls back to
//!   forward differences when the objective failed during the central pass or
//!   when the central gradient fails validation.
//! - [`run_fd_diff`] performs the forward-difference pass with error capture
//!   and post-hoc validation.
//!
//! Invariants & assumptions
//! ------------------------
//! - The objective closure cannot return `Result`; any error it raises is
//!   routed into the shared `closure_err` cell and the closure returns `NaN`.
//!   A captured error is treated as a hard failure of that pass.
//! - Gradients returned from this module satisfy [`validate_grad`].
//!
//! Conventions
//! -----------
//! - Domain errors are surfaced as [`OptError`](crate::optimization::errors::OptError)
//!   via `OptResult<T>`; argmin's [`Error`] is confined to the capture cell.
use crate::optimization::{
    errors::OptResult,
    loglik_optimizer::{Grad, Theta, validation::validate_grad},
};
use argmin::core::Error;
use finitediff::FiniteDiff;
use std::cell::RefCell;

/// fd_gradient — central-then-forward finite-difference gradient.
///
/// Parameters
/// ----------
/// - `theta`: point at which the gradient is approximated.
/// - `func`: objective; must write errors into `closure_err` and return
///   `NaN` in that case.
/// - `closure_err`: capture cell shared with `func`.
///
/// Returns
/// -------
/// `OptResult<Grad>`
///   The central-difference gradient if it evaluated cleanly and is valid,
///   otherwise the result of [`run_fd_diff`].
pub fn fd_gradient<G: Fn(&Theta) -> f64>(
    theta: &Theta, func: &G, closure_err: &RefCell<Option<Error>>,
) -> OptResult<Grad> {
    closure_err.replace(None);
    let central = theta.central_diff(func);
    if closure_err.borrow().is_none() && validate_grad(&central, theta.len()).is_ok() {
        return Ok(central);
    }
    run_fd_diff(theta, func, closure_err)
}

/// run_fd_diff — forward-difference gradient with error capture and validation.
///
/// Purpose
/// -------
/// Compute a forward-difference approximation to the gradient of a scalar
/// objective at `theta`, while capturing any error raised inside the
/// evaluation closure and enforcing basic shape/finiteness invariants on
/// the resulting gradient.
///
/// Returns
/// -------
/// `OptResult<Grad>`
///   - `Ok(grad)` when finite differencing succeeds, no error was
///     captured in `closure_err`, and the resulting gradient passes
///     [`validate_grad`].
///   - `Err(e)` when either `func` signaled an error via `closure_err`
///     or the gradient fails validation.
///
/// Examples
/// --------
/// ```rust
/// # use std::cell::RefCell;
/// # use argmin::core::Error;
/// # use ndarray::Array1;
/// # use rust_clv::optimization::loglik_optimizer::Theta;
/// # use rust_clv::optimization::loglik_optimizer::finite_diff::run_fd_diff;
/// let theta: Theta = Array1::from(vec![0.0_f64, 1.0]);
/// let closure_err: RefCell<Option<Error>> = RefCell::new(None);
///
/// let f = |x: &Theta| x.dot(x);
///
/// let grad = run_fd_diff(&theta, &f, &closure_err).unwrap();
/// assert_eq!(grad.len(), theta.len());
/// ```
pub fn run_fd_diff<G: Fn(&Theta) -> f64>(
    theta: &Theta, func: &G, closure_err: &RefCell<Option<Error>>,
) -> OptResult<Grad> {
    closure_err.replace(None);
    let fd_grad = theta.forward_diff(func);
    let dim = theta.len();
    if let Some(err) = closure_err.take() {
        return Err(err.into());
    }
    validate_grad(&fd_grad, dim)?;
    Ok(fd_grad)
}

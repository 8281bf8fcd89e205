//! GGompertz/NBD options — quadrature tolerances and evaluation switches.
//!
//! Purpose
//! -------
//! Collect the configuration knobs of a likelihood evaluation in one place:
//! the adaptive-quadrature tolerances and subinterval cap
//! ([`QuadratureOptions`]) and the evaluation-level switches
//! ([`GGomNBDOptions`]).
//!
//! Key behaviors
//! -------------
//! - [`QuadratureOptions::new`] validates its inputs; `Default` yields
//!   `epsabs = epsrel = 1e-8`, `limit = 1000`.
//! - [`GGomNBDOptions::default`] uses default quadrature and runs the
//!   per-customer integrals in parallel.
//!
//! Invariants & assumptions
//! ------------------------
//! - Tolerances are finite and `>= 0`, and not both zero.
//! - `limit >= 1`.
//!
//! Testing notes
//! -------------
//! - Unit tests check the defaults and each rejection branch of
//!   [`QuadratureOptions::new`].
use crate::ggomnbd::errors::{GGomNBDError, GGomNBDResult};

/// Default absolute tolerance for the per-customer integral.
pub const DEFAULT_EPSABS: f64 = 1e-8;
/// Default relative tolerance for the per-customer integral.
pub const DEFAULT_EPSREL: f64 = 1e-8;
/// Default maximum number of subintervals.
pub const DEFAULT_LIMIT: usize = 1000;

/// `QuadratureOptions` — accuracy targets for adaptive Gauss–Kronrod
/// integration.
///
/// Fields
/// ------
/// - `epsabs`: absolute error target.
/// - `epsrel`: relative error target.
/// - `limit`: maximum number of subintervals kept by the bisection.
///
/// Invariants
/// ----------
/// - See [`QuadratureOptions::new`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadratureOptions {
    pub epsabs: f64,
    pub epsrel: f64,
    pub limit: usize,
}

impl QuadratureOptions {
    /// Construct validated quadrature options.
    ///
    /// Errors
    /// ------
    /// - `GGomNBDError::InvalidQuadratureTol` if a tolerance is negative or
    ///   non-finite, or both are zero.
    /// - `GGomNBDError::InvalidSubintervalLimit` if `limit == 0`.
    pub fn new(epsabs: f64, epsrel: f64, limit: usize) -> GGomNBDResult<Self> {
        for tol in [epsabs, epsrel] {
            if !tol.is_finite() {
                return Err(GGomNBDError::InvalidQuadratureTol { tol, reason: "must be finite" });
            }
            if tol < 0.0 {
                return Err(GGomNBDError::InvalidQuadratureTol { tol, reason: "must be >= 0" });
            }
        }
        if epsabs == 0.0 && epsrel == 0.0 {
            return Err(GGomNBDError::InvalidQuadratureTol {
                tol: 0.0,
                reason: "epsabs and epsrel cannot both be zero",
            });
        }
        if limit == 0 {
            return Err(GGomNBDError::InvalidSubintervalLimit { limit, reason: "must be >= 1" });
        }
        Ok(QuadratureOptions { epsabs, epsrel, limit })
    }
}

impl Default for QuadratureOptions {
    fn default() -> Self {
        QuadratureOptions { epsabs: DEFAULT_EPSABS, epsrel: DEFAULT_EPSREL, limit: DEFAULT_LIMIT }
    }
}

/// `GGomNBDOptions` — evaluation-time configuration.
///
/// Fields
/// ------
/// - `quadrature`: [`QuadratureOptions`] used for every customer.
/// - `parallel`: run per-customer integrals on the rayon pool. Results are
///   identical either way; only wall time changes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GGomNBDOptions {
    pub quadrature: QuadratureOptions,
    pub parallel: bool,
}

impl GGomNBDOptions {
    pub fn new(quadrature: QuadratureOptions, parallel: bool) -> Self {
        GGomNBDOptions { quadrature, parallel }
    }
}

impl Default for GGomNBDOptions {
    fn default() -> Self {
        GGomNBDOptions { quadrature: QuadratureOptions::default(), parallel: true }
    }
}

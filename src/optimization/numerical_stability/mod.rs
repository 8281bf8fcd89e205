//! numerical_stability — numerically robust log-space combinations.
//!
//! Purpose
//! -------
//! Collect the small, stable numeric primitives shared by the likelihood
//! layer: combining log-scale terms without exponentiating them.
//!
//! Key behaviors
//! -------------
//! - [`log_add_exp`] combines two log-terms, e.g. the "alive at the end of
//!   the window" and "died after the last purchase" contributions of one
//!   customer.
//! - [`ln_add_expm1`] evaluates `ln(c + exp(z) - 1)` without forming
//!   `exp(z)` for large `z`.
//!
//! Conventions
//! -----------
//! - This module never logs, performs I/O, or touches global state.
//! - NaN inputs propagate; infinities follow IEEE semantics as documented on
//!   each function.

pub mod transformations;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::transformations::{log_add_exp, ln_add_expm1};

pub mod prelude {
    pub use super::transformations::{log_add_exp, ln_add_expm1};
}

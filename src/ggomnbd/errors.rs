//! Errors for the GGompertz/NBD log-likelihood (data validation, parameter
//! layout and positivity checks, quadrature configuration).
//!
//! This module defines the model error type, [`GGomNBDError`], and its result
//! alias [`GGomNBDResult`]. Every variant describes an invalid argument that
//! is detected *before* any numeric work starts; numerical trouble during an
//! evaluation (non-convergent quadrature, possibly divergent integrals) is
//! reported as a [`DiagnosticWarning`](crate::ggomnbd::core::diagnostics::DiagnosticWarning)
//! instead and never aborts the computation.
//!
//! ## Conventions
//! - **Indices are 0-based** and refer to customer positions (rows).
//! - `name` fields carry the caller-facing argument name (`"x"`, `"t_x"`,
//!   `"t_cal"`, `"cov_life"`, `"cov_trans"`, `"alpha_i"`, ...).
//! - Parameter vectors are positional: `[r, alpha_0, b, s, beta_0]` on log
//!   scale, optionally followed by `theta_life` and `theta_trans`.

/// Crate-wide result alias for GGompertz/NBD operations that may produce
/// [`GGomNBDError`].
pub type GGomNBDResult<T> = Result<T, GGomNBDError>;

/// Invalid-argument error for GGompertz/NBD likelihood evaluation.
///
/// Covers customer-data validation, covariate shape checks, parameter-vector
/// layout, decoded-parameter positivity, and quadrature options.
#[derive(Debug, Clone, PartialEq)]
pub enum GGomNBDError {
    // ---- Customer data ----
    /// No customers were supplied.
    EmptyData,

    /// A per-customer vector does not have the same length as `x`.
    LengthMismatch { name: &'static str, expected: usize, actual: usize },

    /// A per-customer value is NaN/±inf.
    NonFiniteData { name: &'static str, index: usize, value: f64 },

    /// Repeat-transaction count is negative.
    NegativeCount { index: usize, value: f64 },

    /// Time of last transaction is outside `[0, t_cal]`.
    InvalidTimeWindow { index: usize, t_x: f64, t_cal: f64 },

    // ---- Covariates ----
    /// Covariate matrix row count differs from the number of customers.
    CovariateRowMismatch { name: &'static str, expected: usize, actual: usize },

    /// A covariate entry is NaN/±inf.
    NonFiniteCovariate { name: &'static str, row: usize, col: usize, value: f64 },

    // ---- Parameters ----
    /// Parameter vector length does not match the model layout.
    ParamLengthMismatch { expected: usize, actual: usize },

    /// A raw parameter entry is NaN/±inf.
    NonFiniteParam { index: usize, value: f64 },

    /// A decoded model parameter is not finite and > 0.
    NonPositiveParam { name: &'static str, value: f64 },

    /// A per-customer scale parameter is not finite and > 0.
    NonPositiveScale { name: &'static str, index: usize, value: f64 },

    // ---- Quadrature options ----
    /// Quadrature tolerance is negative or non-finite, or both are zero.
    InvalidQuadratureTol { tol: f64, reason: &'static str },

    /// Subinterval cap must be at least one.
    InvalidSubintervalLimit { limit: usize, reason: &'static str },
}

impl std::error::Error for GGomNBDError {}

impl std::fmt::Display for GGomNBDError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // ---- Customer data ----
            GGomNBDError::EmptyData => {
                write!(f, "Customer data is empty.")
            }
            GGomNBDError::LengthMismatch { name, expected, actual } => {
                write!(f, "Length of {name} must match x: expected {expected}, got {actual}")
            }
            GGomNBDError::NonFiniteData { name, index, value } => {
                write!(f, "{name} at index {index} is non-finite: {value}")
            }
            GGomNBDError::NegativeCount { index, value } => {
                write!(f, "Transaction count x at index {index} must be >= 0; got: {value}")
            }
            GGomNBDError::InvalidTimeWindow { index, t_x, t_cal } => {
                write!(
                    f,
                    "Customer {index} must satisfy 0 <= t_x <= t_cal; got t_x = {t_x}, t_cal = {t_cal}"
                )
            }
            // ---- Covariates ----
            GGomNBDError::CovariateRowMismatch { name, expected, actual } => {
                write!(
                    f,
                    "Covariate matrix {name} must have one row per customer: expected {expected}, got {actual}"
                )
            }
            GGomNBDError::NonFiniteCovariate { name, row, col, value } => {
                write!(f, "Covariate {name}[{row}, {col}] is non-finite: {value}")
            }
            // ---- Parameters ----
            GGomNBDError::ParamLengthMismatch { expected, actual } => {
                write!(f, "Parameter vector length mismatch: expected {expected}, got {actual}")
            }
            GGomNBDError::NonFiniteParam { index, value } => {
                write!(f, "Parameter at index {index} must be finite; got: {value}")
            }
            GGomNBDError::NonPositiveParam { name, value } => {
                write!(f, "Model parameter {name} must be finite and > 0; got: {value}")
            }
            GGomNBDError::NonPositiveScale { name, index, value } => {
                write!(f, "Scale parameter {name} at index {index} must be finite and > 0; got: {value}")
            }
            // ---- Quadrature options ----
            GGomNBDError::InvalidQuadratureTol { tol, reason } => {
                write!(f, "Invalid quadrature tolerance {tol}: {reason}")
            }
            GGomNBDError::InvalidSubintervalLimit { limit, reason } => {
                write!(f, "Invalid subinterval limit {limit}: {reason}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - `Display` output for representative variants (names, indices and
    //   offending values end up in the message).
    //
    // These tests intentionally DO NOT cover:
    // - Which constructor raises which variant (see the data/params modules).
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Ensure shape errors name the offending argument and both lengths.
    //
    // Given
    // -----
    // - `CovariateRowMismatch { name: "cov_life", expected: 3, actual: 2 }`.
    //
    // Expect
    // ------
    // - The message mentions `cov_life`, `3` and `2`.
    fn display_reports_covariate_row_mismatch() {
        let err = GGomNBDError::CovariateRowMismatch { name: "cov_life", expected: 3, actual: 2 };

        let msg = err.to_string();

        assert!(msg.contains("cov_life"));
        assert!(msg.contains("expected 3"));
        assert!(msg.contains("got 2"));
    }

    #[test]
    // Purpose
    // -------
    // Ensure window errors carry both time stamps of the offending customer.
    //
    // Given
    // -----
    // - `InvalidTimeWindow { index: 4, t_x: 12.0, t_cal: 10.0 }`.
    //
    // Expect
    // ------
    // - The message mentions the index and both values.
    fn display_reports_invalid_time_window() {
        let err = GGomNBDError::InvalidTimeWindow { index: 4, t_x: 12.0, t_cal: 10.0 };

        let msg = err.to_string();

        assert!(msg.contains("Customer 4"));
        assert!(msg.contains("t_x = 12"));
        assert!(msg.contains("t_cal = 10"));
    }
}

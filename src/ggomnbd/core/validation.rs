//! GGompertz/NBD validation helpers — reusable checks for parameter layout and
//! positivity.
//!
//! Purpose
//! -------
//! Centralize the small checks used by the parameter transform so both model
//! variants fail fast with the same structured errors before any quadrature
//! is attempted.
//!
//! Key behaviors
//! -------------
//! - Validate the positional parameter-vector length against the covariate
//!   column counts.
//! - Validate raw parameter entries for finiteness.
//! - Validate decoded scalars and per-customer scale vectors for strict
//!   positivity and finiteness.
//!
//! Conventions
//! -----------
//! - Functions return [`GGomNBDResult`] and never panic on invalid inputs.
//! - This module performs no logging; it only inspects numbers and lengths.
use crate::ggomnbd::errors::{GGomNBDError, GGomNBDResult};
use ndarray::ArrayView1;

/// Check that a parameter vector has exactly `expected` entries.
///
/// Errors
/// ------
/// - `GGomNBDError::ParamLengthMismatch { expected, actual }`.
pub fn validate_param_len(params: ArrayView1<'_, f64>, expected: usize) -> GGomNBDResult<()> {
    if params.len() != expected {
        return Err(GGomNBDError::ParamLengthMismatch { expected, actual: params.len() });
    }
    Ok(())
}

/// Check that every raw parameter entry is finite.
///
/// Errors
/// ------
/// - `GGomNBDError::NonFiniteParam { index, value }` for the first NaN/±inf.
pub fn validate_finite_params(params: ArrayView1<'_, f64>) -> GGomNBDResult<()> {
    match params.iter().position(|v| !v.is_finite()) {
        Some(index) => Err(GGomNBDError::NonFiniteParam { index, value: params[index] }),
        None => Ok(()),
    }
}

/// Check that a decoded model parameter is finite and strictly positive.
///
/// `exp` of a finite log-parameter can still overflow to `+inf` or underflow
/// to `0`; both are rejected here.
///
/// Errors
/// ------
/// - `GGomNBDError::NonPositiveParam { name, value }`.
pub fn validate_positive_param(name: &'static str, value: f64) -> GGomNBDResult<f64> {
    if !(value.is_finite() && value > 0.0) {
        return Err(GGomNBDError::NonPositiveParam { name, value });
    }
    Ok(value)
}

/// Check that every per-customer scale is finite and strictly positive.
///
/// Errors
/// ------
/// - `GGomNBDError::NonPositiveScale { name, index, value }` for the first
///   offending customer.
pub fn validate_positive_scales(
    name: &'static str, scales: ArrayView1<'_, f64>,
) -> GGomNBDResult<()> {
    match scales.iter().position(|&v| !(v.is_finite() && v > 0.0)) {
        Some(index) => Err(GGomNBDError::NonPositiveScale { name, index, value: scales[index] }),
        None => Ok(()),
    }
}

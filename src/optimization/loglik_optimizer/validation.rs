//! Validation helpers for the optimizer seam.
//!
//! - **Gradient validation**: [`validate_grad`] enforces correct dimension
//!   and finite entries.
//! - **Objective values**: [`validate_value`] checks log-likelihood outputs
//!   for finiteness.
//!
//! Both return domain-specific [`OptError`] variants so adapter code reports
//! failures uniformly.
use crate::optimization::{
    errors::{OptError, OptResult},
    loglik_optimizer::Grad,
};

/// Validate a gradient vector against dimension and finiteness.
///
/// Checks:
/// - `grad.len() == dim`
/// - every element is finite (`NaN` or `±∞` are rejected)
///
/// # Errors
/// - [`OptError::GradientDimMismatch`] if length does not match `dim`.
/// - [`OptError::InvalidGradient`] with the index/value/reason of the first
///   offending element.
pub fn validate_grad(grad: &Grad, dim: usize) -> OptResult<()> {
    if grad.len() != dim {
        return Err(OptError::GradientDimMismatch { expected: dim, found: grad.len() });
    }
    for (index, &value) in grad.iter().enumerate() {
        if !value.is_finite() {
            return Err(OptError::InvalidGradient {
                index,
                value,
                reason: "Gradient elements must be finite.",
            });
        }
    }
    Ok(())
}

/// Validate that a scalar log-likelihood value is finite.
///
/// Negative values are fine as long as they are finite.
///
/// # Errors
/// Returns [`OptError::NonFiniteCost`] if the value is `NaN` or infinite.
pub fn validate_value(value: f64) -> OptResult<()> {
    if !value.is_finite() {
        return Err(OptError::NonFiniteCost { value });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    // Purpose
    // -------
    // Dimension is checked before finiteness.
    //
    // Given
    // -----
    // - A length-2 gradient containing NaN, validated against `dim = 3`.
    //
    // Expect
    // ------
    // - `GradientDimMismatch { expected: 3, found: 2 }`.
    fn validate_grad_checks_dimension_first() {
        let g = array![f64::NAN, 1.0];

        assert_eq!(
            validate_grad(&g, 3).unwrap_err(),
            OptError::GradientDimMismatch { expected: 3, found: 2 }
        );
    }

    #[test]
    // Purpose
    // -------
    // The first non-finite entry is reported.
    //
    // Given
    // -----
    // - `[0.5, inf, NaN]` with the correct dimension.
    //
    // Expect
    // ------
    // - `InvalidGradient { index: 1, value: inf, .. }`.
    fn validate_grad_reports_first_non_finite_entry() {
        let g = array![0.5, f64::INFINITY, f64::NAN];

        assert!(matches!(
            validate_grad(&g, 3).unwrap_err(),
            OptError::InvalidGradient { index: 1, value, .. } if value == f64::INFINITY
        ));
    }

    #[test]
    // Purpose
    // -------
    // Finite values (including large negative log-likelihoods) pass.
    //
    // Given
    // -----
    // - `-1e6` and NaN.
    //
    // Expect
    // ------
    // - `Ok` and `NonFiniteCost` respectively.
    fn validate_value_accepts_finite_only() {
        assert!(validate_value(-1e6).is_ok());
        assert!(matches!(validate_value(f64::NAN), Err(OptError::NonFiniteCost { .. })));
    }
}

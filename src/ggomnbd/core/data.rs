//! Customer summary containers for GGompertz/NBD likelihood evaluation.
//!
//! Purpose
//! -------
//! Provide a small, validated container for the per-customer repeat-purchase
//! summary `(x, t_x, t_cal)` consumed by the likelihood. This module
//! centralizes input validation for customer data so the kernel, quadrature,
//! and evaluator can assume clean, consistent vectors.
//!
//! Key behaviors
//! -------------
//! - [`CustomerData`] enforces the data invariants (non-empty, equal lengths,
//!   finite values, non-negative counts, `0 <= t_x <= t_cal`) at construction.
//! - Batch extrema used by the divergence heuristic are exposed as cheap
//!   accessors so callers do not need to rescan the vectors.
//!
//! Invariants & assumptions
//! ------------------------
//! - `x`, `t_x`, and `t_cal` have the same length `n >= 1`.
//! - All entries are finite; `x_i >= 0` and `0 <= t_x_i <= t_cal_i`.
//! - `x` may hold non-integer counts (e.g. weighted or averaged histories);
//!   only non-negativity is required.
//!
//! Conventions
//! -----------
//! - Indexing is 0-based; position `i` in every vector refers to customer `i`.
//! - Time units are whatever the upstream data-preparation layer used; the
//!   likelihood is invariant to the unit as long as `t_x` and `t_cal` agree.
//!
//! Downstream usage
//! ----------------
//! - Construct [`CustomerData`] once per dataset and pass it by reference to
//!   every evaluation; it is never mutated by the likelihood.
//!
//! Testing notes
//! -------------
//! - Unit tests cover the happy path and each rejection branch of
//!   [`CustomerData::new`].
use crate::ggomnbd::errors::{GGomNBDError, GGomNBDResult};
use ndarray::Array1;

/// `CustomerData` — validated repeat-purchase summaries for `n` customers.
///
/// Purpose
/// -------
/// Represent the `(x, t_x, t_cal)` summary of a customer cohort, checked once
/// at the boundary so the numerical layers can rely on its invariants.
///
/// Fields
/// ------
/// - `x`: `Array1<f64>`
///   Number of repeat transactions per customer; finite and `>= 0`.
/// - `t_x`: `Array1<f64>`
///   Time of the last transaction; finite and in `[0, t_cal_i]`.
/// - `t_cal`: `Array1<f64>`
///   Length of the calibration window; finite and `>= t_x_i`.
///
/// Invariants
/// ----------
/// - `x.len() == t_x.len() == t_cal.len() > 0`.
/// - All entries are finite, `x_i >= 0`, `0 <= t_x_i <= t_cal_i`.
///
/// Performance
/// -----------
/// - Validation is a single O(n) scan; the container itself does not
///   allocate beyond the owned vectors.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomerData {
    /// Repeat-transaction counts.
    pub x: Array1<f64>,
    /// Time of the last transaction.
    pub t_x: Array1<f64>,
    /// Calibration window lengths.
    pub t_cal: Array1<f64>,
}

impl CustomerData {
    /// Construct a validated [`CustomerData`] from the three summary vectors.
    ///
    /// Parameters
    /// ----------
    /// - `x`: `Array1<f64>`
    ///   Repeat-transaction counts; defines `n`.
    /// - `t_x`: `Array1<f64>`
    ///   Times of the last transaction; length `n`.
    /// - `t_cal`: `Array1<f64>`
    ///   Calibration window lengths; length `n`.
    ///
    /// Returns
    /// -------
    /// `GGomNBDResult<CustomerData>`
    ///   - `Ok(CustomerData)` if all invariants hold.
    ///   - `Err(GGomNBDError)` describing the first violation otherwise.
    ///
    /// Errors
    /// ------
    /// - `GGomNBDError::EmptyData`
    ///   Returned when `x` is empty.
    /// - `GGomNBDError::LengthMismatch { name, .. }`
    ///   Returned when `t_x` or `t_cal` differ in length from `x`.
    /// - `GGomNBDError::NonFiniteData { name, index, value }`
    ///   Returned for the first NaN/±inf entry (checked per customer in the
    ///   order `x`, `t_x`, `t_cal`).
    /// - `GGomNBDError::NegativeCount { index, value }`
    ///   Returned when `x_i < 0`.
    /// - `GGomNBDError::InvalidTimeWindow { index, t_x, t_cal }`
    ///   Returned when `t_x_i < 0` or `t_x_i > t_cal_i`.
    ///
    /// Panics
    /// ------
    /// - Never panics.
    ///
    /// Examples
    /// --------
    /// ```rust
    /// # use ndarray::array;
    /// # use rust_clv::ggomnbd::core::data::CustomerData;
    /// let data = CustomerData::new(array![0.0, 3.0], array![0.0, 7.5], array![10.0, 10.0]).unwrap();
    /// assert_eq!(data.len(), 2);
    /// ```
    pub fn new(x: Array1<f64>, t_x: Array1<f64>, t_cal: Array1<f64>) -> GGomNBDResult<Self> {
        let n = x.len();
        if n == 0 {
            return Err(GGomNBDError::EmptyData);
        }
        if t_x.len() != n {
            return Err(GGomNBDError::LengthMismatch { name: "t_x", expected: n, actual: t_x.len() });
        }
        if t_cal.len() != n {
            return Err(GGomNBDError::LengthMismatch {
                name: "t_cal",
                expected: n,
                actual: t_cal.len(),
            });
        }

        for index in 0..n {
            let (xi, txi, tci) = (x[index], t_x[index], t_cal[index]);
            for (name, value) in [("x", xi), ("t_x", txi), ("t_cal", tci)] {
                if !value.is_finite() {
                    return Err(GGomNBDError::NonFiniteData { name, index, value });
                }
            }
            if xi < 0.0 {
                return Err(GGomNBDError::NegativeCount { index, value: xi });
            }
            if txi < 0.0 || txi > tci {
                return Err(GGomNBDError::InvalidTimeWindow { index, t_x: txi, t_cal: tci });
            }
        }

        Ok(CustomerData { x, t_x, t_cal })
    }

    /// Number of customers `n`.
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Always `false` for a constructed value; provided for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Largest repeat-transaction count in the batch.
    pub fn max_x(&self) -> f64 {
        self.x.fold(f64::NEG_INFINITY, |acc, &v| acc.max(v))
    }

    /// `(min, max)` of the last-transaction times in the batch.
    pub fn t_x_range(&self) -> (f64, f64) {
        self.t_x
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)))
    }
}

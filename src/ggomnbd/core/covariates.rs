//! Static covariate matrices for the GGompertz/NBD model.
//!
//! Purpose
//! -------
//! Hold the time-invariant covariates that shift each customer's lifetime
//! scale (`beta_i`) and transaction scale (`alpha_i`), and pair them with a
//! [`CustomerData`] cohort after checking that both matrices carry exactly one
//! row per customer.
//!
//! Key behaviors
//! -------------
//! - [`Covariates::new`] rejects non-finite entries.
//! - [`StaticCovData::new`] rejects row counts that differ from the number of
//!   customers; matrices are never truncated or padded.
//!
//! Invariants & assumptions
//! ------------------------
//! - `life` has shape `(n, k_life)` and `trans` has shape `(n, k_trans)`;
//!   zero columns are allowed (the corresponding scale stays at its base
//!   value).
//! - Business meaning of the covariates (scaling, dummy coding) is the
//!   caller's concern.
use crate::ggomnbd::{
    core::data::CustomerData,
    errors::{GGomNBDError, GGomNBDResult},
};
use ndarray::Array2;

/// `Covariates` — lifetime and transaction covariate matrices.
///
/// Fields
/// ------
/// - `life`: `Array2<f64>`
///   Lifetime covariates, one row per customer, `k_life` columns.
/// - `trans`: `Array2<f64>`
///   Transaction covariates, one row per customer, `k_trans` columns.
///
/// Invariants
/// ----------
/// - All entries are finite.
#[derive(Debug, Clone, PartialEq)]
pub struct Covariates {
    pub life: Array2<f64>,
    pub trans: Array2<f64>,
}

impl Covariates {
    /// Construct covariates after checking every entry is finite.
    ///
    /// Errors
    /// ------
    /// - `GGomNBDError::NonFiniteCovariate { name, row, col, value }` for the
    ///   first NaN/±inf entry, scanning `life` before `trans`.
    pub fn new(life: Array2<f64>, trans: Array2<f64>) -> GGomNBDResult<Self> {
        for (name, mat) in [("cov_life", &life), ("cov_trans", &trans)] {
            if let Some(((row, col), &value)) = mat.indexed_iter().find(|(_, v)| !v.is_finite()) {
                return Err(GGomNBDError::NonFiniteCovariate { name, row, col, value });
            }
        }
        Ok(Covariates { life, trans })
    }

    /// Number of lifetime covariate columns (`k_life`).
    pub fn k_life(&self) -> usize {
        self.life.ncols()
    }

    /// Number of transaction covariate columns (`k_trans`).
    pub fn k_trans(&self) -> usize {
        self.trans.ncols()
    }

    /// Check both matrices have exactly `n` rows.
    ///
    /// Errors
    /// ------
    /// - `GGomNBDError::CovariateRowMismatch { name, expected: n, actual }`.
    pub fn check_rows(&self, n: usize) -> GGomNBDResult<()> {
        for (name, rows) in [("cov_life", self.life.nrows()), ("cov_trans", self.trans.nrows())] {
            if rows != n {
                return Err(GGomNBDError::CovariateRowMismatch { name, expected: n, actual: rows });
            }
        }
        Ok(())
    }
}

/// `StaticCovData` — a customer cohort together with its static covariates.
///
/// Invariants
/// ----------
/// - `covariates.life.nrows() == covariates.trans.nrows() == customers.len()`.
#[derive(Debug, Clone, PartialEq)]
pub struct StaticCovData {
    pub customers: CustomerData,
    pub covariates: Covariates,
}

impl StaticCovData {
    /// Pair a cohort with its covariates, rejecting row-count mismatches.
    ///
    /// Errors
    /// ------
    /// - `GGomNBDError::CovariateRowMismatch` if either matrix does not have
    ///   one row per customer.
    pub fn new(customers: CustomerData, covariates: Covariates) -> GGomNBDResult<Self> {
        covariates.check_rows(customers.len())?;
        Ok(StaticCovData { customers, covariates })
    }
}

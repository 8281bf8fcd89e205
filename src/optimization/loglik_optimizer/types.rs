//! Shared type aliases for the optimizer seam.
//!
//! Parameter vectors, gradients and costs are plain `ndarray`/`f64` values so
//! they plug directly into `argmin`'s `CostFunction`/`Gradient` traits and
//! `finitediff`'s `FiniteDiff` extension methods.
use ndarray::Array1;

/// Optimizer parameter vector.
pub type Theta = Array1<f64>;

/// Gradient with respect to [`Theta`].
pub type Grad = Array1<f64>;

/// Scalar objective value.
pub type Cost = f64;

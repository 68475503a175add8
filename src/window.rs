//! Soft-bin windows over the cutoff interval `[0, limit)`.
//!
//! A distance `x` is expanded into `num` non-negative weights, one per
//! equally sized bin of `[0, limit)`. Weights vanish once `x >= limit`.
//!
//! - [`rectangular_window`]: one-hot at the bin containing `x`.
//! - [`triangular_window`]: linear hand-off between neighbouring bins.
//! - [`smooth_window`]: infinitely differentiable hand-off between
//!   neighbouring bins.
//!
//! All three accept an array of any shape and append a trailing axis of
//! length `num`.
//!
//! # Examples
//! ```
//! use ndarray::arr1;
//! use radial_window::window::triangular_window;
//!
//! let x = arr1(&[0.0, 0.2, 2.0]);
//! let weights = triangular_window(&x, 8, 1.5).unwrap();
//!
//! assert_eq!(weights.shape(), &[3, 8]);
//! assert_eq!(weights[[0, 0]], 1.0);
//! assert!(weights.row(2).iter().all(|&w| w == 0.0));
//! ```

mod batch;
mod kind;
pub mod position;
pub mod primitives;
mod spec;

pub use batch::PARALLEL_THRESHOLD;
pub use kind::WindowKind;
pub use position::{bin_position, BinPosition};
pub use primitives::{smooth_step, smooth_step_derivative};
pub use spec::WindowSpec;

use ndarray::{Array, Array2, ArrayBase, Data, Dimension};

use crate::error::Result;
use batch::RowOutput;

/// One-hot encoding of the bin containing each distance.
///
/// Distances below zero or at/after `limit` give all-zero rows.
///
/// # Errors
/// [`WindowError::InvalidChannelCount`](crate::WindowError::InvalidChannelCount)
/// when `num == 0` and
/// [`WindowError::InvalidLimit`](crate::WindowError::InvalidLimit) when
/// `limit` is not positive and finite.
pub fn rectangular_window<S, D>(
    x: &ArrayBase<S, D>,
    num: usize,
    limit: f64,
) -> Result<Array<f64, D::Larger>>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    window(WindowKind::Rectangular, x, num, limit)
}

/// Piecewise-linear encoding: bin `i` gets `1 - f`, bin `i + 1` gets `f`.
///
/// Shares that would land outside `[0, num)` are dropped, so the last bin
/// decays from 1.0 to 0.5 across its width.
pub fn triangular_window<S, D>(
    x: &ArrayBase<S, D>,
    num: usize,
    limit: f64,
) -> Result<Array<f64, D::Larger>>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    window(WindowKind::Triangular, x, num, limit)
}

/// Smooth encoding: bin `i` gets `g(1 - f)`, bin `i + 1` gets `g(f)`, with
/// `g` the [`smooth_step`].
pub fn smooth_window<S, D>(
    x: &ArrayBase<S, D>,
    num: usize,
    limit: f64,
) -> Result<Array<f64, D::Larger>>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    window(WindowKind::Smooth, x, num, limit)
}

/// Evaluates the window selected by `kind`.
pub fn window<S, D>(
    kind: WindowKind,
    x: &ArrayBase<S, D>,
    num: usize,
    limit: f64,
) -> Result<Array<f64, D::Larger>>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    batch::evaluate(kind, RowOutput::Weights, x, num, limit, None)
}

/// Derivative of each weight with respect to its distance, shaped like the
/// output of [`window`].
///
/// Triangular gradients are right derivatives at bin boundaries. Rectangular
/// gradients are zero everywhere.
pub fn window_gradient<S, D>(
    kind: WindowKind,
    x: &ArrayBase<S, D>,
    num: usize,
    limit: f64,
) -> Result<Array<f64, D::Larger>>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    batch::evaluate(kind, RowOutput::Gradient, x, num, limit, None)
}

/// Weights for a single distance.
pub fn window_weights(kind: WindowKind, x: f64, num: usize, limit: f64) -> Result<Vec<f64>> {
    Ok(WindowSpec::new(kind, num, limit)?.evaluate_scalar(x))
}

/// Weights for a flat list of distances, shaped `[xs.len(), num]`.
pub fn evaluate_slice(kind: WindowKind, xs: &[f64], num: usize, limit: f64) -> Result<Array2<f64>> {
    WindowSpec::new(kind, num, limit)?.evaluate_slice(xs)
}

/// Overwrites `row` with the weights of `kind` at `position`.
///
/// Allocation-free building block for callers that manage their own buffers;
/// `row.len()` is the channel count.
pub fn fill_weights(kind: WindowKind, position: BinPosition, row: &mut [f64]) {
    kind.fill(position, row);
}

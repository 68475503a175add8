//! Element-wise evaluation over arrays of distances.
//!
//! Each input element owns one contiguous output row of `num` weights, so rows
//! can be filled in any order. Large inputs are split across the rayon pool.

use std::borrow::Cow;

use ndarray::{Array, ArrayBase, Axis, Data, Dimension};
use rayon::prelude::*;
use tracing::debug;

use super::kind::WindowKind;
use super::position::{bin_position, position_scale, validate};
use crate::error::Result;

/// Inputs with at least this many elements are filled in parallel unless the
/// caller chooses otherwise.
pub const PARALLEL_THRESHOLD: usize = 4096;

/// What each output row holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RowOutput {
    Weights,
    Gradient,
}

/// Fills `xs.len()` rows of `num` values each, in input order.
///
/// The configuration must already be validated.
pub(crate) fn fill_rows(
    kind: WindowKind,
    output: RowOutput,
    xs: &[f64],
    num: usize,
    limit: f64,
    parallel: Option<bool>,
) -> Vec<f64> {
    let parallel = parallel.unwrap_or(xs.len() >= PARALLEL_THRESHOLD);
    let scale = position_scale(num, limit);

    debug!(
        kind = %kind,
        output = ?output,
        num = num,
        limit = limit,
        elements = xs.len(),
        parallel = parallel,
        "BatchEvaluator: filling window rows"
    );

    let mut values = vec![0.0; xs.len() * num];
    let do_row = |(row, &x): (&mut [f64], &f64)| {
        let position = bin_position(x, num, limit);
        match output {
            RowOutput::Weights => kind.fill(position, row),
            RowOutput::Gradient => kind.fill_gradient(position, scale, row),
        }
    };

    if parallel {
        values
            .par_chunks_mut(num)
            .zip(xs.par_iter())
            .for_each(do_row);
    } else {
        values.chunks_mut(num).zip(xs.iter()).for_each(do_row);
    }

    values
}

/// Evaluates `kind` on every element of `x`, appending a trailing axis of
/// length `num`.
pub(crate) fn evaluate<S, D>(
    kind: WindowKind,
    output: RowOutput,
    x: &ArrayBase<S, D>,
    num: usize,
    limit: f64,
    parallel: Option<bool>,
) -> Result<Array<f64, D::Larger>>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    validate(num, limit)?;

    // Standard-layout inputs are read in place; anything else is gathered in
    // logical order first.
    let xs: Cow<'_, [f64]> = match x.as_slice() {
        Some(slice) => Cow::Borrowed(slice),
        None => Cow::Owned(x.iter().copied().collect()),
    };

    let values = fill_rows(kind, output, &xs, num, limit, parallel);
    let mut shape = x.raw_dim().insert_axis(Axis(x.ndim()));
    shape[x.ndim()] = num;
    Ok(Array::from_shape_vec(shape, values)?)
}

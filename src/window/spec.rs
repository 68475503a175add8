//! Validated, serialisable window configuration.

use ndarray::{Array, Array2, ArrayBase, Data, Dimension};
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use super::batch::{self, RowOutput};
use super::kind::WindowKind;
use super::position::{bin_position, validate};
use crate::error::{Result, WindowError};

/// Validated window parameters: strategy, channel count and cutoff.
///
/// Hashable so it can key caches of precomputed encodings. Deserialisation
/// runs the same checks as [`WindowSpec::new`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawWindowSpec", into = "RawWindowSpec")]
pub struct WindowSpec {
    kind: WindowKind,
    num: usize,
    limit: OrderedFloat<f64>,
    parallel: Option<bool>,
}

#[derive(Serialize, Deserialize)]
struct RawWindowSpec {
    kind: WindowKind,
    num: usize,
    limit: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    parallel: Option<bool>,
}

impl TryFrom<RawWindowSpec> for WindowSpec {
    type Error = WindowError;

    fn try_from(raw: RawWindowSpec) -> Result<Self> {
        Ok(WindowSpec::new(raw.kind, raw.num, raw.limit)?.with_parallel_option(raw.parallel))
    }
}

impl From<WindowSpec> for RawWindowSpec {
    fn from(spec: WindowSpec) -> Self {
        RawWindowSpec {
            kind: spec.kind,
            num: spec.num,
            limit: spec.limit.into_inner(),
            parallel: spec.parallel,
        }
    }
}

impl WindowSpec {
    pub fn new(kind: WindowKind, num: usize, limit: f64) -> Result<Self> {
        validate(num, limit)?;
        Ok(WindowSpec {
            kind,
            num,
            limit: OrderedFloat(limit),
            parallel: None,
        })
    }

    pub fn rectangular(num: usize, limit: f64) -> Result<Self> {
        Self::new(WindowKind::Rectangular, num, limit)
    }

    pub fn triangular(num: usize, limit: f64) -> Result<Self> {
        Self::new(WindowKind::Triangular, num, limit)
    }

    pub fn smooth(num: usize, limit: f64) -> Result<Self> {
        Self::new(WindowKind::Smooth, num, limit)
    }

    /// Forces parallel (`true`) or sequential (`false`) batch fills.
    pub fn with_parallel(self, parallel: bool) -> Self {
        self.with_parallel_option(Some(parallel))
    }

    fn with_parallel_option(mut self, parallel: Option<bool>) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn kind(&self) -> WindowKind {
        self.kind
    }

    pub fn num(&self) -> usize {
        self.num
    }

    pub fn limit(&self) -> f64 {
        self.limit.into_inner()
    }

    /// Width of a single bin, `limit / num`.
    pub fn width(&self) -> f64 {
        self.limit() / self.num as f64
    }

    /// Weights for a single distance.
    pub fn evaluate_scalar(&self, x: f64) -> Vec<f64> {
        let mut row = vec![0.0; self.num];
        self.fill(x, &mut row);
        row
    }

    /// Overwrites `row` (of length `num`) with the weights for `x`.
    pub fn fill(&self, x: f64, row: &mut [f64]) {
        debug_assert_eq!(row.len(), self.num);
        self.kind.fill(bin_position(x, self.num, self.limit()), row);
    }

    /// Weights for every element of `x`, with a trailing axis of length `num`.
    pub fn evaluate<S, D>(&self, x: &ArrayBase<S, D>) -> Result<Array<f64, D::Larger>>
    where
        S: Data<Elem = f64>,
        D: Dimension,
    {
        batch::evaluate(
            self.kind,
            RowOutput::Weights,
            x,
            self.num,
            self.limit(),
            self.parallel,
        )
    }

    /// Weights for a flat list of distances, shaped `[xs.len(), num]`.
    pub fn evaluate_slice(&self, xs: &[f64]) -> Result<Array2<f64>> {
        let values = batch::fill_rows(
            self.kind,
            RowOutput::Weights,
            xs,
            self.num,
            self.limit(),
            self.parallel,
        );
        Ok(Array2::from_shape_vec((xs.len(), self.num), values)?)
    }

    /// Derivative of every weight with respect to its distance.
    pub fn gradient<S, D>(&self, x: &ArrayBase<S, D>) -> Result<Array<f64, D::Larger>>
    where
        S: Data<Elem = f64>,
        D: Dimension,
    {
        batch::evaluate(
            self.kind,
            RowOutput::Gradient,
            x,
            self.num,
            self.limit(),
            self.parallel,
        )
    }
}

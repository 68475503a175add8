//! Error types for window configuration and evaluation.

/// Errors raised before any window arithmetic runs.
///
/// Out-of-range and non-finite distances are not errors; they produce zero
/// rows. Only an unusable configuration is rejected.
#[derive(Debug, thiserror::Error)]
pub enum WindowError {
    #[error("invalid channel count {num}: expected at least one channel")]
    InvalidChannelCount { num: usize },

    #[error("invalid limit {limit}: expected a positive, finite cutoff")]
    InvalidLimit { limit: f64 },

    #[error("unknown window kind: {name}. Valid options: rectangular, triangular, smooth")]
    UnknownKind { name: String },

    #[error("output shape error: {0}")]
    Shape(#[from] ndarray::ShapeError),
}

pub type Result<T> = std::result::Result<T, WindowError>;

#![allow(dead_code)]

use ndarray::{Array1, Array2};
use tracing_subscriber::EnvFilter;

/// Installs a subscriber honouring `RUST_LOG`; repeated calls are no-ops.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// `count` evenly spaced points from `start` to `end` inclusive.
pub fn linspace(start: f64, end: f64, count: usize) -> Array1<f64> {
    Array1::linspace(start, end, count)
}

pub fn assert_rows_close(actual: &Array2<f64>, expected: &[[f64; 8]], atol: f64) {
    assert_eq!(actual.nrows(), expected.len(), "row count");
    for (i, expected_row) in expected.iter().enumerate() {
        for (j, &want) in expected_row.iter().enumerate() {
            let got = actual[[i, j]];
            assert!(
                (got - want).abs() <= atol,
                "row {i}, channel {j}: got {got}, expected {want}"
            );
        }
    }
}

//! Soft-bin windowing of scalar distances.
//!
//! Expands distances into smooth multi-channel encodings over a cutoff
//! interval, for building radial features whose values vanish at the cutoff.

pub mod error;
pub mod window;

pub use error::{Result, WindowError};
pub use window::{
    bin_position, evaluate_slice, fill_weights, rectangular_window, smooth_step,
    smooth_step_derivative, smooth_window, triangular_window, window, window_gradient,
    window_weights, BinPosition, WindowKind, WindowSpec,
};

//! Tagged choice among the window strategies.

use crate::error::WindowError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::position::BinPosition;
use super::primitives;

/// Window strategies sharing the same positional transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WindowKind {
    /// One-hot, discontinuous at every bin boundary.
    Rectangular,
    /// Linear hand-off between adjacent bins (C0).
    Triangular,
    /// Infinitely differentiable hand-off between adjacent bins.
    Smooth,
}

impl WindowKind {
    pub const ALL: [WindowKind; 3] = [
        WindowKind::Rectangular,
        WindowKind::Triangular,
        WindowKind::Smooth,
    ];

    /// Maximum number of channels a single distance can activate.
    pub fn support(self) -> usize {
        match self {
            WindowKind::Rectangular => 1,
            WindowKind::Triangular | WindowKind::Smooth => 2,
        }
    }

    /// Overwrites `row` with the weights for `position`.
    pub fn fill(self, position: BinPosition, row: &mut [f64]) {
        match self {
            WindowKind::Rectangular => primitives::rectangular_row(position, row),
            WindowKind::Triangular => primitives::triangular_row(position, row),
            WindowKind::Smooth => primitives::smooth_row(position, row),
        }
    }

    /// Overwrites `row` with `d weight / d x`; `scale` is `num / limit`.
    pub fn fill_gradient(self, position: BinPosition, scale: f64, row: &mut [f64]) {
        match self {
            WindowKind::Rectangular => primitives::rectangular_gradient_row(position, scale, row),
            WindowKind::Triangular => primitives::triangular_gradient_row(position, scale, row),
            WindowKind::Smooth => primitives::smooth_gradient_row(position, scale, row),
        }
    }
}

impl FromStr for WindowKind {
    type Err = WindowError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.trim().to_lowercase().as_str() {
            "rectangular" | "rect" | "hard" => Ok(WindowKind::Rectangular),
            "triangular" | "triangle" | "linear" => Ok(WindowKind::Triangular),
            "smooth" => Ok(WindowKind::Smooth),
            _ => Err(WindowError::UnknownKind {
                name: name.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for WindowKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let repr = match self {
            WindowKind::Rectangular => "rectangular",
            WindowKind::Triangular => "triangular",
            WindowKind::Smooth => "smooth",
        };
        write!(f, "{repr}")
    }
}

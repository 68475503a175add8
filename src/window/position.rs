//! Positional transform shared by every window strategy.
//!
//! A distance `x` is scaled to a continuous bin position `p = x * num / limit`
//! and split into an integer bin index and a fractional offset. All three
//! strategies consume the same decomposition, so a value sitting on a bin
//! boundary resolves identically no matter which window is evaluated.

use crate::error::{Result, WindowError};
use tracing::trace;

/// Bin index and in-bin offset for a single distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BinPosition {
    /// `floor(p)`; may be negative or past the last channel.
    pub index: i64,
    /// `p - index`, always in `[0, 1)`.
    pub fraction: f64,
}

impl BinPosition {
    /// Position assigned to non-finite inputs. It lies outside every channel
    /// range, so every strategy yields an all-zero row for it.
    pub const OUT_OF_RANGE: BinPosition = BinPosition {
        index: i64::MIN,
        fraction: 0.0,
    };

    /// Splits an already scaled position `p` into index and fraction.
    pub fn from_scaled(p: f64) -> Self {
        if !p.is_finite() {
            return Self::OUT_OF_RANGE;
        }

        let floor = p.floor();
        let index = floor as i64;
        let fraction = p - floor;

        // A tiny negative p rounds to p - floor(p) == 1.0.
        if fraction >= 1.0 {
            return BinPosition {
                index: index.saturating_add(1),
                fraction: 0.0,
            };
        }

        BinPosition { index, fraction }
    }

    /// Channel holding the `1 - f` share, if it exists.
    pub fn channel(&self, num: usize) -> Option<usize> {
        channel_at(self.index, num)
    }

    /// Channel holding the `f` share, if it exists.
    pub fn next_channel(&self, num: usize) -> Option<usize> {
        channel_at(self.index.checked_add(1)?, num)
    }
}

fn channel_at(index: i64, num: usize) -> Option<usize> {
    usize::try_from(index).ok().filter(|&channel| channel < num)
}

/// Rejects configurations no window can be built from.
pub fn validate(num: usize, limit: f64) -> Result<()> {
    trace!(num = num, limit = limit, "validating window configuration");

    if num == 0 {
        return Err(WindowError::InvalidChannelCount { num });
    }
    if !limit.is_finite() || limit <= 0.0 {
        return Err(WindowError::InvalidLimit { limit });
    }
    Ok(())
}

/// Maps `x` to its bin position for `num` channels over `[0, limit)`.
///
/// Assumes a configuration that passed [`validate`]. Distances at or past
/// `limit` land on bin `num` even when `x * num / limit` rounds below it.
pub fn bin_position(x: f64, num: usize, limit: f64) -> BinPosition {
    if x >= limit {
        return BinPosition {
            index: i64::try_from(num).unwrap_or(i64::MAX),
            fraction: 0.0,
        };
    }
    BinPosition::from_scaled(x * num as f64 / limit)
}

/// `dp/dx`, the factor every window gradient is scaled by.
pub fn position_scale(num: usize, limit: f64) -> f64 {
    num as f64 / limit
}

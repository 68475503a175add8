//! Stateless window primitives.
//!
//! Each primitive fills one `num`-length row from a [`BinPosition`]. Rows are
//! overwritten completely, so callers can reuse buffers. Weights outside
//! `[0, num)` are dropped rather than folded back into the remaining channels.

use super::position::BinPosition;

/// Steepness of the smooth step, `sqrt(3) / 2`.
pub const SMOOTH_STEP_SHARPNESS: f64 = 0.866_025_403_784_438_6;

fn deposit(row: &mut [f64], channel: Option<usize>, weight: f64) {
    if let Some(channel) = channel {
        row[channel] = weight;
    }
}

/// One-hot row at the bin index, or all zeros outside `[0, num)`.
pub fn rectangular_row(position: BinPosition, row: &mut [f64]) {
    row.fill(0.0);
    deposit(row, position.channel(row.len()), 1.0);
}

/// Linear split `(1 - f, f)` between the bin and its successor.
pub fn triangular_row(position: BinPosition, row: &mut [f64]) {
    let num = row.len();
    row.fill(0.0);
    deposit(row, position.channel(num), 1.0 - position.fraction);
    deposit(row, position.next_channel(num), position.fraction);
}

/// Smooth split `(g(1 - f), g(f))` between the bin and its successor.
pub fn smooth_row(position: BinPosition, row: &mut [f64]) {
    let num = row.len();
    row.fill(0.0);
    deposit(row, position.channel(num), smooth_step(1.0 - position.fraction));
    deposit(row, position.next_channel(num), smooth_step(position.fraction));
}

/// The rectangular window is piecewise constant; its derivative is zero
/// wherever it exists.
pub fn rectangular_gradient_row(_position: BinPosition, _scale: f64, row: &mut [f64]) {
    row.fill(0.0);
}

/// Right derivative of [`triangular_row`] with respect to the distance.
pub fn triangular_gradient_row(position: BinPosition, scale: f64, row: &mut [f64]) {
    let num = row.len();
    row.fill(0.0);
    deposit(row, position.channel(num), -scale);
    deposit(row, position.next_channel(num), scale);
}

/// Derivative of [`smooth_row`] with respect to the distance.
pub fn smooth_gradient_row(position: BinPosition, scale: f64, row: &mut [f64]) {
    let num = row.len();
    row.fill(0.0);
    deposit(
        row,
        position.channel(num),
        -scale * smooth_step_derivative(1.0 - position.fraction),
    );
    deposit(
        row,
        position.next_channel(num),
        scale * smooth_step_derivative(position.fraction),
    );
}

/// Logistic form of the bump on the open interval, `0 < t < 1` only.
fn open_step(t: f64) -> f64 {
    let exponent = SMOOTH_STEP_SHARPNESS * (1.0 - 2.0 * t) / (t * (1.0 - t));
    1.0 / (1.0 + exponent.exp())
}

/// Infinitely differentiable step from 0 at `t <= 0` to 1 at `t >= 1`.
///
/// Every derivative vanishes at both ends and `smooth_step(t) +
/// smooth_step(1 - t) == 1`. The closed form is only evaluated on the open
/// interval; elsewhere a dummy argument keeps the intermediate finite and the
/// exact limit value is selected instead. NaN maps to 0.
pub fn smooth_step(t: f64) -> f64 {
    let inside = t > 0.0 && t < 1.0;
    let value = open_step(if inside { t } else { 0.5 });

    if inside {
        value
    } else if t >= 1.0 {
        1.0
    } else {
        0.0
    }
}

/// Derivative of [`smooth_step`], finite everywhere.
///
/// `g'(t) = g (1 - g) k (1/t^2 + 1/(1 - t)^2)`. Near the ends `g (1 - g)`
/// underflows to zero before the reciprocal terms overflow; the product is
/// masked to exactly zero there.
pub fn smooth_step_derivative(t: f64) -> f64 {
    if !(t > 0.0 && t < 1.0) {
        return 0.0;
    }

    let g = open_step(t);
    let envelope = g * (1.0 - g);
    if envelope == 0.0 {
        return 0.0;
    }

    let slope = 1.0 / (t * t) + 1.0 / ((1.0 - t) * (1.0 - t));
    envelope * SMOOTH_STEP_SHARPNESS * slope
}

#[cfg(test)]
mod tests {
    use super::*;

    fn position(index: i64, fraction: f64) -> BinPosition {
        BinPosition { index, fraction }
    }

    #[test]
    fn rectangular_row_is_one_hot_in_range() {
        let mut row = vec![9.0; 4];
        rectangular_row(position(2, 0.7), &mut row);
        assert_eq!(row, vec![0.0, 0.0, 1.0, 0.0]);
    }

    #[test]
    fn rectangular_row_is_empty_out_of_range() {
        let mut row = vec![9.0; 4];
        rectangular_row(position(4, 0.0), &mut row);
        assert_eq!(row, vec![0.0; 4]);

        rectangular_row(position(-1, 0.5), &mut row);
        assert_eq!(row, vec![0.0; 4]);
    }

    #[test]
    fn triangular_row_splits_linearly() {
        let mut row = vec![0.0; 4];
        triangular_row(position(1, 0.25), &mut row);
        assert_eq!(row, vec![0.0, 0.75, 0.25, 0.0]);
    }

    #[test]
    fn triangular_row_drops_mass_past_the_last_channel() {
        let mut row = vec![0.0; 4];
        triangular_row(position(3, 0.25), &mut row);
        assert_eq!(row, vec![0.0, 0.0, 0.0, 0.75]);
    }

    #[test]
    fn triangular_row_below_zero_feeds_first_channel() {
        let mut row = vec![0.0; 4];
        triangular_row(position(-1, 0.75), &mut row);
        assert_eq!(row, vec![0.75, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn smooth_row_is_one_hot_on_boundaries() {
        let mut row = vec![0.0; 4];
        smooth_row(position(2, 0.0), &mut row);
        assert_eq!(row, vec![0.0, 0.0, 1.0, 0.0]);
    }

    #[test]
    fn smooth_row_sums_to_one_inside_range() {
        let mut row = vec![0.0; 4];
        for step in 1..10 {
            smooth_row(position(1, step as f64 / 10.0), &mut row);
            let total: f64 = row.iter().sum();
            assert!((total - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn smooth_step_hits_endpoints_and_midpoint() {
        assert_eq!(smooth_step(0.0), 0.0);
        assert_eq!(smooth_step(1.0), 1.0);
        assert_eq!(smooth_step(-3.0), 0.0);
        assert_eq!(smooth_step(3.0), 1.0);
        assert_eq!(smooth_step(f64::NAN), 0.0);
        assert!((smooth_step(0.5) - 0.5).abs() < 1e-15);
    }

    #[test]
    fn smooth_step_is_monotone_and_symmetric() {
        let mut previous = 0.0;
        for step in 1..1000 {
            let t = step as f64 / 1000.0;
            let value = smooth_step(t);
            assert!(value >= previous);
            assert!((value + smooth_step(1.0 - t) - 1.0).abs() < 1e-12);
            previous = value;
        }
    }

    #[test]
    fn smooth_step_matches_reference_values() {
        assert!((smooth_step(0.6) - 0.672_978_58).abs() < 1e-7);
        assert!((smooth_step(1.0 / 15.0) - 5.771_939e-6).abs() < 1e-10);
    }

    #[test]
    fn smooth_step_derivative_vanishes_at_the_edges() {
        assert_eq!(smooth_step_derivative(0.0), 0.0);
        assert_eq!(smooth_step_derivative(1.0), 0.0);
        assert_eq!(smooth_step_derivative(1e-300), 0.0);
        assert_eq!(smooth_step_derivative(1.0 - 1e-16), 0.0);
        assert_eq!(smooth_step_derivative(f64::NAN), 0.0);
    }

    #[test]
    fn smooth_step_derivative_matches_finite_difference() {
        let h = 1e-6;
        for &t in &[0.05, 0.2, 0.5, 0.73, 0.95] {
            let numeric = (smooth_step(t + h) - smooth_step(t - h)) / (2.0 * h);
            let analytic = smooth_step_derivative(t);
            assert!(
                (numeric - analytic).abs() < 1e-5,
                "t = {t}: numeric {numeric}, analytic {analytic}"
            );
        }
    }

    #[test]
    fn gradient_rows_follow_the_same_support() {
        let mut row = vec![0.0; 4];
        triangular_gradient_row(position(3, 0.5), 2.0, &mut row);
        assert_eq!(row, vec![0.0, 0.0, 0.0, -2.0]);

        rectangular_gradient_row(position(1, 0.5), 2.0, &mut row);
        assert_eq!(row, vec![0.0; 4]);

        smooth_gradient_row(position(1, 0.0), 2.0, &mut row);
        assert_eq!(row, vec![0.0; 4]);

        smooth_gradient_row(position(1, 0.5), 2.0, &mut row);
        assert!(row[1] < 0.0 && row[2] > 0.0);
        assert!((row[1] + row[2]).abs() < 1e-12);
    }
}

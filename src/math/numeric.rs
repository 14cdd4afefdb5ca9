//! Tolerance-aware scalar helpers shared by the intersection routines.

use std::f64::consts::PI;

use super::{Point2, EPSILON};

/// Returns `true` if `value` is within [`EPSILON`] of zero.
#[must_use]
#[inline]
pub fn approx_zero(value: f64) -> bool {
    value.abs() < EPSILON
}

/// Returns `true` if `a` and `b` differ by less than [`EPSILON`].
#[must_use]
#[inline]
pub fn approx_eq(a: f64, b: f64) -> bool {
    approx_zero(a - b)
}

/// Inverse cosine that tolerates arguments pushed just outside `[-1, 1]`
/// by rounding.
///
/// Returns `0` for `x >= 1` and `π` for `x <= -1`.
#[must_use]
pub fn safe_acos(x: f64) -> f64 {
    if x >= 1.0 {
        return 0.0;
    }
    if x <= -1.0 {
        return PI;
    }
    x.acos()
}

/// Rotates `point` clockwise about `pivot` by `angle` radians.
///
/// A negative angle rotates counter-clockwise, so `+θ` and `-θ` give the
/// two mirror images of `point` across the line through `pivot` and `point`.
#[must_use]
pub fn rotate_point(pivot: &Point2, point: &Point2, angle: f64) -> Point2 {
    let x = point.x - pivot.x;
    let y = point.y - pivot.y;
    let (sin, cos) = angle.sin_cos();
    Point2::new(pivot.x + x * cos + y * sin, pivot.y + y * cos - x * sin)
}

use std::fmt;

use crate::math::{approx_zero, Point2};

/// An infinite line in standard form `a*x + b*y = c`.
///
/// Coefficients are normalized on construction so that either `b == 1`
/// (non-vertical) or `a == 1, b == 0` (vertical). Two lines describing the
/// same point set therefore share one representation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    a: f64,
    b: f64,
    c: f64,
}

impl Line {
    /// Creates the line `a*x + b*y = c`, normalizing its coefficients.
    ///
    /// `a` and `b` must not both be zero; such input has no line and yields
    /// non-finite coefficients.
    #[must_use]
    pub fn new(a: f64, b: f64, c: f64) -> Self {
        if approx_zero(b) {
            Self {
                a: 1.0,
                b: 0.0,
                c: c / a,
            }
        } else {
            Self {
                a: if approx_zero(a) { 0.0 } else { a / b },
                b: 1.0,
                c: c / b,
            }
        }
    }

    /// Creates the line through `point` with the given `slope`.
    ///
    /// An infinite slope (of either sign) yields the vertical line through
    /// `point`.
    #[must_use]
    pub fn from_slope_point(slope: f64, point: &Point2) -> Self {
        if slope.is_infinite() {
            Self::new(1.0, 0.0, point.x)
        } else {
            // y - py = m (x - px)  =>  -m x + y = py - m px
            Self::new(-slope, 1.0, point.y - slope * point.x)
        }
    }

    /// Creates the line through two points.
    ///
    /// The points must be distinct; [`crate::geometry::LineSegment`] is the
    /// checked way in.
    pub(crate) fn through(p1: &Point2, p2: &Point2) -> Self {
        let a = p1.y - p2.y;
        let b = p2.x - p1.x;
        let c = p2.x * p1.y - p1.x * p2.y;
        Self::new(a, b, c)
    }

    /// Coefficient of `x`.
    #[must_use]
    pub fn a(&self) -> f64 {
        self.a
    }

    /// Coefficient of `y`; always `0` or `1`.
    #[must_use]
    pub fn b(&self) -> f64 {
        self.b
    }

    /// Right-hand side constant.
    #[must_use]
    pub fn c(&self) -> f64 {
        self.c
    }

    /// Returns `true` for a line of the form `x = c`.
    #[must_use]
    pub fn is_vertical(&self) -> bool {
        approx_zero(self.b)
    }

    /// Returns `true` if `point` satisfies the line equation within tolerance.
    #[must_use]
    pub fn contains(&self, point: &Point2) -> bool {
        approx_zero(self.a * point.x + self.b * point.y - self.c)
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x + {}y = {}", self.a, self.b, self.c)
    }
}

use tracing::trace;

use crate::geometry::{Circle, Line};
use crate::math::{approx_zero, Point2};

use super::Intersections;

/// Intersection points of an infinite line and a circle boundary.
///
/// A vertical line `x = c` yields `(c, Y + dy)` before `(c, Y - dy)`.
/// Any other line is solved as a quadratic in `x`, with the root
/// `(-B + sqrt(D)) / 2A` reported first.
#[must_use]
#[allow(clippy::many_single_char_names)]
pub fn line_circle_intersection(line: &Line, circle: &Circle) -> Intersections {
    let (a, b, c) = (line.a(), line.b(), line.c());
    let (x, y) = (circle.center().x, circle.center().y);
    let r = circle.radius();

    if line.is_vertical() {
        return vertical_line_circle(c / a, x, y, r);
    }

    // Substituting y = (c - a*x) / b into (x - X)^2 + (y - Y)^2 = r^2:
    // (a^2 + b^2) x^2 + (2abY - 2ac - 2b^2X) x
    //     + (b^2X^2 + b^2Y^2 - 2bcY + c^2 - b^2r^2) = 0
    let qa = a * a + b * b;
    let qb = 2.0 * a * b * y - 2.0 * a * c - 2.0 * b * b * x;
    let qc = b * b * x * x + b * b * y * y - 2.0 * b * c * y + c * c - b * b * r * r;
    let disc = qb * qb - 4.0 * qa * qc;

    if approx_zero(disc) {
        let x1 = -qb / (2.0 * qa);
        let p = Point2::new(x1, (c - a * x1) / b);
        trace!(%line, disc, x = p.x, y = p.y, "tangent line");
        return Intersections::One(p);
    }
    if disc < 0.0 {
        trace!(%line, disc, "line misses circle");
        return Intersections::None;
    }

    let root = disc.sqrt();
    let x1 = (-qb + root) / (2.0 * qa);
    let x2 = (-qb - root) / (2.0 * qa);
    trace!(%line, disc, x1, x2, "secant line");
    Intersections::Two(
        Point2::new(x1, (c - a * x1) / b),
        Point2::new(x2, (c - a * x2) / b),
    )
}

/// Vertical line `x = x1` against the circle centered at `(cx, cy)`.
fn vertical_line_circle(x1: f64, cx: f64, cy: f64, r: f64) -> Intersections {
    let dx = (x1 - cx).abs();
    if dx > r {
        trace!(x1, dx, r, "vertical line misses circle");
        return Intersections::None;
    }
    if approx_zero(x1 - r - cx) || approx_zero(x1 + r - cx) {
        trace!(x1, r, "vertical tangent line");
        return Intersections::One(Point2::new(x1, cy));
    }
    let dy = (r * r - dx * dx).max(0.0).sqrt();
    trace!(x1, dy, "vertical secant line");
    Intersections::Two(Point2::new(x1, cy + dy), Point2::new(x1, cy - dy))
}

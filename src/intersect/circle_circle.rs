use tracing::trace;

use crate::geometry::Circle;
use crate::math::{approx_zero, rotate_point, safe_acos, Point2};

use super::Intersections;

/// Intersection points of the boundaries of two circles.
///
/// Concentric circles yield [`Intersections::None`] even when the radii
/// match, since coincident circles have no discrete intersection points.
/// External and internal tangency yield a single point. Otherwise the two
/// crossing points are returned, the first rotated clockwise about the
/// larger circle's center.
#[must_use]
pub fn circle_circle_intersection(c1: &Circle, c2: &Circle) -> Intersections {
    // `small` has radius `r`, `big` has radius `R`; ties take c2 as small.
    let (small, big) = if c1.radius() < c2.radius() {
        (c1, c2)
    } else {
        (c2, c1)
    };
    let r = small.radius();
    let big_r = big.radius();
    let big_center = big.center();

    let delta = small.center() - big_center;
    let d = delta.norm();

    if approx_zero(d) {
        trace!(r, big_r, "concentric circles");
        return Intersections::None;
    }

    // Point on the big circle facing the small circle's center.
    let toward = Point2::from(big_center.coords + delta * (big_r / d));

    if approx_zero(big_r + r - d) || approx_zero(big_r - (r + d)) {
        trace!(d, r, big_r, x = toward.x, y = toward.y, "tangent circles");
        return Intersections::One(toward);
    }

    if d + r < big_r || big_r + r < d {
        trace!(d, r, big_r, "circles do not meet");
        return Intersections::None;
    }

    // Law of cosines in the triangle (big center, small center, crossing).
    let angle = safe_acos((r * r - d * d - big_r * big_r) / (-2.0 * d * big_r));
    trace!(d, r, big_r, angle, "crossing circles");
    Intersections::Two(
        rotate_point(big_center, &toward, angle),
        rotate_point(big_center, &toward, -angle),
    )
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    const TOL: f64 = 1e-9;

    fn circle(x: f64, y: f64, r: f64) -> Circle {
        Circle::new(Point2::new(x, y), r)
    }

    fn assert_point(p: &Point2, x: f64, y: f64) {
        assert_abs_diff_eq!(p.x, x, epsilon = TOL);
        assert_abs_diff_eq!(p.y, y, epsilon = TOL);
    }

    #[test]
    fn external_tangent() {
        let hits = circle_circle_intersection(&circle(0.0, 0.0, 3.0), &circle(5.0, 0.0, 2.0));
        let Intersections::One(p) = hits else {
            panic!("expected one point, got {hits:?}");
        };
        assert_point(&p, 3.0, 0.0);
    }

    #[test]
    fn internal_tangent() {
        // Small circle of radius 1 inside radius 3, touching at (3, 0).
        let hits = circle_circle_intersection(&circle(2.0, 0.0, 1.0), &circle(0.0, 0.0, 3.0));
        let Intersections::One(p) = hits else {
            panic!("expected one point, got {hits:?}");
        };
        assert_point(&p, 3.0, 0.0);
    }

    #[test]
    fn two_unit_circles() {
        let hits = circle_circle_intersection(&circle(0.0, 0.0, 1.0), &circle(1.0, 0.0, 1.0));
        let Intersections::Two(p, q) = hits else {
            panic!("expected two points, got {hits:?}");
        };
        let h = 3.0_f64.sqrt() / 2.0;
        // Equal radii: the second circle is the small one, so the rotation
        // pivots on (0, 0) starting from (1, 0); clockwise first.
        assert_point(&p, 0.5, -h);
        assert_point(&q, 0.5, h);
    }

    #[test]
    fn crossing_points_lie_on_both_circles() {
        let a = circle(-1.0, 2.0, 4.0);
        let b = circle(3.0, -1.0, 2.5);
        let hits = circle_circle_intersection(&a, &b);
        assert_eq!(hits.len(), 2);
        for p in hits {
            assert_abs_diff_eq!(nalgebra::distance(&p, a.center()), a.radius(), epsilon = TOL);
            assert_abs_diff_eq!(nalgebra::distance(&p, b.center()), b.radius(), epsilon = TOL);
        }
    }

    #[test]
    fn concentric_is_empty() {
        let hits = circle_circle_intersection(&circle(0.0, 0.0, 1.0), &circle(0.0, 0.0, 2.0));
        assert!(hits.is_empty());
    }

    #[test]
    fn coincident_is_empty() {
        let c = circle(4.0, -4.0, 1.5);
        assert!(circle_circle_intersection(&c, &c).is_empty());
    }

    #[test]
    fn disjoint_is_empty() {
        let hits = circle_circle_intersection(&circle(0.0, 0.0, 1.0), &circle(5.0, 0.0, 1.0));
        assert!(hits.is_empty());
    }

    #[test]
    fn contained_is_empty() {
        let hits = circle_circle_intersection(&circle(0.5, 0.0, 1.0), &circle(0.0, 0.0, 5.0));
        assert!(hits.is_empty());
    }

    #[test]
    fn point_circle_on_boundary() {
        let hits = circle_circle_intersection(&circle(0.0, 2.0, 0.0), &circle(0.0, 0.0, 2.0));
        let Intersections::One(p) = hits else {
            panic!("expected one point, got {hits:?}");
        };
        assert_point(&p, 0.0, 2.0);
    }
}

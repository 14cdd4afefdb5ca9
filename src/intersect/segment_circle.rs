use tracing::trace;

use crate::geometry::{Circle, LineSegment};

use super::{line_circle_intersection, Intersections};

/// Intersection points of a bounded segment and a circle boundary.
///
/// The segment's supporting line is intersected with the circle, then
/// each hit is kept only if it falls inside the segment's bounding
/// rectangle (inclusive, with tolerance). Surviving points keep the order
/// produced by [`line_circle_intersection`].
#[must_use]
pub fn segment_circle_intersection(segment: &LineSegment, circle: &Circle) -> Intersections {
    let candidates = line_circle_intersection(&segment.to_line(), circle);
    let hits = candidates.filter(|p| segment.bounds_contain(p));
    trace!(
        candidates = candidates.len(),
        kept = hits.len(),
        "filtered line hits to segment bounds"
    );
    hits
}

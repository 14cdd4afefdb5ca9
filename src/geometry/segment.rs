use tracing::debug;

use crate::error::{GeometryError, Result};
use crate::math::{Point2, EPSILON};

use super::Line;

/// A bounded line segment between two distinct endpoints.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
    start: Point2,
    end: Point2,
}

impl LineSegment {
    /// Creates a new segment from `start` to `end`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DegenerateSegment`] if the endpoints are
    /// closer than [`EPSILON`].
    pub fn new(start: Point2, end: Point2) -> Result<Self> {
        if nalgebra::distance(&start, &end) < EPSILON {
            debug!(x = start.x, y = start.y, "rejected zero-length segment");
            return Err(GeometryError::DegenerateSegment {
                x: start.x,
                y: start.y,
            }
            .into());
        }
        Ok(Self { start, end })
    }

    /// Returns the start point.
    #[must_use]
    pub fn start(&self) -> &Point2 {
        &self.start
    }

    /// Returns the end point.
    #[must_use]
    pub fn end(&self) -> &Point2 {
        &self.end
    }

    /// Returns the Euclidean length of the segment.
    #[must_use]
    pub fn length(&self) -> f64 {
        nalgebra::distance(&self.start, &self.end)
    }

    /// Returns the infinite line containing the segment.
    #[must_use]
    pub fn to_line(&self) -> Line {
        Line::through(&self.start, &self.end)
    }

    /// Returns the line through the midpoint, perpendicular to the segment.
    #[must_use]
    pub fn perpendicular_bisector(&self) -> Line {
        let mid = nalgebra::center(&self.start, &self.end);
        let dir = self.end - self.start;
        Line::new(dir.x, dir.y, dir.x * mid.x + dir.y * mid.y)
    }

    /// Returns `true` if `point` lies inside the axis-aligned rectangle
    /// spanned by the endpoints, grown by [`EPSILON`] on every side.
    #[must_use]
    pub fn bounds_contain(&self, point: &Point2) -> bool {
        let (min_x, max_x) = min_max(self.start.x, self.end.x);
        let (min_y, max_y) = min_max(self.start.y, self.end.y);
        min_x - EPSILON <= point.x
            && point.x <= max_x + EPSILON
            && min_y - EPSILON <= point.y
            && point.y <= max_y + EPSILON
    }
}

fn min_max(a: f64, b: f64) -> (f64, f64) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

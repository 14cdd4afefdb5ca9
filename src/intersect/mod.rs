//! Pairwise intersection of circles with circles, lines and segments.
//!
//! Every routine returns an [`Intersections`] value holding zero, one or two
//! points. Degenerate configurations (concentric circles, tangency,
//! disjointness) are ordinary results, never errors.

mod circle_circle;
mod line_circle;
mod segment_circle;

pub use circle_circle::circle_circle_intersection;
pub use line_circle::line_circle_intersection;
pub use segment_circle::segment_circle_intersection;

use crate::math::Point2;

/// Zero, one or two intersection points.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Intersections {
    /// The shapes do not meet in a discrete point.
    #[default]
    None,
    /// The shapes touch in exactly one point.
    One(Point2),
    /// The shapes cross in two points.
    Two(Point2, Point2),
}

impl Intersections {
    /// Number of points, `0..=2`.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::None => 0,
            Self::One(_) => 1,
            Self::Two(..) => 2,
        }
    }

    /// Returns `true` if there are no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Returns the first point, if any.
    #[must_use]
    pub fn first(&self) -> Option<&Point2> {
        match self {
            Self::None => None,
            Self::One(p) | Self::Two(p, _) => Some(p),
        }
    }

    /// Iterates over the points in order.
    pub fn iter(&self) -> impl Iterator<Item = &Point2> {
        let (first, second) = match self {
            Self::None => (None, None),
            Self::One(p) => (Some(p), None),
            Self::Two(p, q) => (Some(p), Some(q)),
        };
        first.into_iter().chain(second)
    }

    /// Copies the points into a vector.
    #[must_use]
    pub fn to_vec(&self) -> Vec<Point2> {
        self.iter().copied().collect()
    }

    /// Keeps only the points for which `keep` returns `true`, preserving
    /// their order.
    #[must_use]
    pub fn filter<F>(self, mut keep: F) -> Self
    where
        F: FnMut(&Point2) -> bool,
    {
        match self {
            Self::None => Self::None,
            Self::One(p) => {
                if keep(&p) {
                    Self::One(p)
                } else {
                    Self::None
                }
            }
            Self::Two(p, q) => match (keep(&p), keep(&q)) {
                (true, true) => Self::Two(p, q),
                (true, false) => Self::One(p),
                (false, true) => Self::One(q),
                (false, false) => Self::None,
            },
        }
    }
}

impl IntoIterator for Intersections {
    type Item = Point2;
    type IntoIter = std::iter::Flatten<std::array::IntoIter<Option<Point2>, 2>>;

    fn into_iter(self) -> Self::IntoIter {
        let slots = match self {
            Self::None => [None, None],
            Self::One(p) => [Some(p), None],
            Self::Two(p, q) => [Some(p), Some(q)],
        };
        slots.into_iter().flatten()
    }
}

pub mod error;
pub mod geometry;
pub mod intersect;
pub mod math;

pub use error::{CirclexError, GeometryError, Result};
pub use geometry::{Circle, Line, LineSegment};
pub use intersect::{
    circle_circle_intersection, line_circle_intersection, segment_circle_intersection,
    Intersections,
};
pub use math::{approx_eq, approx_zero, rotate_point, safe_acos, Point2, Vector2, EPSILON};

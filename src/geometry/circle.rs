use crate::math::Point2;

/// A circle in the plane, given by its center and radius.
///
/// A zero radius is allowed and behaves as a single point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    center: Point2,
    radius: f64,
}

impl Circle {
    /// Creates a new circle.
    ///
    /// The radius must be non-negative.
    #[must_use]
    pub fn new(center: Point2, radius: f64) -> Self {
        debug_assert!(radius >= 0.0, "circle radius must be non-negative, got {radius}");
        Self { center, radius }
    }

    /// Returns the center of the circle.
    #[must_use]
    pub fn center(&self) -> &Point2 {
        &self.center
    }

    /// Returns the radius of the circle.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }
}

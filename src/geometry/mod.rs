mod circle;
mod line;
mod segment;

pub use circle::Circle;
pub use line::Line;
pub use segment::LineSegment;

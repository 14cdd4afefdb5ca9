pub mod numeric;

pub use numeric::{approx_eq, approx_zero, rotate_point, safe_acos};

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Global tolerance below which a magnitude is treated as zero.
///
/// Every degeneracy test in the crate (tangency, verticality, concentric
/// centers, coincident endpoints) compares against this value.
pub const EPSILON: f64 = 1e-7;

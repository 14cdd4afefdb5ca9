use thiserror::Error;

/// Top-level error type for circlex.
#[derive(Debug, Error)]
pub enum CirclexError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

/// Errors raised while constructing geometric values.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum GeometryError {
    /// Both endpoints of a segment coincide within [`crate::math::EPSILON`].
    #[error("degenerate segment: both endpoints coincide at ({x}, {y})")]
    DegenerateSegment { x: f64, y: f64 },
}

/// Convenience type alias for results using [`CirclexError`].
pub type Result<T> = std::result::Result<T, CirclexError>;

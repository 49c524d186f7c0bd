use thiserror::Error;

/// Top-level error type for the flakecut engine.
#[derive(Debug, Error)]
pub enum FlakeError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Cut(#[from] CutError),

    #[error(transparent)]
    Tessellation(#[from] TessellationError),
}

/// Errors related to constructing geometry.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("parameter {parameter} = {value} is out of range [{min}, {max}]")]
    ParameterOutOfRange {
        parameter: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("polygon needs at least 3 vertices, got {count}")]
    TooFewVertices { count: usize },

    #[error("degenerate geometry: {0}")]
    Degenerate(String),
}

/// Errors raised while drawing or resolving a cut.
///
/// Every variant is recoverable: the boundary and history are left untouched.
#[derive(Debug, Error)]
pub enum CutError {
    #[error("cut needs at least 2 points, got {count}")]
    TooFewPoints { count: usize },

    #[error("cut does not intersect boundary on both ends")]
    Unresolvable,

    #[error("cut would cross itself")]
    SelfIntersecting,

    #[error("cut crosses the boundary {crossings} times")]
    OverCrossing { crossings: usize },

    #[error("cut collapses the shape to {vertices} vertices")]
    DegenerateResult { vertices: usize },

    #[error("cut would leave the shape crossing itself")]
    NonSimpleResult,
}

/// Errors related to tessellation.
#[derive(Debug, Error)]
pub enum TessellationError {
    #[error("tessellation failed: {0}")]
    Failed(String),
}

/// Convenience type alias for results using [`FlakeError`].
pub type Result<T> = std::result::Result<T, FlakeError>;

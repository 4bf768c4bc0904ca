use thiserror::Error;

/// Top-level error type for the geoscan core.
#[derive(Debug, Error)]
pub enum GeoscanError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Collision(#[from] CollisionError),
}

/// Errors raised when constructing or transforming geometry.
#[derive(Debug, Error, PartialEq)]
pub enum GeometryError {
    #[error("points ({x}, {y}) coincide, cannot define a line")]
    CoincidentPoints { x: f64, y: f64 },

    #[error("both line quotients are zero")]
    ZeroQuotients,

    #[error("circle radius must be positive and finite, got {0}")]
    NonPositiveRadius(f64),

    #[error("coordinate ({x}, {y}) is outside the non-negative domain")]
    OutOfDomain { x: f64, y: f64 },

    #[error("polygon needs at least 3 vertices, got {0}")]
    TooFewVertices(usize),

    #[error("{shape} needs exactly {expected} vertices, got {found}")]
    VertexCount {
        shape: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("vertices {0}, {1} and {2} are collinear")]
    CollinearVertices(usize, usize, usize),

    #[error("sides {0} and {1} cross each other")]
    SelfIntersecting(usize, usize),

    #[error("rectangle sides are not perpendicular")]
    NotRectangular,

    #[error("square sides differ in length")]
    UnequalSides,

    #[error("bounding box needs at least one point")]
    EmptyPointSet,

    #[error("coordinate ({x}, {y}) is not integral")]
    NonIntegral { x: f64, y: f64 },

    #[error("parallel lines have no single intersection")]
    ParallelLines,
}

/// Errors raised while parsing textual shape descriptions.
#[derive(Debug, Error, PartialEq)]
pub enum ParseError {
    #[error("invalid number: {0:?}")]
    InvalidNumber(String),

    #[error("missing vertex count")]
    MissingCount,

    #[error("expected {expected} numbers, got {found}")]
    WrongTokenCount { expected: usize, found: usize },
}

/// Errors related to the collision body store.
#[derive(Debug, Error, PartialEq)]
pub enum CollisionError {
    #[error("body not found: {0}")]
    BodyNotFound(String),
}

/// Convenience type alias for results using [`GeoscanError`].
pub type Result<T> = std::result::Result<T, GeoscanError>;

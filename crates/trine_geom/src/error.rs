use thiserror::Error;
use trine_math::MathError;

/// Errors raised while constructing geometric primitives.
///
/// Queries that simply find nothing (a ray missing a box, a ray parallel to a
/// plane) return `None` instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeomError {
    #[error("math error: {0}")]
    Math(#[from] MathError),

    #[error("points are collinear and do not define a plane")]
    CollinearPoints,

    #[error("cannot build {0} from an empty set")]
    Empty(&'static str),
}

/// Result type for fallible geometric construction.
pub type GeomResult<T> = std::result::Result<T, GeomError>;

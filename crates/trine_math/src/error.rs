use thiserror::Error;

/// Errors raised by the numeric layer.
///
/// Most shape problems are caught at compile time by const generics; these
/// cover the ones that depend on runtime data.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MathError {
    #[error("shape mismatch: expected {expected} components, found {found}")]
    ShapeMismatch { expected: usize, found: usize },

    #[error("cannot broadcast {left} rows against {right} rows")]
    BroadcastMismatch { left: usize, right: usize },

    #[error("matrix is singular and has no inverse")]
    SingularMatrix,
}

/// Result type for fallible numeric operations.
pub type Result<T> = std::result::Result<T, MathError>;

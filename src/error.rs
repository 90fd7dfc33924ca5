use thiserror::Error;

/// Top-level error type for the geopred library.
#[derive(Debug, Error)]
pub enum GeopredError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

/// Errors related to geometric computations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GeometryError {
    #[error("zero-length vector")]
    ZeroVector,

    #[error("{operation} is not implemented")]
    NotImplemented { operation: &'static str },
}

/// Convenience type alias for results using [`GeopredError`].
pub type Result<T> = std::result::Result<T, GeopredError>;

use thiserror::Error;

/// Top-level error type for parcel boundary analysis.
#[derive(Debug, Error)]
pub enum LotlineError {
    #[error(transparent)]
    Ring(#[from] RingError),

    #[error(transparent)]
    Classification(#[from] ClassificationError),

    #[error(transparent)]
    Operation(#[from] OperationError),
}

/// Errors raised while turning raw points into a parcel ring.
#[derive(Debug, Error, PartialEq)]
pub enum RingError {
    #[error("ring needs at least 3 distinct vertices, found {found}")]
    InsufficientVertices { found: usize },

    #[error("point {index} has a non-finite coordinate")]
    NonFiniteCoordinate { index: usize },
}

/// Errors related to face classification.
#[derive(Debug, Error, PartialEq)]
pub enum ClassificationError {
    #[error("parcel has no sides to classify")]
    NoSides,

    #[error("frontage index {index} is out of range for {side_count} sides")]
    FrontageOutOfRange { index: usize, side_count: usize },
}

/// Errors related to pipeline operations and their parameters.
#[derive(Debug, Error, PartialEq)]
pub enum OperationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("entity not found: {0}")]
    EntityNotFound(String),
}

/// Convenience type alias for results using [`LotlineError`].
pub type Result<T> = std::result::Result<T, LotlineError>;

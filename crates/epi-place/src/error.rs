//! Location-subsystem error type.

use thiserror::Error;

use epi_core::LocationId;

/// Errors produced by `epi-place`.
#[derive(Debug, Error)]
pub enum PlaceError {
    #[error("location {0} not found")]
    NotFound(LocationId),

    #[error("location {0} listed more than once")]
    Duplicate(LocationId),

    #[error("location ids must be dense: {0} is missing")]
    Gap(LocationId),

    #[error("location parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type PlaceResult<T> = Result<T, PlaceError>;

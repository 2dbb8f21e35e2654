//! Core error type.
//!
//! Sub-crates define their own error enums and wrap `EpiError` as one variant
//! where they need to surface a core failure.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EpiError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `epi-core`.
pub type EpiResult<T> = Result<T, EpiError>;

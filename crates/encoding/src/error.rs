//! Error types for `HashInput` encoding.

use thiserror::Error;

/// Errors raised while encoding a [`crate::HashInput`] tree to bits or bytes.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodingError {
    #[error("input variant does not support this encoding")]
    TypeMismatch,
}

/// Result type alias for convenience.
pub type Result<T> = std::result::Result<T, EncodingError>;

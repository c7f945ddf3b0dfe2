//! Error types for curve arithmetic.

use jubjub_fields::FieldError;
use thiserror::Error;

/// Errors raised by point construction, decompression, and scalar multiplication.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurveError {
    #[error("32-byte point encoding is malformed")]
    InvalidEncoding,

    #[error("point does not satisfy the curve equation")]
    NotOnCurve,

    #[error(transparent)]
    Field(#[from] FieldError),
}

/// Result type alias for convenience.
pub type Result<T> = std::result::Result<T, CurveError>;

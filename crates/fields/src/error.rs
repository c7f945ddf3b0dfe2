//! Error types for field arithmetic.

use thiserror::Error;

/// Errors raised by `Fq`/`Fr` arithmetic and the number-theory helpers backing it.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    #[error("modular inverse of zero has no solution")]
    ZeroInverse,

    #[error("value is not a quadratic residue")]
    NonResidue,
}

/// Result type alias for convenience.
pub type Result<T> = std::result::Result<T, FieldError>;

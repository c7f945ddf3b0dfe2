//! Error types for the Pedersen hash family.

use jubjub_curve::CurveError;
use thiserror::Error;

/// Errors raised by basepoint derivation and the Pedersen hash variants.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PedersenError {
    #[error("scalar input is out of the expected range")]
    ScalarOutOfRange,

    #[error("domain tag is too long to pad to 28 bytes")]
    BadDomainTag,

    #[error(transparent)]
    Curve(#[from] CurveError),
}

/// Result type alias for convenience.
pub type Result<T> = std::result::Result<T, PedersenError>;

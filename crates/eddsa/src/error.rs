//! Error types for EdDSA signing.

use jubjub_curve::CurveError;
use jubjub_pedersen::PedersenError;
use thiserror::Error;

/// Errors raised by key derivation, signing, and signature (de)serialization.
///
/// Verification failure itself is never one of these: `verify` returns a
/// bare `bool`, since an invalid signature is an expected outcome, not an
/// exceptional one.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EddsaError {
    #[error("private scalar is out of the expected range")]
    ScalarOutOfRange,

    #[error(transparent)]
    Curve(#[from] CurveError),

    #[error(transparent)]
    Pedersen(#[from] PedersenError),
}

/// Result type alias for convenience.
pub type Result<T> = std::result::Result<T, EddsaError>;

//! Pure-EdDSA and Hash-EdDSA over BabyJubjub.
//!
//! Built on [`jubjub_curve`] for curve arithmetic and [`jubjub_pedersen`] for
//! the challenge and (in the `Hash` variant) message-prehash digests. Nonces
//! are derived with a single SHA-512, not RFC 8032's double-hash.

pub mod eddsa;
pub mod error;
pub mod keys;
pub mod signature;

pub use eddsa::{sign, verify, Variant};
pub use error::{EddsaError, Result};
pub use keys::{base_point, derive_public_key, derive_secret_scalar};
pub use signature::Signature;

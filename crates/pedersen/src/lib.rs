//! The Pedersen hash family over BabyJubjub: deterministic basepoint
//! derivation, a generic linear-combination hash over points/scalars/bytes,
//! and the windowed 3-bit signed-digit ("zcash-style") variant EdDSA is
//! built on.

pub mod basepoint;
pub mod error;
pub mod hash;
pub mod zcash;

pub use basepoint::basepoint;
pub use error::{PedersenError, Result};
pub use hash::{pedersen_hash_bytes, pedersen_hash_points, pedersen_hash_scalars};
pub use zcash::{
    pedersen_hash_zcash_bits, pedersen_hash_zcash_bytes, pedersen_hash_zcash_scalars,
    pedersen_hash_zcash_windows, WINDOWS_PER_BASEPOINT,
};

#[cfg(test)]
mod tests {
    use super::*;
    use jubjub_fields::Fr;

    #[test]
    fn generic_and_zcash_variants_disagree_in_general() {
        // Different algorithms, no expectation they collide.
        let generic = pedersen_hash_scalars("test", &[Fr::from_u64(42)]).unwrap();
        let zcash = pedersen_hash_zcash_scalars("test", &[Fr::from_u64(42)]).unwrap();
        assert_ne!(generic, zcash);
    }

    #[test]
    fn windows_per_basepoint_constant_is_62() {
        assert_eq!(WINDOWS_PER_BASEPOINT, 62);
    }
}

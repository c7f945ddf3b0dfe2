//! Private-scalar derivation and public-key derivation.

use jubjub_curve::{hash_to_point, Affine, CurvePoint};
use jubjub_fields::Fr;
use once_cell::sync::Lazy;
use sha2::{Digest, Sha512};

/// The EdDSA base point `B`, derived the same way as every other Pedersen
/// basepoint rather than reusing the curve's `Base8` constant: `B =
/// hash_to_point(b"eddsa_base")`.
static BASE_POINT: Lazy<Affine> = Lazy::new(|| hash_to_point(b"eddsa_base"));

pub fn base_point() -> Affine {
    *BASE_POINT
}

/// Derives a private scalar from an arbitrary seed: `SHA-512(seed) mod l`.
pub fn derive_secret_scalar(seed: &[u8]) -> Fr {
    let digest = Sha512::digest(seed);
    Fr::from_bytes_le(&digest)
}

/// `A = k · B`, the public key for private scalar `k`.
pub fn derive_public_key(k: &Fr) -> Affine {
    base_point().mult(k)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn secret_scalar_is_deterministic() {
        let a = derive_secret_scalar(b"seed");
        let b = derive_secret_scalar(b"seed");
        assert_eq!(a, b);
    }

    #[test]
    fn distinct_seeds_give_distinct_scalars() {
        let a = derive_secret_scalar(b"seed-a");
        let b = derive_secret_scalar(b"seed-b");
        assert_ne!(a, b);
    }

    #[test]
    fn public_key_is_on_curve() {
        let k = derive_secret_scalar(b"seed");
        let a = derive_public_key(&k);
        assert!(a.is_valid());
    }

    #[test]
    fn base_point_is_on_curve() {
        assert!(base_point().is_valid());
    }
}

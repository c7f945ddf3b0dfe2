//! Pure-EdDSA and Hash-EdDSA sign/verify, built on [`jubjub_curve`] and
//! [`jubjub_pedersen`].
//!
//! The two variants differ only in how the message is prehashed into `M'`:
//! Pure-EdDSA feeds the message through unchanged (`M' = M`); Hash-EdDSA
//! first Pedersen-hashes it (`M' = pedersen_hash_zcash_bytes("EdDSA_Verify.M", M)`).
//! Both then derive the nonce as a single SHA-512 (not RFC 8032's
//! double-SHA-512) and the challenge as a Pedersen hash over `R`, `A`, `M'`.

use jubjub_curve::constants::COFACTOR;
use jubjub_curve::{Affine, CurvePoint};
use jubjub_encoding::HashInput;
use jubjub_fields::{Fq, Fr};
use jubjub_pedersen::pedersen_hash_zcash_bits;
use num_bigint::BigUint;
use num_traits::Zero;
use sha2::{Digest, Sha512};

use crate::error::{EddsaError, Result};
use crate::keys::{base_point, derive_public_key};
use crate::signature::Signature;

const DOMAIN_MESSAGE: &str = "EdDSA_Verify.M";
const DOMAIN_RAM: &str = "EdDSA_Verify.RAM";

/// Whether the message is Pedersen-prehashed (Hash-EdDSA) or used as-is
/// (Pure-EdDSA) before being folded into the nonce and challenge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Variant {
    Pure,
    Hash,
}

fn prehash_message(variant: Variant, message: &[u8]) -> Result<HashInput> {
    match variant {
        Variant::Pure => Ok(HashInput::Bytes(message.to_vec())),
        Variant::Hash => {
            let hashed = jubjub_pedersen::pedersen_hash_zcash_bytes(DOMAIN_MESSAGE, message)?;
            Ok(HashInput::Point(hashed))
        }
    }
}

fn compute_nonce(k: &Fr, m_prime: &HashInput) -> Fr {
    let mut buf = k.to_bytes_le().to_vec();
    buf.extend(m_prime.to_bytes());
    let digest = Sha512::digest(&buf);
    Fr::from_bytes_le(&digest)
}

/// Returns the challenge `t` as the raw field element (not reduced mod the
/// subgroup order `l`) since the signing equation combines it mod the full
/// curve order `E = h·l`, not mod `l`.
fn challenge(r8: &Affine, a: &Affine, m_prime: &HashInput) -> Result<Fq> {
    let mut bits = HashInput::Point(*r8).to_bits();
    bits.extend(HashInput::Point(*a).to_bits());
    bits.extend(m_prime.to_bits());
    let hashed = pedersen_hash_zcash_bits(DOMAIN_RAM, &bits)?;
    Ok(hashed.x)
}

fn curve_order() -> BigUint {
    BigUint::from(COFACTOR) * jubjub_fields::fr::MODULUS.clone()
}

/// Signs `message` with private scalar `k`. Fails if `k = 0` (the only way
/// an `Fr` value can fall outside `(0, l)`, since `Fr` is always reduced).
pub fn sign(k: &Fr, message: &[u8], variant: Variant) -> Result<Signature> {
    if k.is_zero() {
        return Err(EddsaError::ScalarOutOfRange);
    }

    let a = derive_public_key(k);
    let m_prime = prehash_message(variant, message)?;

    let r = compute_nonce(k, &m_prime);
    let r8 = base_point().mult(&r);

    let t = challenge(&r8, &a, &m_prime)?;
    let e = curve_order();
    let s = (r.to_biguint() + k.to_biguint() * t.to_biguint()) % e;

    Ok(Signature { r8, s })
}

/// Verifies `sig` against `message` and public key `a`. Returns `false` (not
/// an error) on any mismatch, malformed input, or out-of-range `S`, per the
/// boolean-outcome convention for signature verification.
pub fn verify(a: &Affine, sig: &Signature, message: &[u8], variant: Variant) -> bool {
    if sig.s.is_zero() || &sig.s >= &*jubjub_fields::fq::MODULUS {
        return false;
    }

    let m_prime = match prehash_message(variant, message) {
        Ok(m) => m,
        Err(_) => return false,
    };

    let t = match challenge(&sig.r8, a, &m_prime) {
        Ok(t) => t,
        Err(_) => return false,
    };

    let s_fr = Fr::from_biguint(&sig.s);
    let t_fr = Fr::from_biguint(&t.to_biguint());

    let lhs = base_point().mult(&s_fr);
    let rhs = sig.r8.add(&a.mult(&t_fr));
    lhs == rhs
}

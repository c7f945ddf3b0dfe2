//! The BabyJubjub subgroup-order scalar field `Fr`, used for private keys,
//! nonces, and signature scalars.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use ark_ed_on_bn254::Fr as ArkFr;
use ark_ff::{BigInteger, Field, PrimeField, UniformRand, Zero as ArkZero};
use num_bigint::BigUint;
use once_cell::sync::Lazy;
use rand::{CryptoRng, RngCore};

use crate::error::{FieldError, Result};
use crate::numtheory;

/// `l = 2736030358979909402780800718157159386076813972158567259200215660948447373041`,
/// the order of the BabyJubjub prime-order subgroup.
pub static MODULUS: Lazy<BigUint> = Lazy::new(|| {
    BigUint::parse_bytes(
        b"2736030358979909402780800718157159386076813972158567259200215660948447373041",
        10,
    )
    .expect("hardcoded modulus is valid")
});

/// An element of `Fr`.
#[derive(Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Fr(ArkFr);

impl Fr {
    pub fn zero() -> Self {
        Fr(ArkFr::zero())
    }

    pub fn one() -> Self {
        Fr(ArkFr::from(1u64))
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn from_u64(n: u64) -> Self {
        Fr(ArkFr::from(n))
    }

    pub fn from_biguint(n: &BigUint) -> Self {
        let reduced = n % &*MODULUS;
        Fr(ArkFr::from_le_bytes_mod_order(&reduced.to_bytes_le()))
    }

    pub fn to_biguint(&self) -> BigUint {
        BigUint::from_bytes_le(&self.0.into_bigint().to_bytes_le())
    }

    pub fn inverse(&self) -> Result<Fr> {
        if self.is_zero() {
            return Err(FieldError::ZeroInverse);
        }
        let inv = numtheory::mod_inverse(&self.to_biguint(), &MODULUS)?;
        Ok(Fr::from_biguint(&inv))
    }

    pub fn sqrt(&self) -> Result<Fr> {
        let r = numtheory::tonelli_shanks(&self.to_biguint(), &MODULUS)?;
        Ok(Fr::from_biguint(&r))
    }

    pub fn pow(&self, exp: &BigUint) -> Fr {
        Fr(self.0.pow(exp.to_u64_digits_le_padded()))
    }

    pub fn random<R: RngCore + CryptoRng>(rng: &mut R) -> Self {
        Fr(ArkFr::rand(rng))
    }

    /// The bit length of `l`, i.e. `⌊log2 l⌋ + 1 = 251`.
    pub fn bit_length() -> usize {
        MODULUS.bits() as usize
    }

    pub fn bits(&self) -> Vec<bool> {
        let bytes = self.to_bytes_le();
        let mut bits = Vec::with_capacity(Self::bit_length());
        'outer: for byte in bytes.iter() {
            for i in 0..8 {
                if bits.len() == Self::bit_length() {
                    break 'outer;
                }
                bits.push((byte >> i) & 1 == 1);
            }
        }
        bits
    }

    pub fn to_bytes_le(&self) -> [u8; 32] {
        let mut out = [0u8; 32];
        let biguint_bytes = self.to_biguint().to_bytes_le();
        out[..biguint_bytes.len()].copy_from_slice(&biguint_bytes);
        out
    }

    pub fn to_bytes_be(&self) -> [u8; 32] {
        let mut le = self.to_bytes_le();
        le.reverse();
        le
    }

    pub fn from_bytes_le(bytes: &[u8]) -> Self {
        Fr::from_biguint(&BigUint::from_bytes_le(bytes))
    }

    pub fn from_bytes_be(bytes: &[u8]) -> Self {
        Fr::from_biguint(&BigUint::from_bytes_be(bytes))
    }
}

trait ToU64DigitsPadded {
    fn to_u64_digits_le_padded(&self) -> [u64; 4];
}

impl ToU64DigitsPadded for BigUint {
    fn to_u64_digits_le_padded(&self) -> [u64; 4] {
        let digits = self.to_u64_digits();
        let mut out = [0u64; 4];
        for (i, d) in digits.into_iter().take(4).enumerate() {
            out[i] = d;
        }
        out
    }
}

impl Add for Fr {
    type Output = Fr;
    fn add(self, rhs: Fr) -> Fr {
        Fr(self.0 + rhs.0)
    }
}

impl Sub for Fr {
    type Output = Fr;
    fn sub(self, rhs: Fr) -> Fr {
        Fr(self.0 - rhs.0)
    }
}

impl Mul for Fr {
    type Output = Fr;
    fn mul(self, rhs: Fr) -> Fr {
        Fr(self.0 * rhs.0)
    }
}

impl Neg for Fr {
    type Output = Fr;
    fn neg(self) -> Fr {
        Fr(-self.0)
    }
}

impl fmt::Debug for Fr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fr({})", self.to_biguint())
    }
}

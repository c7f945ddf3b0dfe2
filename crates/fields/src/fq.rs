//! The BN254 scalar field `Fq`, BabyJubjub's base field.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use ark_ed_on_bn254::Fq as ArkFq;
use ark_ff::{BigInteger, Field, PrimeField, UniformRand, Zero as ArkZero};
use num_bigint::BigUint;
use once_cell::sync::Lazy;
use rand::{CryptoRng, RngCore};

use crate::error::{FieldError, Result};
use crate::numtheory;

/// `q = 21888242871839275222246405745257275088548364400416034343698204186575808495617`,
/// the order of the BN254 scalar field and BabyJubjub's base field.
pub static MODULUS: Lazy<BigUint> = Lazy::new(|| {
    BigUint::parse_bytes(
        b"21888242871839275222246405745257275088548364400416034343698204186575808495617",
        10,
    )
    .expect("hardcoded modulus is valid")
});

/// An element of `Fq`.
///
/// Arithmetic (`+`, `-`, `*`, unary `-`) delegates to `ark_ed_on_bn254::Fq`. `inverse`
/// and `sqrt` instead bridge through [`crate::numtheory`] so that the square-root and
/// modular-inverse algorithms remain independently testable over `BigUint`.
#[derive(Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Fq(ArkFq);

impl Fq {
    pub fn zero() -> Self {
        Fq(ArkFq::zero())
    }

    pub fn one() -> Self {
        Fq(ArkFq::from(1u64))
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn from_u64(n: u64) -> Self {
        Fq(ArkFq::from(n))
    }

    pub fn from_biguint(n: &BigUint) -> Self {
        let reduced = n % &*MODULUS;
        Fq(ArkFq::from_le_bytes_mod_order(&reduced.to_bytes_le()))
    }

    pub fn to_biguint(&self) -> BigUint {
        BigUint::from_bytes_le(&self.0.into_bigint().to_bytes_le())
    }

    /// Multiplicative inverse, via extended-Euclidean `mod_inverse` over `BigUint`.
    pub fn inverse(&self) -> Result<Fq> {
        if self.is_zero() {
            return Err(FieldError::ZeroInverse);
        }
        let inv = numtheory::mod_inverse(&self.to_biguint(), &MODULUS)?;
        Ok(Fq::from_biguint(&inv))
    }

    /// Square root, via Tonelli-Shanks over `BigUint`. The sign of the returned root
    /// is whichever Tonelli-Shanks produces; callers needing a canonical sign (e.g.
    /// curve point recovery) pick between `r` and `-r` themselves.
    pub fn sqrt(&self) -> Result<Fq> {
        let r = numtheory::tonelli_shanks(&self.to_biguint(), &MODULUS)?;
        Ok(Fq::from_biguint(&r))
    }

    /// `self^exp`, where `exp` is taken as a `BigUint` exponent (not reduced mod `q - 1`).
    pub fn pow(&self, exp: &BigUint) -> Fq {
        Fq(self.0.pow(exp.to_u64_digits_le_padded()))
    }

    pub fn random<R: RngCore + CryptoRng>(rng: &mut R) -> Self {
        Fq(ArkFq::rand(rng))
    }

    /// The bit length of `q`, i.e. `⌊log2 q⌋ + 1 = 254`.
    pub fn bit_length() -> usize {
        MODULUS.bits() as usize
    }

    /// Little-endian bit decomposition, padded to [`Fq::bit_length`] bits.
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
        Fq::from_biguint(&BigUint::from_bytes_le(bytes))
    }

    pub fn from_bytes_be(bytes: &[u8]) -> Self {
        Fq::from_biguint(&BigUint::from_bytes_be(bytes))
    }

    /// `true` when `self` is the "negative" representative, i.e. `self > q / 2`.
    ///
    /// Matches the sign convention used by point compression: there is no
    /// intrinsic sign for a field element, only a choice of which of `{x, -x}`
    /// counts as positive, and this crate follows the BabyJubjub convention of
    /// comparing against `(q - 1) / 2`.
    pub fn is_negative(&self) -> bool {
        let half = (&*MODULUS - BigUint::from(1u8)) / BigUint::from(2u8);
        self.to_biguint() > half
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

impl Add for Fq {
    type Output = Fq;
    fn add(self, rhs: Fq) -> Fq {
        Fq(self.0 + rhs.0)
    }
}

impl Sub for Fq {
    type Output = Fq;
    fn sub(self, rhs: Fq) -> Fq {
        Fq(self.0 - rhs.0)
    }
}

impl Mul for Fq {
    type Output = Fq;
    fn mul(self, rhs: Fq) -> Fq {
        Fq(self.0 * rhs.0)
    }
}

impl Neg for Fq {
    type Output = Fq;
    fn neg(self) -> Fq {
        Fq(-self.0)
    }
}

impl fmt::Debug for Fq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fq({})", self.to_biguint())
    }
}

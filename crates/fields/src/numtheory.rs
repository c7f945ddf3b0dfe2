//! Number-theory helpers backing `Fq`/`Fr`: Tonelli-Shanks square roots, the
//! Legendre symbol, and modular inverse via the extended Euclidean algorithm.
//!
//! These operate on `BigUint` rather than the arkworks field types so that
//! they stand on their own as a testable unit, independent of which modulus
//! a caller plugs in.

use num_bigint::{BigInt, BigUint, Sign};
use num_traits::{One, Zero};

use crate::error::{FieldError, Result};

/// The Legendre symbol `(n/p)`, returning `1` if `n` is a nonzero quadratic
/// residue mod `p`, `-1` if it is a nonresidue, and `0` if `n ≡ 0 (mod p)`.
///
/// `p` MUST be an odd prime.
pub fn legendre_symbol(n: &BigUint, p: &BigUint) -> i8 {
    let n_mod = n % p;
    if n_mod.is_zero() {
        return 0;
    }
    let exp = (p - BigUint::one()) / BigUint::from(2u8);
    if n_mod.modpow(&exp, p) == BigUint::one() {
        1
    } else {
        -1
    }
}

/// Modular inverse of `a` mod `p` via the extended Euclidean algorithm.
///
/// Fails with [`FieldError::ZeroInverse`] when `a ≡ 0 (mod p)`.
pub fn mod_inverse(a: &BigUint, p: &BigUint) -> Result<BigUint> {
    let a_mod = a % p;
    if a_mod.is_zero() {
        return Err(FieldError::ZeroInverse);
    }

    let mut old_r = BigInt::from_biguint(Sign::Plus, p.clone());
    let mut r = BigInt::from_biguint(Sign::Plus, a_mod);
    let mut old_s = BigInt::zero();
    let mut s = BigInt::one();

    while !r.is_zero() {
        let quotient = &old_r / &r;
        let new_r = &old_r - &quotient * &r;
        old_r = r;
        r = new_r;

        let new_s = &old_s - &quotient * &s;
        old_s = s;
        s = new_s;
    }

    // old_r is now gcd(a, p); since p is prime this must be 1 unless a ≡ 0.
    if old_r != BigInt::one() {
        return Err(FieldError::ZeroInverse);
    }

    let p_signed = BigInt::from_biguint(Sign::Plus, p.clone());
    let reduced = ((old_s % &p_signed) + &p_signed) % &p_signed;
    Ok(reduced
        .to_biguint()
        .expect("result reduced mod p is non-negative by construction"))
}

/// Tonelli-Shanks square root: returns `r` with `r^2 ≡ n (mod p)`.
///
/// Fails with [`FieldError::NonResidue`] when `n` is not a quadratic residue
/// mod `p`. `p` MUST be an odd prime.
pub fn tonelli_shanks(n: &BigUint, p: &BigUint) -> Result<BigUint> {
    let n_mod = n % p;
    if n_mod.is_zero() {
        return Ok(BigUint::zero());
    }
    if legendre_symbol(&n_mod, p) != 1 {
        return Err(FieldError::NonResidue);
    }

    let one = BigUint::one();
    let two = BigUint::from(2u8);
    let three = BigUint::from(3u8);
    let four = BigUint::from(4u8);

    // Fast path: p ≡ 3 (mod 4), as is the case for both q and l here.
    if &(p % &four) == &three {
        let exp = (p + &one) / &four;
        return Ok(n_mod.modpow(&exp, p));
    }

    // General case: factor p - 1 = q * 2^s with q odd.
    let mut q = p - &one;
    let mut s: u32 = 0;
    while (&q % &two).is_zero() {
        q /= &two;
        s += 1;
    }

    // Find a quadratic nonresidue z.
    let mut z = two.clone();
    while legendre_symbol(&z, p) != -1 {
        z += &one;
    }

    let mut m = s;
    let mut c = z.modpow(&q, p);
    let mut t = n_mod.modpow(&q, p);
    let mut r = n_mod.modpow(&((&q + &one) / &two), p);

    loop {
        if t == one {
            return Ok(r);
        }

        let mut i = 0u32;
        let mut t2i = t.clone();
        while t2i != one {
            t2i = (&t2i * &t2i) % p;
            i += 1;
            if i == m {
                // n was a residue, so this cannot happen.
                return Err(FieldError::NonResidue);
            }
        }

        let b_exp = BigUint::one() << ((m - i - 1) as usize);
        let b = c.modpow(&b_exp, p);
        m = i;
        c = (&b * &b) % p;
        t = (&t * &c) % p;
        r = (&r * &b) % p;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_prime() -> BigUint {
        BigUint::from(97u32) // 97 % 4 == 1, exercises the general Tonelli-Shanks path
    }

    #[test]
    fn legendre_of_zero_is_zero() {
        let p = small_prime();
        assert_eq!(legendre_symbol(&BigUint::zero(), &p), 0);
    }

    #[test]
    fn legendre_matches_known_residues() {
        let p = small_prime();
        // 4 is a QR mod 97 (2^2), 5 is not.
        assert_eq!(legendre_symbol(&BigUint::from(4u32), &p), 1);
        assert_eq!(legendre_symbol(&BigUint::from(5u32), &p), -1);
    }

    #[test]
    fn tonelli_shanks_roundtrip_small_prime() {
        let p = small_prime();
        for x in 1u32..p.bits() as u32 {
            let x = BigUint::from(x);
            let n = (&x * &x) % &p;
            let r = tonelli_shanks(&n, &p).expect("square root must exist for a square input");
            assert_eq!((&r * &r) % &p, n);
        }
    }

    #[test]
    fn tonelli_shanks_rejects_nonresidue() {
        let p = small_prime();
        assert_eq!(tonelli_shanks(&BigUint::from(5u32), &p), Err(FieldError::NonResidue));
    }

    #[test]
    fn tonelli_shanks_p_equiv_3_mod_4() {
        // 23 % 4 == 3, exercises the fast path.
        let p = BigUint::from(23u32);
        let n = BigUint::from(4u32); // 2^2
        let r = tonelli_shanks(&n, &p).unwrap();
        assert_eq!((&r * &r) % &p, n);
    }

    #[test]
    fn mod_inverse_roundtrip() {
        let p = small_prime();
        for a in 1u32..20 {
            let a = BigUint::from(a);
            let inv = mod_inverse(&a, &p).unwrap();
            assert_eq!((&a * &inv) % &p, BigUint::one());
        }
    }

    #[test]
    fn mod_inverse_rejects_zero() {
        let p = small_prime();
        assert_eq!(mod_inverse(&BigUint::zero(), &p), Err(FieldError::ZeroInverse));
    }
}

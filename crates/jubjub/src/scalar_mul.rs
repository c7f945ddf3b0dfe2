//! Scalar multiplication strategies, exposed as free functions so that tests
//! can assert they all agree on the same affine result (see `crate::tests`
//! and each primitive's own test module).

use jubjub_fields::Fr;
use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::curve_point::CurvePoint;

/// Textbook double-and-add, scanning `scalar`'s bits from most to least
/// significant.
pub fn double_and_add<P: CurvePoint>(base: &P, scalar: &Fr) -> P {
    let bits = scalar.bits(); // little-endian
    let mut acc = P::infinity();
    for bit in bits.into_iter().rev() {
        acc = acc.double();
        if bit {
            acc = acc.add(base);
        }
    }
    acc
}

/// Width-2 non-adjacent form: digits in `{-1, 0, 1}`, no two consecutive
/// nonzero digits. Halves the expected number of additions versus
/// double-and-add for a random scalar.
pub fn naf2<P: CurvePoint>(base: &P, scalar: &Fr) -> P {
    naf_windowed(base, scalar, 2)
}

/// Width-`w` windowed NAF: digits are odd integers in
/// `(-2^(w-1), 2^(w-1))` (or zero), computed against a precomputed table of
/// `base`'s odd multiples `1·P, 3·P, 5·P, ..., (2^(w-1) - 1)·P`.
pub fn naf_windowed<P: CurvePoint>(base: &P, scalar: &Fr, w: u32) -> P {
    assert!(w >= 2, "window width must be at least 2");

    let digits = compute_naf(&scalar.to_biguint(), w);
    let table = odd_multiples_table(base, w);

    let mut acc = P::infinity();
    for &digit in digits.iter().rev() {
        acc = acc.double();
        if digit > 0 {
            let idx = ((digit - 1) / 2) as usize;
            acc = acc.add(&table[idx]);
        } else if digit < 0 {
            let idx = ((-digit - 1) / 2) as usize;
            acc = acc.add(&table[idx].neg());
        }
    }
    acc
}

/// Precomputes `[1·P, 3·P, 5·P, ..., (2^(w-1) - 1)·P]` via repeated addition
/// of `2·P`.
fn odd_multiples_table<P: CurvePoint>(base: &P, w: u32) -> Vec<P> {
    let count = 1usize << ((w - 2) as usize);
    let double_base = base.double();
    let mut table = Vec::with_capacity(count);
    table.push(*base);
    for i in 1..count {
        table.push(table[i - 1].add(&double_base));
    }
    table
}

/// Width-`w` NAF digit expansion of `e`, little-endian (index 0 is the
/// least-significant digit). Algorithm 3.35, Hankerson/Menezes/Vanstone,
/// "Guide to Elliptic Curve Cryptography".
fn compute_naf(e: &BigUint, w: u32) -> Vec<i64> {
    let mut e = e.clone();
    let mut naf = Vec::new();
    let modulus = BigUint::one() << (w as usize); // 2^w
    let half = BigUint::one() << ((w - 1) as usize); // 2^(w-1)
    let two = BigUint::from(2u8);

    while !e.is_zero() {
        if (&e % &two) == BigUint::one() {
            let window = &e % &modulus;
            let window_u64 = window.to_u64_digits().first().copied().unwrap_or(0);
            let digit = if window >= half {
                window_u64 as i64 - (1i64 << w)
            } else {
                window_u64 as i64
            };
            naf.push(digit);
            if digit >= 0 {
                e -= BigUint::from(digit as u64);
            } else {
                e += BigUint::from((-digit) as u64);
            }
        } else {
            naf.push(0);
        }
        e >>= 1usize;
    }
    naf
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::affine::Affine;
    use crate::constants::{BASE_X, BASE_Y};
    use jubjub_fields::Fr;
    use num_bigint::BigUint;

    fn base() -> Affine {
        Affine::new(*BASE_X, *BASE_Y)
    }

    #[test]
    fn naf_expansion_reconstructs_value() {
        for n in [1u64, 2, 3, 7, 15, 255, 1023] {
            let e = BigUint::from(n);
            for w in 2..=6 {
                let digits = compute_naf(&e, w);
                let mut acc = BigUint::zero();
                let mut pow = BigUint::one();
                for d in digits {
                    if d >= 0 {
                        acc += BigUint::from(d as u64) * &pow;
                    } else {
                        acc -= BigUint::from((-d) as u64) * &pow;
                    }
                    pow *= 2u8;
                }
                assert_eq!(acc, e, "w = {w}");
            }
        }
    }

    #[test]
    fn all_algorithms_agree_on_small_scalars() {
        let b = base();
        for n in [0u64, 1, 2, 3, 17, 111111, 5000000] {
            let scalar = Fr::from_u64(n);
            let a = double_and_add(&b, &scalar).to_affine();
            let c = naf2(&b, &scalar).to_affine();
            for w in [3u32, 4, 5, 8] {
                let d = naf_windowed(&b, &scalar, w).to_affine();
                assert_eq!(a, d, "double_and_add vs naf_windowed(w={w}) mismatch at n={n}");
            }
            assert_eq!(a, c, "double_and_add vs naf2 mismatch at n={n}");
        }
    }

    #[test]
    fn mult_zero_is_infinity() {
        let b = base();
        let zero = Fr::zero();
        assert!(double_and_add(&b, &zero).is_infinity());
        assert!(naf_windowed(&b, &zero, 4).is_infinity());
    }
}

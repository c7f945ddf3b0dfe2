//! The generic (non-windowed) Pedersen hash: a linear combination of
//! per-index basepoints, each scaled by one input scalar.

use jubjub_curve::Affine;
use jubjub_encoding::HashInput;
use jubjub_fields::Fr;

use crate::basepoint::basepoint;
use crate::error::Result;

/// Sums a list of already-computed points. The base case the
/// scalar/byte variants below reduce to.
pub fn pedersen_hash_points(points: &[Affine]) -> Affine {
    points.iter().fold(Affine::infinity(), |acc, p| acc.add(p))
}

/// `sum_i scalars[i] · B(name, i)`.
pub fn pedersen_hash_scalars(name: &str, scalars: &[Fr]) -> Result<Affine> {
    let mut points = Vec::with_capacity(scalars.len());
    for (i, scalar) in scalars.iter().enumerate() {
        use jubjub_curve::CurvePoint;
        points.push(basepoint(name, i as u32)?.mult(scalar));
    }
    Ok(pedersen_hash_points(&points))
}

/// Hashes `data` by chunking it into 254-bit scalars (the width of one
/// basepoint's exponent) and delegating to [`pedersen_hash_scalars`].
pub fn pedersen_hash_bytes(name: &str, data: &[u8]) -> Result<Affine> {
    let bits = HashInput::Bytes(data.to_vec()).to_bits();
    let scalars: Vec<Fr> = bits
        .chunks(254)
        .map(|chunk| bits_to_fr(chunk))
        .collect();
    pedersen_hash_scalars(name, &scalars)
}

fn bits_to_fr(bits: &[bool]) -> Fr {
    let mut acc = Fr::zero();
    let mut place = Fr::one();
    let two = Fr::from_u64(2);
    for &bit in bits {
        if bit {
            acc = acc + place;
        }
        place = place * two;
    }
    acc
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_hashes_to_infinity() {
        assert!(pedersen_hash_points(&[]).is_infinity());
    }

    #[test]
    fn is_deterministic() {
        let scalars = [Fr::from_u64(1), Fr::from_u64(2), Fr::from_u64(3)];
        let a = pedersen_hash_scalars("test", &scalars).unwrap();
        let b = pedersen_hash_scalars("test", &scalars).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn distinct_scalars_give_distinct_hashes() {
        let a = pedersen_hash_scalars("test", &[Fr::from_u64(1)]).unwrap();
        let b = pedersen_hash_scalars("test", &[Fr::from_u64(2)]).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn byte_hash_is_on_curve() {
        let h = pedersen_hash_bytes("test", b"abcdefghijklmnopqrstuvwx").unwrap();
        assert!(h.is_valid());
    }
}

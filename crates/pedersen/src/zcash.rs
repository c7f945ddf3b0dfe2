//! The windowed "zcash-style" Pedersen hash: bits are grouped into 3-bit
//! signed-digit windows, and a fresh basepoint is introduced every 62
//! windows, matching the original construction this is grounded on.

use jubjub_curve::{Affine, CurvePoint};
use jubjub_encoding::HashInput;
use jubjub_fields::Fr;

use crate::basepoint::basepoint;
use crate::error::Result;

/// Windows per basepoint before a fresh basepoint is introduced.
pub const WINDOWS_PER_BASEPOINT: usize = 62;

/// Decodes one 3-bit window `(s0, s1, s2)` to a signed digit in
/// `{-4, -3, -2, -1, 1, 2, 3, 4}`: magnitude `1 + s0 + 2·s1`, sign `-1` if
/// `s2` else `+1`.
fn window_digit(bits: &[bool]) -> i8 {
    debug_assert_eq!(bits.len(), 3);
    let magnitude = 1 + bits[0] as i8 + 2 * bits[1] as i8;
    if bits[2] {
        -magnitude
    } else {
        magnitude
    }
}

/// Chunks `bits` into 3-bit windows (zero-padding the final partial window)
/// and decodes each to a signed digit.
fn bits_to_window_digits(bits: &[bool]) -> Vec<i8> {
    bits.chunks(3)
        .map(|chunk| {
            let mut padded = [false; 3];
            padded[..chunk.len()].copy_from_slice(chunk);
            window_digit(&padded)
        })
        .collect()
}

fn digit_to_fr(digit: i8) -> Fr {
    if digit >= 0 {
        Fr::from_u64(digit as u64)
    } else {
        -Fr::from_u64((-digit) as u64)
    }
}

/// Core windowed hash over already-decoded signed digits: every
/// [`WINDOWS_PER_BASEPOINT`] digits are folded into one basepoint multiple
/// via their base-`2^4` place value (the `j`-th window in a segment
/// contributes `±m · 2^(4·j)`), and the per-basepoint results are summed.
pub fn pedersen_hash_zcash_windows(name: &str, digits: &[i8]) -> Result<Affine> {
    let sixteen = Fr::from_u64(16);
    let mut result = Affine::infinity();

    for (group_idx, group) in digits.chunks(WINDOWS_PER_BASEPOINT).enumerate() {
        let bp = basepoint(name, group_idx as u32)?;
        let mut scalar = Fr::zero();
        let mut place = Fr::one();
        for &digit in group {
            scalar = scalar + digit_to_fr(digit) * place;
            place = place * sixteen;
        }
        result = result.add(&bp.mult(&scalar));
    }

    Ok(result)
}

/// Hashes a raw bit-string.
pub fn pedersen_hash_zcash_bits(name: &str, bits: &[bool]) -> Result<Affine> {
    let digits = bits_to_window_digits(bits);
    pedersen_hash_zcash_windows(name, &digits)
}

/// Hashes raw bytes (LSB-first bit expansion per [`jubjub_encoding::HashInput`]).
pub fn pedersen_hash_zcash_bytes(name: &str, data: &[u8]) -> Result<Affine> {
    let bits = HashInput::Bytes(data.to_vec()).to_bits();
    pedersen_hash_zcash_bits(name, &bits)
}

/// Hashes a sequence of scalars, each contributing its full little-endian
/// bit decomposition.
pub fn pedersen_hash_zcash_scalars(name: &str, scalars: &[Fr]) -> Result<Affine> {
    let bits: Vec<bool> = scalars.iter().flat_map(Fr::bits).collect();
    pedersen_hash_zcash_bits(name, &bits)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_digit_covers_all_eight_patterns() {
        let mut seen = std::collections::HashSet::new();
        for s0 in [false, true] {
            for s1 in [false, true] {
                for s2 in [false, true] {
                    seen.insert(window_digit(&[s0, s1, s2]));
                }
            }
        }
        assert_eq!(seen.len(), 8);
        for d in seen {
            assert!((1..=4).contains(&d.abs()));
        }
    }

    #[test]
    fn empty_bits_hash_to_infinity() {
        let h = pedersen_hash_zcash_bits("test", &[]).unwrap();
        assert!(h.is_infinity());
    }

    #[test]
    fn is_deterministic_and_on_curve() {
        let bits = vec![true, false, true, true, false, false];
        let a = pedersen_hash_zcash_bits("test", &bits).unwrap();
        let b = pedersen_hash_zcash_bits("test", &bits).unwrap();
        assert_eq!(a, b);
        assert!(a.is_valid());
    }

    #[test]
    fn distinct_inputs_give_distinct_hashes() {
        let a = pedersen_hash_zcash_bytes("test", b"abcdefghijklmnopqrstuvwx").unwrap();
        let b = pedersen_hash_zcash_bytes("test", b"abcdefghijklmnopqrstuvwy").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn more_than_62_windows_introduces_a_second_basepoint() {
        // 63 windows = 189 bits, enough to spill into a second basepoint group.
        let bits = vec![true; 189];
        let h = pedersen_hash_zcash_bits("test", &bits).unwrap();
        assert!(h.is_valid());
        assert!(!h.is_infinity());
    }

    fn fr_from_dec(s: &str) -> Fr {
        let n: num_bigint::BigUint = s.parse().unwrap();
        Fr::from_biguint(&n)
    }

    fn assert_point_eq(p: Affine, x: &str, y: &str) {
        let expected_x: num_bigint::BigUint = x.parse().unwrap();
        let expected_y: num_bigint::BigUint = y.parse().unwrap();
        assert_eq!(p.x.to_biguint(), expected_x);
        assert_eq!(p.y.to_biguint(), expected_y);
    }

    #[test]
    fn matches_reference_vector_scalars_267() {
        let h = pedersen_hash_zcash_scalars("test", &[Fr::from_u64(267)]).unwrap();
        assert_point_eq(
            h,
            "6790798216812059804926342266703617627640027902964190490794793207272357201212",
            "2522797517250455013248440571887865304858084343310097011302610004060289809689",
        );
    }

    #[test]
    fn matches_reference_vector_bytes_abc() {
        let h = pedersen_hash_zcash_bytes("test", b"abc").unwrap();
        assert_point_eq(
            h,
            "9869277320722751484529016080276887338184240285836102740267608137843906399765",
            "19790690237145851554496394080496962351633528315779989340140084430077208474328",
        );
    }

    #[test]
    fn matches_reference_vector_scalars_large_1() {
        let scalar = fr_from_dec(
            "6453482891510615431577168724743356132495662554103773572771861111634748265227",
        );
        let h = pedersen_hash_zcash_scalars("test", &[scalar]).unwrap();
        assert_point_eq(
            h,
            "6545697115159207040330446958704617656199928059562637738348733874272425400594",
            "16414097465381367987194277536478439232201417933379523927469515207544654431390",
        );
    }

    #[test]
    fn matches_reference_vector_scalars_large_2() {
        let scalar = fr_from_dec(
            "21888242871839275222246405745257275088548364400416034343698204186575808495616",
        );
        let h = pedersen_hash_zcash_scalars("test", &[scalar]).unwrap();
        assert_point_eq(
            h,
            "16322787121012335146141962340685388833598805940095898416175167744309692564601",
            "7671892447502767424995649701270280747270481283542925053047237428072257876309",
        );
    }

    #[test]
    fn matches_reference_vector_bytes_long() {
        let h = pedersen_hash_zcash_bytes("test", b"abcdefghijklmnopqrstuvwx").unwrap();
        assert_point_eq(
            h,
            "3966548799068703226441887746390766667253943354008248106643296790753369303077",
            "12849086395963202120677663823933219043387904870880733726805962981354278512988",
        );
    }
}

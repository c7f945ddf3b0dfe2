//! Round-constant derivation: a keccak-256 hash chain seeded by an ASCII
//! domain tag, mirroring how this workspace's own `NOTHING_UP_MY_SLEEVE`
//! constant is derived elsewhere in the curve/crypto stack.

use num_bigint::BigUint;
use tiny_keccak::{Hasher, Keccak};

fn keccak256(input: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak::v256();
    hasher.update(input);
    let mut out = [0u8; 32];
    hasher.finalize(&mut out);
    out
}

/// Default round-constant seed, ASCII `"mimc"`.
pub const DEFAULT_SEED: &[u8] = b"mimc";

/// Produces `rounds - 1` round constants `c_0..c_{rounds-2}` reduced mod `p`,
/// one per `mimc` round: `[0, c_1, ..., c_{rounds-2}]`.
///
/// `c_0` is fixed at zero; the remaining `rounds - 2` constants are a
/// keccak-256 hash chain starting from `keccak256(seed)`, each link hashing
/// the previous link's raw 32 bytes (not its reduction mod `p`). There is no
/// trailing zero constant: `mimc` performs exactly one round per entry here,
/// for `rounds - 1` rounds total.
pub fn mimc_constants(seed: &[u8], p: &BigUint, rounds: usize) -> Vec<BigUint> {
    assert!(rounds >= 2, "MiMC requires at least 2 rounds");

    let mut constants = Vec::with_capacity(rounds - 1);
    constants.push(BigUint::from(0u8));

    let mut link = keccak256(seed);
    for _ in 0..rounds.saturating_sub(2) {
        constants.push(BigUint::from_bytes_be(&link) % p);
        link = keccak256(&link);
    }

    constants
}

/// The reference round count for exponent `e` against a field of `q_bits`
/// bits: `⌈q_bits / log2(e)⌉`, matching the concrete defaults used upstream
/// (`e = 7 → 91`, `e = 5 → 110` for a 254-bit field).
pub fn default_round_count(e: u32, q_bits: u32) -> usize {
    let log2_e = (e as f64).log2();
    (q_bits as f64 / log2_e).ceil() as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chain_has_rounds_minus_one_entries_starting_at_zero() {
        let p = BigUint::from(101u32);
        let constants = mimc_constants(DEFAULT_SEED, &p, 10);
        assert_eq!(constants.len(), 9);
        assert_eq!(constants[0], BigUint::from(0u8));
    }

    #[test]
    fn middle_constants_are_deterministic_and_reduced() {
        let p = BigUint::from(101u32);
        let a = mimc_constants(DEFAULT_SEED, &p, 10);
        let b = mimc_constants(DEFAULT_SEED, &p, 10);
        assert_eq!(a, b);
        for c in &a {
            assert!(c < &p);
        }
    }

    #[test]
    fn default_round_counts_match_known_values() {
        assert_eq!(default_round_count(7, 254), 91);
        assert_eq!(default_round_count(5, 254), 110);
    }
}

//! The MiMC permutation and its Miyaguchi-Preneel compression mode.

use num_bigint::BigUint;

use crate::constants::mimc_constants;

/// `E_k(x)` over `Z/pZ`: `R` rounds of `x ← (x + k + c_i)^e mod p`, followed
/// by one final `+ k`.
pub fn mimc(x: &BigUint, k: &BigUint, seed: &[u8], p: &BigUint, e: u32, rounds: usize) -> BigUint {
    let constants = mimc_constants(seed, p, rounds);
    let k = k % p;
    let mut x = x % p;

    let exp = BigUint::from(e);
    for c in &constants {
        let t = (&x + &k + c) % p;
        x = t.modpow(&exp, p);
    }

    (x + &k) % p
}

/// Miyaguchi-Preneel compression: folds a sequence of blocks into a single
/// state, feeding the running state back in as both key and feed-forward
/// term, `state ← E_state(block) + block + state (mod p)`.
pub fn mimc_mp(
    blocks: &[BigUint],
    initial_state: &BigUint,
    seed: &[u8],
    p: &BigUint,
    e: u32,
    rounds: usize,
) -> BigUint {
    let mut state = initial_state % p;
    for block in blocks {
        let enc = mimc(block, &state, seed, p, e, rounds);
        state = (enc + block + &state) % p;
    }
    state
}

//! BabyJubjub curve constants.
//!
//! `a·x² + y² = 1 + d·x²·y²` over `Fq`, with cofactor `h = 8` over the
//! prime-order subgroup of order `l` (see `jubjub_fields::fr::MODULUS`).

use jubjub_fields::Fq;
use once_cell::sync::Lazy;

/// Twisted-Edwards coefficient `a = 168700`.
pub static A: Lazy<Fq> = Lazy::new(|| Fq::from_u64(168700));

/// Twisted-Edwards coefficient `d = 168696`.
pub static D: Lazy<Fq> = Lazy::new(|| Fq::from_u64(168696));

/// Montgomery coefficient `A = 168698`, birationally equivalent to `(a, d)` above.
pub static MONT_A: Lazy<Fq> = Lazy::new(|| Fq::from_u64(168698));

/// Montgomery coefficient `B = 1`.
pub static MONT_B: Lazy<Fq> = Lazy::new(Fq::one);

/// Cofactor: the full curve order is `h · l`.
pub const COFACTOR: u64 = 8;

/// Generator `G` of the full curve (order `h · l`).
pub static GENERATOR_X: Lazy<Fq> = Lazy::new(|| {
    Fq::from_biguint(
        &"995203441582195749578291179787384436505546430278305826713579947235728471134"
            .parse()
            .expect("hardcoded constant is a valid decimal integer"),
    )
});
pub static GENERATOR_Y: Lazy<Fq> = Lazy::new(|| {
    Fq::from_biguint(
        &"5472060717959818805561601436314318772137091100104008585924551046643952123905"
            .parse()
            .expect("hardcoded constant is a valid decimal integer"),
    )
});

/// `Base8 = h · G`, the generator of the prime-order subgroup of order `l`.
pub static BASE_X: Lazy<Fq> = Lazy::new(|| {
    Fq::from_biguint(
        &"5299619240641551281634865583518297030282874472190772894086521144482721001553"
            .parse()
            .expect("hardcoded constant is a valid decimal integer"),
    )
});
pub static BASE_Y: Lazy<Fq> = Lazy::new(|| {
    Fq::from_biguint(
        &"16950150798460657717958625567821834550301663161624707787222815936182638968203"
            .parse()
            .expect("hardcoded constant is a valid decimal integer"),
    )
});

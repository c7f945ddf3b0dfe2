//! The MiMC block cipher over an arbitrary prime field, plus its
//! Miyaguchi-Preneel compression mode. Unlike [`jubjub_fields`], MiMC is
//! parameterized by whatever modulus the caller supplies (the SNARK field
//! `q`, in every test vector here), so round constants and the permutation
//! operate on `num_bigint::BigUint` directly rather than a fixed field type.

pub mod cipher;
pub mod constants;

pub use cipher::{mimc, mimc_mp};
pub use constants::{default_round_count, mimc_constants, DEFAULT_SEED};

//! Deterministic basepoint derivation: `B(name, i)`.

use jubjub_curve::{hash_to_point, Affine};

use crate::error::{PedersenError, Result};

/// Derives the `i`-th basepoint for a named Pedersen hash instance.
///
/// The seed fed to [`hash_to_point`] is `name` ASCII space-padded to 28
/// bytes, followed by `i` rendered as 4 uppercase hex digits
/// (`"%-28s%04X"`). `name` must be at most 28 ASCII bytes.
pub fn basepoint(name: &str, i: u32) -> Result<Affine> {
    if !name.is_ascii() || name.len() > 28 {
        return Err(PedersenError::BadDomainTag);
    }
    let seed = format!("{name:<28}{i:04X}");
    Ok(hash_to_point(seed.as_bytes()))
}

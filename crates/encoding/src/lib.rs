//! `HashInput`: a small tagged tree that unifies how points, field elements,
//! raw bytes, and raw bit-strings are fed into the Pedersen hash and EdDSA's
//! nonce/challenge derivations, so each caller builds one `HashInput` value
//! instead of hand-rolling bit-packing at each call site.

pub mod error;

pub use error::{EncodingError, Result};

use jubjub_curve::Affine;
use jubjub_fields::Fq;

/// A heterogeneous input to a hash, built up as a tree and flattened via
/// [`HashInput::to_bits`]/[`HashInput::to_bytes`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HashInput {
    /// A curve point, encoded by its `x`-coordinate only.
    Point(Affine),
    /// A base-field element, encoded as its canonical little-endian bits/bytes.
    Field(Fq),
    /// Raw bytes, encoded least-significant-bit-first within each byte.
    Bytes(Vec<u8>),
    /// A raw bit-string, used as-is.
    Bits(Vec<bool>),
    /// A sequence of inputs, concatenated in order.
    List(Vec<HashInput>),
}

impl HashInput {
    /// Flattens this input to its little-endian bit sequence.
    pub fn to_bits(&self) -> Vec<bool> {
        match self {
            HashInput::Point(p) => p.x.bits(),
            HashInput::Field(f) => f.bits(),
            HashInput::Bytes(bytes) => bytes_to_bits(bytes),
            HashInput::Bits(bits) => bits.clone(),
            HashInput::List(items) => items.iter().flat_map(HashInput::to_bits).collect(),
        }
    }

    /// Flattens this input to bytes. `Bytes` and `Field` pass through
    /// byte-aligned; `Point` encodes its `x`-coordinate as 32 bytes
    /// little-endian; `Bits`/`List` are packed LSB-first, zero-padded to a
    /// byte boundary.
    pub fn to_bytes(&self) -> Vec<u8> {
        match self {
            HashInput::Point(p) => p.x.to_bytes_le().to_vec(),
            HashInput::Field(f) => f.to_bytes_le().to_vec(),
            HashInput::Bytes(bytes) => bytes.clone(),
            HashInput::Bits(_) | HashInput::List(_) => bits_to_bytes(&self.to_bits()),
        }
    }

    /// `to_bits()`, checked against a caller-expected bit length. Callers
    /// that concatenate a fixed-shape `HashInput` (e.g. the zcash Pedersen
    /// variant's fixed window count) use this instead of silently truncating
    /// or zero-extending a mismatched input.
    pub fn expect_bits(&self, len: usize) -> Result<Vec<bool>> {
        let bits = self.to_bits();
        if bits.len() == len {
            Ok(bits)
        } else {
            Err(EncodingError::TypeMismatch)
        }
    }
}

fn bytes_to_bits(bytes: &[u8]) -> Vec<bool> {
    let mut bits = Vec::with_capacity(bytes.len() * 8);
    for byte in bytes {
        for i in 0..8 {
            bits.push((byte >> i) & 1 == 1);
        }
    }
    bits
}

fn bits_to_bytes(bits: &[bool]) -> Vec<u8> {
    let mut bytes = vec![0u8; bits.len().div_ceil(8)];
    for (i, bit) in bits.iter().enumerate() {
        if *bit {
            bytes[i / 8] |= 1 << (i % 8);
        }
    }
    bytes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bytes_roundtrip_through_bits() {
        let original = vec![0xDEu8, 0xAD, 0xBE, 0xEF];
        let bits = bytes_to_bits(&original);
        assert_eq!(bits.len(), 32);
        assert_eq!(bits_to_bytes(&bits), original);
    }

    #[test]
    fn list_concatenates_in_order() {
        let a = HashInput::Bytes(vec![0xFF]);
        let b = HashInput::Bytes(vec![0x00]);
        let list = HashInput::List(vec![a.clone(), b.clone()]);
        let expected: Vec<bool> = a.to_bits().into_iter().chain(b.to_bits()).collect();
        assert_eq!(list.to_bits(), expected);
    }

    #[test]
    fn field_bits_has_254_entries() {
        let f = HashInput::Field(Fq::from_u64(42));
        assert_eq!(f.to_bits().len(), 254);
    }

    #[test]
    fn expect_bits_rejects_wrong_length() {
        let f = HashInput::Field(Fq::from_u64(7));
        assert!(f.expect_bits(254).is_ok());
        assert_eq!(f.expect_bits(10), Err(EncodingError::TypeMismatch));
    }

    #[test]
    fn point_encodes_x_only() {
        let p = jubjub_curve::hash_to_point(b"encoding-test");
        let input = HashInput::Point(p);
        assert_eq!(input.to_bits(), p.x.bits());
        assert_eq!(input.to_bytes(), p.x.to_bytes_le().to_vec());
    }
}

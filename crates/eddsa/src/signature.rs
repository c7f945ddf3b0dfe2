//! `Signature` and its 64-byte packed encoding: 32 bytes of compressed `R8`
//! followed by 32 bytes of little-endian `S`.

use jubjub_curve::{compress, decompress, Affine};
use num_bigint::BigUint;
use serde::{de::Error as DeError, Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{EddsaError, Result};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Signature {
    pub r8: Affine,
    pub s: BigUint,
}

impl Signature {
    pub fn pack(&self) -> [u8; 64] {
        let mut out = [0u8; 64];
        out[..32].copy_from_slice(&compress(&self.r8));
        let s_bytes = self.s.to_bytes_le();
        out[32..32 + s_bytes.len()].copy_from_slice(&s_bytes);
        out
    }

    pub fn unpack(bytes: &[u8; 64]) -> Result<Signature> {
        let mut r8_bytes = [0u8; 32];
        r8_bytes.copy_from_slice(&bytes[..32]);
        let r8 = decompress(&r8_bytes).map_err(EddsaError::Curve)?;
        let s = BigUint::from_bytes_le(&bytes[32..]);
        Ok(Signature { r8, s })
    }
}

/// Serializes as the lowercase hex encoding of [`Signature::pack`]'s 64-byte
/// form, matching [`jubjub_curve::Affine`]'s hex-string convention.
impl Serialize for Signature {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&hex::encode(self.pack()))
    }
}

impl<'de> Deserialize<'de> for Signature {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        let bytes = hex::decode(&s).map_err(DeError::custom)?;
        let array: [u8; 64] = bytes
            .try_into()
            .map_err(|_| DeError::custom("expected 64 bytes"))?;
        Signature::unpack(&array).map_err(DeError::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jubjub_curve::constants::{BASE_X, BASE_Y};

    #[test]
    fn pack_unpack_roundtrips() {
        let sig = Signature {
            r8: Affine::new(*BASE_X, *BASE_Y),
            s: BigUint::from(123456789u64),
        };
        let packed = sig.pack();
        let unpacked = Signature::unpack(&packed).unwrap();
        assert_eq!(unpacked, sig);
    }

    #[test]
    fn serde_roundtrips_through_json() {
        let sig = Signature {
            r8: Affine::new(*BASE_X, *BASE_Y),
            s: BigUint::from(987654321u64),
        };
        let json = serde_json::to_string(&sig).unwrap();
        let recovered: Signature = serde_json::from_str(&json).unwrap();
        assert_eq!(recovered, sig);
    }
}

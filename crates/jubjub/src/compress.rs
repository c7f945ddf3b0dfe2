//! 32-byte point compression: little-endian `y` with the sign bit of `x` in
//! bit 255 (the MSB of the final byte).

use crate::affine::Affine;
use crate::error::{CurveError, Result};

pub fn compress(p: &Affine) -> [u8; 32] {
    let mut bytes = p.y.to_bytes_le();
    if p.x.is_negative() {
        bytes[31] |= 0x80;
    }
    bytes
}

pub fn decompress(bytes: &[u8; 32]) -> Result<Affine> {
    let sign = bytes[31] & 0x80 != 0;
    let mut y_bytes = *bytes;
    y_bytes[31] &= 0x7f;

    let y = jubjub_fields::Fq::from_bytes_le(&y_bytes);
    Affine::from_y(y, sign).map_err(|_| CurveError::InvalidEncoding)
}

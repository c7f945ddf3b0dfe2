//! Affine twisted-Edwards point representation.

use jubjub_fields::Fq;
use serde::{de::Error as DeError, Deserialize, Deserializer, Serialize, Serializer};

use crate::compress::{compress, decompress};
use crate::constants::{A, D};
use crate::error::{CurveError, Result};

/// A point `(x, y)` on the twisted-Edwards curve `a·x² + y² = 1 + d·x²·y²`.
///
/// The identity element is `(0, 1)`.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Affine {
    pub x: Fq,
    pub y: Fq,
}

impl Affine {
    pub fn new(x: Fq, y: Fq) -> Self {
        Affine { x, y }
    }

    pub fn infinity() -> Self {
        Affine {
            x: Fq::zero(),
            y: Fq::one(),
        }
    }

    pub fn is_infinity(&self) -> bool {
        self.x.is_zero() && self.y == Fq::one()
    }

    /// `true` if `(x, y)` satisfies `a·x² + y² = 1 + d·x²·y²`.
    pub fn is_valid(&self) -> bool {
        let x2 = self.x * self.x;
        let y2 = self.y * self.y;
        let lhs = *A * x2 + y2;
        let rhs = Fq::one() + *D * x2 * y2;
        lhs == rhs
    }

    /// Unified twisted-Edwards addition formula (also correct for doubling).
    pub fn add(&self, other: &Affine) -> Affine {
        let (x1, y1) = (self.x, self.y);
        let (x2, y2) = (other.x, other.y);
        let dxy1xy2 = *D * x1 * x2 * y1 * y2;

        let x3_num = x1 * y2 + y1 * x2;
        let x3_den = (Fq::one() + dxy1xy2)
            .inverse()
            .expect("1 + d·x1·x2·y1·y2 is nonzero for curve points");
        let x3 = x3_num * x3_den;

        let y3_num = y1 * y2 - *A * x1 * x2;
        let y3_den = (Fq::one() - dxy1xy2)
            .inverse()
            .expect("1 - d·x1·x2·y1·y2 is nonzero for curve points");
        let y3 = y3_num * y3_den;

        Affine { x: x3, y: y3 }
    }

    pub fn double(&self) -> Affine {
        self.add(self)
    }

    pub fn neg(&self) -> Affine {
        Affine {
            x: -self.x,
            y: self.y,
        }
    }

    /// Recovers `y` from `x` (choosing the root matching `y_is_negative`'s sign
    /// convention, see [`jubjub_fields::Fq::is_negative`]), returning the point
    /// if it lies on the curve.
    pub fn from_x(x: Fq, y_is_negative: bool) -> Result<Affine> {
        let x2 = x * x;
        let num = Fq::one() - *A * x2;
        let den = Fq::one() - *D * x2;
        let den_inv = den.inverse().map_err(|_| CurveError::NotOnCurve)?;
        let y2 = num * den_inv;
        let root = y2.sqrt().map_err(|_| CurveError::NotOnCurve)?;
        let y = if root.is_negative() == y_is_negative {
            root
        } else {
            -root
        };
        let point = Affine { x, y };
        if point.is_valid() {
            Ok(point)
        } else {
            Err(CurveError::NotOnCurve)
        }
    }

    /// Recovers `x` from `y` (choosing the root matching `x_is_negative`),
    /// returning the point if it lies on the curve. Used by point decompression.
    pub fn from_y(y: Fq, x_is_negative: bool) -> Result<Affine> {
        let y2 = y * y;
        let num = Fq::one() - y2;
        let den = *A - *D * y2;
        let den_inv = den.inverse().map_err(|_| CurveError::NotOnCurve)?;
        let x2 = num * den_inv;
        let root = x2.sqrt().map_err(|_| CurveError::NotOnCurve)?;
        let x = if root.is_negative() == x_is_negative {
            root
        } else {
            -root
        };
        let point = Affine { x, y };
        if point.is_valid() {
            Ok(point)
        } else {
            Err(CurveError::NotOnCurve)
        }
    }
}

/// Serializes as the lowercase hex encoding of [`compress`]'s 32-byte form,
/// not the raw `(x, y)` pair, so the wire format matches the packed
/// signature/key encodings used throughout this workspace.
impl Serialize for Affine {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&hex::encode(compress(self)))
    }
}

impl<'de> Deserialize<'de> for Affine {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        let bytes = hex::decode(&s).map_err(DeError::custom)?;
        let array: [u8; 32] = bytes
            .try_into()
            .map_err(|_| DeError::custom("expected 32 bytes"))?;
        decompress(&array).map_err(DeError::custom)
    }
}

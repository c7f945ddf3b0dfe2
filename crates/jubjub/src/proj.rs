//! Projective twisted-Edwards coordinates: `(X, Y, Z)` with `x = X/Z`, `y =
//! Y/Z`. Lighter-weight than [`crate::etec::EtecPoint`] (no `T` coordinate)
//! at the cost of a pricier unified addition law.

use jubjub_fields::Fq;

use crate::affine::Affine;
use crate::constants::{A, D};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ProjPoint {
    pub x: Fq,
    pub y: Fq,
    pub z: Fq,
}

impl ProjPoint {
    pub fn infinity() -> Self {
        Self::from_affine(&Affine::infinity())
    }

    pub fn is_infinity(&self) -> bool {
        self.to_affine().is_infinity()
    }

    pub fn is_valid(&self) -> bool {
        self.to_affine().is_valid()
    }

    pub fn from_affine(p: &Affine) -> Self {
        ProjPoint {
            x: p.x,
            y: p.y,
            z: Fq::one(),
        }
    }

    pub fn to_affine(&self) -> Affine {
        let z_inv = self.z.inverse().expect("Z is nonzero for any valid Proj point");
        Affine {
            x: self.x * z_inv,
            y: self.y * z_inv,
        }
    }

    /// General unified projective twisted-Edwards addition law (also correct
    /// for doubling).
    pub fn add(&self, other: &ProjPoint) -> ProjPoint {
        let za = self.z * other.z;
        let zb = za * za;
        let c = self.x * other.x;
        let d = self.y * other.y;
        let e = *D * c * d;
        let f = zb - e;
        let g = zb + e;
        let x3 = za * f * ((self.x + self.y) * (other.x + other.y) - c - d);
        let y3 = za * g * (d - *A * c);
        let z3 = f * g;
        ProjPoint {
            x: x3,
            y: y3,
            z: z3,
        }
    }

    pub fn double(&self) -> ProjPoint {
        self.add(self)
    }

    pub fn neg(&self) -> ProjPoint {
        ProjPoint {
            x: -self.x,
            y: self.y,
            z: self.z,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{BASE_X, BASE_Y};

    #[test]
    fn roundtrips_through_affine() {
        let base = Affine::new(*BASE_X, *BASE_Y);
        let proj = ProjPoint::from_affine(&base);
        assert_eq!(proj.to_affine(), base);
    }

    #[test]
    fn add_matches_affine_add() {
        let base = Affine::new(*BASE_X, *BASE_Y);
        let proj = ProjPoint::from_affine(&base);
        let sum_proj = proj.add(&proj).to_affine();
        let sum_affine = base.add(&base);
        assert_eq!(sum_proj, sum_affine);
    }

    #[test]
    fn neg_is_additive_inverse() {
        let base = Affine::new(*BASE_X, *BASE_Y);
        let proj = ProjPoint::from_affine(&base);
        assert!(proj.add(&proj.neg()).is_infinity());
    }
}

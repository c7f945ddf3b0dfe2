//! Montgomery-form point `(u, v)` on `B·v² = u³ + A·u² + u`, birationally
//! equivalent to the twisted-Edwards affine form via:
//!
//! ```text
//! u = (1 + y) / (1 - y)      x = u / v
//! v = (1 + y) / ((1 - y)·x)  y = (u - 1) / (u + 1)
//! ```
//!
//! There is no efficient native addition law implemented here: arithmetic
//! goes star-through-affine (convert to [`Affine`], add there, convert back),
//! matching how this representation is used in practice — as a display/
//! interoperability form, not a hot-path accumulator.

use jubjub_fields::Fq;

use crate::affine::Affine;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct MontPoint {
    pub u: Fq,
    pub v: Fq,
    /// Montgomery curves have no rational `(u, v)` point at infinity; this
    /// flag stands in for the Edwards identity `(0, 1)` under the birational
    /// map, which has no finite Montgomery image.
    pub infinity: bool,
}

impl MontPoint {
    pub fn infinity() -> Self {
        MontPoint {
            u: Fq::zero(),
            v: Fq::zero(),
            infinity: true,
        }
    }

    pub fn is_infinity(&self) -> bool {
        self.infinity
    }

    pub fn from_affine(p: &Affine) -> Self {
        if p.is_infinity() {
            return MontPoint::infinity();
        }
        let one = Fq::one();
        let one_minus_y_inv = (one - p.y)
            .inverse()
            .expect("y = 1 only at the identity, already handled above");
        let u = (one + p.y) * one_minus_y_inv;
        if p.x.is_zero() {
            // The 2-torsion point (0, -1) has no finite Montgomery v-coordinate
            // under u/x; by convention we record it as (u, 0).
            return MontPoint {
                u,
                v: Fq::zero(),
                infinity: false,
            };
        }
        let x_inv = p.x.inverse().expect("checked nonzero above");
        let v = u * x_inv;
        MontPoint {
            u,
            v,
            infinity: false,
        }
    }

    pub fn to_affine(&self) -> Affine {
        if self.infinity {
            return Affine::infinity();
        }
        let one = Fq::one();
        let y = (self.u - one)
            * (self.u + one)
                .inverse()
                .expect("u = -1 does not occur for points built from from_affine");
        if self.v.is_zero() {
            return Affine {
                x: Fq::zero(),
                y,
            };
        }
        let x = self.u * self.v.inverse().expect("checked nonzero above");
        Affine { x, y }
    }

    pub fn is_valid(&self) -> bool {
        self.to_affine().is_valid()
    }

    pub fn add(&self, other: &MontPoint) -> MontPoint {
        MontPoint::from_affine(&self.to_affine().add(&other.to_affine()))
    }

    pub fn double(&self) -> MontPoint {
        self.add(self)
    }

    pub fn neg(&self) -> MontPoint {
        MontPoint::from_affine(&self.to_affine().neg())
    }
}

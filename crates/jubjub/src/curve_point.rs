//! The `CurvePoint` trait unifies the four point representations
//! ([`Affine`], [`EtecPoint`], [`ProjPoint`], [`MontPoint`]) behind one
//! interface so that [`crate::scalar_mul`]'s algorithms are written once and
//! apply to all of them.

use jubjub_fields::Fr;

use crate::affine::Affine;
use crate::etec::EtecPoint;
use crate::mont::MontPoint;
use crate::proj::ProjPoint;
use crate::scalar_mul;

pub trait CurvePoint: Copy + PartialEq {
    fn infinity() -> Self;
    fn is_infinity(&self) -> bool;
    fn is_valid(&self) -> bool;
    fn add(&self, other: &Self) -> Self;
    fn double(&self) -> Self;
    fn neg(&self) -> Self;
    fn to_affine(&self) -> Affine;

    /// Scalar multiplication. Defaults to width-4 windowed NAF; the
    /// individual algorithms (`double_and_add`, `naf2`, `naf_windowed`) are
    /// also exposed as free functions in [`crate::scalar_mul`] so callers can
    /// verify they agree.
    fn mult(&self, scalar: &Fr) -> Self
    where
        Self: Sized,
    {
        scalar_mul::naf_windowed(self, scalar, 4)
    }
}

impl CurvePoint for Affine {
    fn infinity() -> Self {
        Affine::infinity()
    }
    fn is_infinity(&self) -> bool {
        Affine::is_infinity(self)
    }
    fn is_valid(&self) -> bool {
        Affine::is_valid(self)
    }
    fn add(&self, other: &Self) -> Self {
        Affine::add(self, other)
    }
    fn double(&self) -> Self {
        Affine::double(self)
    }
    fn neg(&self) -> Self {
        Affine::neg(self)
    }
    fn to_affine(&self) -> Affine {
        *self
    }
}

impl CurvePoint for EtecPoint {
    fn infinity() -> Self {
        EtecPoint::infinity()
    }
    fn is_infinity(&self) -> bool {
        EtecPoint::is_infinity(self)
    }
    fn is_valid(&self) -> bool {
        EtecPoint::is_valid(self)
    }
    fn add(&self, other: &Self) -> Self {
        EtecPoint::add(self, other)
    }
    fn double(&self) -> Self {
        EtecPoint::double(self)
    }
    fn neg(&self) -> Self {
        EtecPoint::neg(self)
    }
    fn to_affine(&self) -> Affine {
        EtecPoint::to_affine(self)
    }
}

impl CurvePoint for ProjPoint {
    fn infinity() -> Self {
        ProjPoint::infinity()
    }
    fn is_infinity(&self) -> bool {
        ProjPoint::is_infinity(self)
    }
    fn is_valid(&self) -> bool {
        ProjPoint::is_valid(self)
    }
    fn add(&self, other: &Self) -> Self {
        ProjPoint::add(self, other)
    }
    fn double(&self) -> Self {
        ProjPoint::double(self)
    }
    fn neg(&self) -> Self {
        ProjPoint::neg(self)
    }
    fn to_affine(&self) -> Affine {
        ProjPoint::to_affine(self)
    }
}

impl CurvePoint for MontPoint {
    fn infinity() -> Self {
        MontPoint::infinity()
    }
    fn is_infinity(&self) -> bool {
        MontPoint::is_infinity(self)
    }
    fn is_valid(&self) -> bool {
        MontPoint::is_valid(self)
    }
    fn add(&self, other: &Self) -> Self {
        MontPoint::add(self, other)
    }
    fn double(&self) -> Self {
        MontPoint::double(self)
    }
    fn neg(&self) -> Self {
        MontPoint::neg(self)
    }
    fn to_affine(&self) -> Affine {
        MontPoint::to_affine(self)
    }
}

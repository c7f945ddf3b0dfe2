//! BabyJubjub twisted-Edwards curve arithmetic.
//!
//! Four interconvertible point representations ([`Affine`], [`EtecPoint`],
//! [`ProjPoint`], [`MontPoint`]) share one [`CurvePoint`] interface; scalar
//! multiplication is implemented three ways in [`scalar_mul`]
//! (`double_and_add`, `naf2`, `naf_windowed`) and all three are required to
//! agree on the same affine result.

pub mod affine;
pub mod compress;
pub mod constants;
pub mod curve_point;
pub mod error;
pub mod etec;
pub mod hash;
pub mod loworder;
pub mod mont;
pub mod proj;
pub mod scalar_mul;

pub use affine::Affine;
pub use compress::{compress, decompress};
pub use curve_point::CurvePoint;
pub use error::{CurveError, Result};
pub use etec::EtecPoint;
pub use hash::hash_to_point;
pub use loworder::all_loworder_points;
pub use mont::MontPoint;
pub use proj::ProjPoint;

#[cfg(test)]
mod tests {
    use super::*;
    use constants::{BASE_X, BASE_Y};
    use jubjub_fields::Fr;

    #[test]
    fn base_point_survives_all_four_representations() {
        let base = Affine::new(*BASE_X, *BASE_Y);
        assert_eq!(EtecPoint::from_affine(&base).to_affine(), base);
        assert_eq!(ProjPoint::from_affine(&base).to_affine(), base);
        assert_eq!(MontPoint::from_affine(&base).to_affine(), base);
    }

    #[test]
    fn mult_default_matches_double_and_add() {
        let base = Affine::new(*BASE_X, *BASE_Y);
        let scalar = Fr::from_u64(111111);
        let via_trait = CurvePoint::mult(&base, &scalar);
        let via_free_fn = scalar_mul::double_and_add(&base, &scalar);
        assert_eq!(via_trait, via_free_fn);
    }

    #[test]
    fn compress_decompress_matches_hash_to_point() {
        let p = hash_to_point(b"eddsa_base");
        let packed = compress(&p);
        let unpacked = decompress(&packed).unwrap();
        assert_eq!(p, unpacked);
    }
}

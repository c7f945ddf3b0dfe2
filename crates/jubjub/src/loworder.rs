//! Enumeration of the curve's low-order points: the 8 points whose order
//! divides the cofactor `h = 8`. These matter for subgroup-membership
//! checks — a point a caller receives from an untrusted source may satisfy
//! the curve equation yet lie outside the prime-order subgroup by a
//! low-order component.

use crate::affine::Affine;
use crate::constants::COFACTOR;

/// Returns all 8 points of order dividing `h`, including the identity.
///
/// Found the way the reference low-order-point search does it: scan `x =
/// 1, 2, 3, ...`, recover a candidate `y`, and keep the first point `T`
/// found with order exactly `h` (i.e. `h·T = O` but `(h/2)·T ≠ O`). Since
/// these points form a cyclic group of order `h` under addition, the full
/// set is just `T`'s multiples.
pub fn all_loworder_points() -> Vec<Affine> {
    let generator = find_order_h_point();
    let mut points = Vec::with_capacity(COFACTOR as usize);
    let mut acc = Affine::infinity();
    for _ in 0..COFACTOR {
        points.push(acc);
        acc = acc.add(&generator);
    }
    points
}

fn find_order_h_point() -> Affine {
    use jubjub_fields::Fq;

    let mut x = Fq::one();
    loop {
        if let Ok(candidate) = Affine::from_x(x, false) {
            if has_order_exactly_h(&candidate) {
                return candidate;
            }
        }
        x = x + Fq::one();
    }
}

fn has_order_exactly_h(p: &Affine) -> bool {
    let mut h_times = Affine::infinity();
    let mut half_times = Affine::infinity();
    for i in 1..=COFACTOR {
        h_times = h_times.add(p);
        if i == COFACTOR / 2 {
            half_times = h_times;
        }
    }
    h_times.is_infinity() && !half_times.is_infinity()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn low_order_points_form_the_cofactor_subgroup() {
        let points = all_loworder_points();
        assert_eq!(points.len(), COFACTOR as usize);
        assert!(points[0].is_infinity());
        for p in &points {
            assert!(p.is_valid());
            let mut h_times = Affine::infinity();
            for _ in 0..COFACTOR {
                h_times = h_times.add(p);
            }
            assert!(h_times.is_infinity(), "every low-order point is annihilated by h");
        }
    }

    #[test]
    fn low_order_points_are_pairwise_distinct() {
        let points = all_loworder_points();
        for i in 0..points.len() {
            for j in (i + 1)..points.len() {
                assert_ne!(points[i], points[j]);
            }
        }
    }
}

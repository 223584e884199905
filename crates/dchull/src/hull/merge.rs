//! Stitching two side-by-side hulls into one along their tangents.

use super::error::{HullError, HullSide};
use super::types::{Hull, Tangent};

/// Stitch two hulls along their upper and lower tangents.
///
/// Walks `right` forward from `upper.right` to `lower.right`, then `left`
/// forward from `lower.left` to `upper.left` (both inclusive). Points cut off
/// between the tangents are never visited. The result is only convex when the
/// tangents really support both hulls.
pub fn merge(left: &Hull, right: &Hull, upper: Tangent, lower: Tangent) -> Result<Hull, HullError> {
    check_index(left, HullSide::Left, upper.left)?;
    check_index(left, HullSide::Left, lower.left)?;
    check_index(right, HullSide::Right, upper.right)?;
    check_index(right, HullSide::Right, lower.right)?;

    let mut pts = Vec::with_capacity(left.len() + right.len());
    collect_arc(right, upper.right, lower.right, &mut pts);
    collect_arc(left, lower.left, upper.left, &mut pts);
    Ok(Hull::from_boundary_unchecked(pts))
}

fn check_index(h: &Hull, side: HullSide, index: usize) -> Result<(), HullError> {
    if index < h.len() {
        Ok(())
    } else {
        Err(HullError::TangentOutOfRange {
            hull: side,
            index,
            len: h.len(),
        })
    }
}

/// Push `h[from..=to]` cyclically.
fn collect_arc(
    h: &Hull,
    from: usize,
    to: usize,
    out: &mut Vec<nalgebra::Vector2<f64>>,
) {
    let mut i = from;
    while i != to {
        out.push(h.get(i));
        i = h.next(i);
    }
    out.push(h.get(to));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hull::Phase;
    use nalgebra::{vector, Vector2};

    fn hull(pts: &[(f64, f64)]) -> Hull {
        Hull::from_boundary_unchecked(pts.iter().map(|&(x, y)| Vector2::new(x, y)).collect())
    }

    #[test]
    fn merges_two_squares_and_drops_inner_points() {
        let l = hull(&[(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0)]);
        let r = hull(&[(3.0, 0.0), (3.0, 1.0), (4.0, 1.0), (4.0, 0.0)]);
        let upper = Tangent::new(1, 2);
        let lower = Tangent::new(0, 3);
        let m = merge(&l, &r, upper, lower).unwrap();
        assert_eq!(
            m.points(),
            &[
                vector![4.0, 1.0],
                vector![4.0, 0.0],
                vector![0.0, 0.0],
                vector![0.0, 1.0]
            ]
        );
        assert!(m.signed_area() < 0.0);
    }

    #[test]
    fn wraps_around_the_stored_order() {
        // right hull walk 2 -> 0 wraps through index 0
        let l = hull(&[(0.0, 0.0)]);
        let r = hull(&[(2.0, -1.0), (1.0, 1.0), (2.0, 1.0)]);
        let m = merge(&l, &r, Tangent::new(0, 2), Tangent::new(0, 0)).unwrap();
        assert_eq!(
            m.points(),
            &[vector![2.0, 1.0], vector![2.0, -1.0], vector![0.0, 0.0]]
        );
    }

    #[test]
    fn shared_endpoints_collapse() {
        let l = hull(&[(0.0, 0.0)]);
        let r = hull(&[(3.0, 0.0)]);
        let t = Tangent::new(0, 0);
        let m = merge(&l, &r, t, t).unwrap();
        assert_eq!(m.points(), &[vector![3.0, 0.0], vector![0.0, 0.0]]);
    }

    #[test]
    fn out_of_range_tangent_is_rejected() {
        let l = hull(&[(0.0, 0.0), (0.0, 1.0)]);
        let r = hull(&[(3.0, 0.0)]);
        let err = merge(&l, &r, Tangent::new(0, 1), Tangent::new(0, 0)).unwrap_err();
        assert_eq!(
            err,
            HullError::TangentOutOfRange {
                hull: HullSide::Right,
                index: 1,
                len: 1
            }
        );
        assert_eq!(err.phase(), Phase::Merge);
    }
}

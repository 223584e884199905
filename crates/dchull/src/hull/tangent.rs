//! Upper/lower tangent search between two side-by-side hulls.
//!
//! Both hulls are clockwise (y up) and every point of the left hull precedes
//! every point of the right hull in `(x, y)` order. Starting from the facing
//! extreme points, the two indices walk outward in alternation:
//!
//! | side  | left index | left wants | right index | right wants |
//! |-------|------------|------------|-------------|-------------|
//! | upper | backward   | smaller    | forward     | larger      |
//! | lower | forward    | larger     | backward    | smaller     |
//!
//! A step is taken when the slope strictly improves, or when it is unchanged
//! and the step lengthens the tangent (collinear, farther point). Each index
//! only moves along one chain of its hull, so the number of moves is bounded
//! by `|L| + |R|`; exceeding that is reported instead of looping.

use std::cmp::Ordering;
use std::fmt;

use super::error::{HullError, HullSide};
use super::slope::Slope;
use super::types::{lex_less, Hull, Tangent};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TangentSide {
    Upper,
    Lower,
}

impl fmt::Display for TangentSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TangentSide::Upper => "upper",
            TangentSide::Lower => "lower",
        })
    }
}

impl TangentSide {
    #[inline]
    fn step_left(self, h: &Hull, i: usize) -> usize {
        match self {
            TangentSide::Upper => h.prev(i),
            TangentSide::Lower => h.next(i),
        }
    }

    #[inline]
    fn step_right(self, h: &Hull, j: usize) -> usize {
        match self {
            TangentSide::Upper => h.next(j),
            TangentSide::Lower => h.prev(j),
        }
    }

    /// Direction in which a left-index step must move the slope.
    #[inline]
    fn left_wants(self) -> Ordering {
        match self {
            TangentSide::Upper => Ordering::Less,
            TangentSide::Lower => Ordering::Greater,
        }
    }

    #[inline]
    fn right_wants(self) -> Ordering {
        self.left_wants().reverse()
    }
}

/// Upper tangent: every point of both hulls lies on or below the line.
///
/// `l_start`/`r_start` are cyclic indices, usually the rightmost point of
/// `left` and the leftmost point of `right`.
///
/// Pre: both hulls are clockwise and every point of `left` precedes every
/// point of `right` in `(x, y)` order. Hulls whose extremes overlap are
/// rejected with [`HullError::HullsOverlap`].
pub fn upper_tangent(
    left: &Hull,
    right: &Hull,
    l_start: usize,
    r_start: usize,
) -> Result<Tangent, HullError> {
    search(left, right, l_start, r_start, TangentSide::Upper)
}

/// Lower tangent: every point of both hulls lies on or above the line.
///
/// Same preconditions as [`upper_tangent`].
pub fn lower_tangent(
    left: &Hull,
    right: &Hull,
    l_start: usize,
    r_start: usize,
) -> Result<Tangent, HullError> {
    search(left, right, l_start, r_start, TangentSide::Lower)
}

fn search(
    left: &Hull,
    right: &Hull,
    l_start: usize,
    r_start: usize,
    side: TangentSide,
) -> Result<Tangent, HullError> {
    if left.is_empty() {
        return Err(HullError::EmptyHull {
            hull: HullSide::Left,
        });
    }
    if right.is_empty() {
        return Err(HullError::EmptyHull {
            hull: HullSide::Right,
        });
    }
    let (l_max, r_min) = (left.get(left.rightmost()), right.get(right.leftmost()));
    if !lex_less(&l_max, &r_min) {
        return Err(HullError::HullsOverlap {
            left_max: (l_max.x, l_max.y),
            right_min: (r_min.x, r_min.y),
        });
    }
    let mut w = Walk {
        left,
        right,
        side,
        l: l_start % left.len(),
        r: r_start % right.len(),
        moves: 0,
        cap: left.len() + right.len(),
    };
    loop {
        w.walk_left()?;
        if w.right_candidate().is_none() {
            break;
        }
        w.walk_right()?;
        if w.left_candidate().is_none() {
            break;
        }
    }
    Ok(Tangent::new(w.l, w.r))
}

struct Walk<'a> {
    left: &'a Hull,
    right: &'a Hull,
    side: TangentSide,
    l: usize,
    r: usize,
    moves: usize,
    cap: usize,
}

impl Walk<'_> {
    /// Next left index if stepping it improves the tangent.
    fn left_candidate(&self) -> Option<usize> {
        let cand = self.side.step_left(self.left, self.l);
        let p = self.left.get(self.l);
        let p_new = self.left.get(cand);
        let q = self.right.get(self.r);
        let longer = (q - p_new).norm_squared() > (q - p).norm_squared();
        improves(
            Slope::between(p_new, q),
            Slope::between(p, q),
            self.side.left_wants(),
            longer,
        )
        .then_some(cand)
    }

    fn right_candidate(&self) -> Option<usize> {
        let cand = self.side.step_right(self.right, self.r);
        let p = self.left.get(self.l);
        let q = self.right.get(self.r);
        let q_new = self.right.get(cand);
        let longer = (q_new - p).norm_squared() > (q - p).norm_squared();
        improves(
            Slope::between(p, q_new),
            Slope::between(p, q),
            self.side.right_wants(),
            longer,
        )
        .then_some(cand)
    }

    fn walk_left(&mut self) -> Result<(), HullError> {
        while let Some(l) = self.left_candidate() {
            self.l = l;
            self.bump()?;
        }
        Ok(())
    }

    fn walk_right(&mut self) -> Result<(), HullError> {
        while let Some(r) = self.right_candidate() {
            self.r = r;
            self.bump()?;
        }
        Ok(())
    }

    fn bump(&mut self) -> Result<(), HullError> {
        self.moves += 1;
        if self.moves > self.cap {
            tracing::warn!(
                side = %self.side,
                left_len = self.left.len(),
                right_len = self.right.len(),
                "tangent search exceeded its move budget"
            );
            return Err(HullError::TangentDidNotConverge {
                side: self.side,
                left_len: self.left.len(),
                right_len: self.right.len(),
            });
        }
        Ok(())
    }
}

/// Strictly better slope, or an equal slope on a longer segment.
#[inline]
fn improves(cand: Slope, cur: Slope, wants: Ordering, longer: bool) -> bool {
    match cand.partial_cmp(&cur) {
        Some(Ordering::Equal) => longer,
        Some(o) => o == wants,
        None => false,
    }
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
    fn squares_side_by_side() {
        // clockwise squares: [0,1]^2 and [3,4]^2
        let l = hull(&[(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0)]);
        let r = hull(&[(3.0, 0.0), (3.0, 1.0), (4.0, 1.0), (4.0, 0.0)]);
        let (ls, rs) = (l.rightmost(), r.leftmost());
        assert_eq!((ls, rs), (2, 0));
        // collinear top edge: the tangent spans (0,1) -> (4,1)
        let up = upper_tangent(&l, &r, ls, rs).unwrap();
        assert_eq!(l.get(up.left), vector![0.0, 1.0]);
        assert_eq!(r.get(up.right), vector![4.0, 1.0]);
        let lo = lower_tangent(&l, &r, ls, rs).unwrap();
        assert_eq!(l.get(lo.left), vector![0.0, 0.0]);
        assert_eq!(r.get(lo.right), vector![4.0, 0.0]);
    }

    #[test]
    fn triangles_with_different_heights() {
        let l = hull(&[(0.0, 0.0), (1.0, 5.0), (2.0, 0.0)]);
        let r = hull(&[(3.0, -4.0), (4.0, 1.0), (5.0, -1.0)]);
        let up = upper_tangent(&l, &r, l.rightmost(), r.leftmost()).unwrap();
        assert_eq!(l.get(up.left), vector![1.0, 5.0]);
        assert_eq!(r.get(up.right), vector![4.0, 1.0]);
        let lo = lower_tangent(&l, &r, l.rightmost(), r.leftmost()).unwrap();
        assert_eq!(l.get(lo.left), vector![0.0, 0.0]);
        assert_eq!(r.get(lo.right), vector![3.0, -4.0]);
    }

    #[test]
    fn vertical_anchor_segment() {
        // left anchor (1,0) sits directly below right anchor (1,1)
        let l = hull(&[(0.0, 0.0), (1.0, 0.0)]);
        let r = hull(&[(1.0, 1.0), (2.0, 0.0)]);
        let up = upper_tangent(&l, &r, 1, 0).unwrap();
        assert_eq!((l.get(up.left), r.get(up.right)), (vector![0.0, 0.0], vector![1.0, 1.0]));
        let lo = lower_tangent(&l, &r, 1, 0).unwrap();
        assert_eq!((l.get(lo.left), r.get(lo.right)), (vector![0.0, 0.0], vector![2.0, 0.0]));
    }

    #[test]
    fn single_points_are_their_own_tangent() {
        let l = hull(&[(0.0, 0.0)]);
        let r = hull(&[(1.0, 2.0)]);
        assert_eq!(upper_tangent(&l, &r, 0, 0).unwrap(), Tangent::new(0, 0));
        assert_eq!(lower_tangent(&l, &r, 0, 0).unwrap(), Tangent::new(0, 0));
    }

    #[test]
    fn collinear_chains_take_the_far_ends() {
        let l = hull(&[(0.0, 0.0), (1.0, 0.0)]);
        let r = hull(&[(2.0, 0.0), (3.0, 0.0)]);
        for t in [
            upper_tangent(&l, &r, 1, 0).unwrap(),
            lower_tangent(&l, &r, 1, 0).unwrap(),
        ] {
            assert_eq!(t, Tangent::new(0, 1));
        }
    }

    #[test]
    fn empty_hull_is_rejected() {
        let l = hull(&[]);
        let r = hull(&[(1.0, 2.0)]);
        let err = upper_tangent(&l, &r, 0, 0).unwrap_err();
        assert_eq!(
            err,
            HullError::EmptyHull {
                hull: HullSide::Left
            }
        );
    }

    #[test]
    fn non_convex_input_hits_the_move_budget() {
        // the left "hull" is not convex, so the upper walk keeps cycling
        let l = hull(&[(0.0, 3.0), (4.0, 5.0), (0.0, 8.0), (0.0, 7.0), (1.0, 4.0)]);
        let r = hull(&[(7.0, 2.0), (6.0, 8.0), (8.0, 0.0)]);
        let err = upper_tangent(&l, &r, 0, 0).unwrap_err();
        assert_eq!(
            err,
            HullError::TangentDidNotConverge {
                side: TangentSide::Upper,
                left_len: 5,
                right_len: 3,
            }
        );
        assert_eq!(err.phase(), Phase::TangentSearch);
        assert!(!err.is_invalid_input());
    }

    #[test]
    fn overlapping_hulls_are_rejected() {
        // left extends past the leftmost point of right
        let l = hull(&[(0.0, 0.0), (0.0, 2.0), (5.0, 1.0)]);
        let r = hull(&[(3.0, 0.0), (3.0, 2.0), (6.0, 1.0)]);
        for err in [
            upper_tangent(&l, &r, 2, 0).unwrap_err(),
            lower_tangent(&l, &r, 2, 0).unwrap_err(),
        ] {
            assert_eq!(
                err,
                HullError::HullsOverlap {
                    left_max: (5.0, 1.0),
                    right_min: (3.0, 0.0),
                }
            );
            assert_eq!(err.phase(), Phase::TangentSearch);
            assert!(err.is_invalid_input());
        }
    }

    #[test]
    fn shared_x_is_not_an_overlap() {
        let l = hull(&[(1.0, 0.0)]);
        let r = hull(&[(1.0, 1.0)]);
        assert_eq!(upper_tangent(&l, &r, 0, 0).unwrap(), Tangent::new(0, 0));
    }

    #[test]
    fn display_names() {
        assert_eq!(TangentSide::Upper.to_string(), "upper");
        assert_eq!(TangentSide::Lower.to_string(), "lower");
    }
}

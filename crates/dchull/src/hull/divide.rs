//! Recursive divide step: split, recurse, find tangents, merge.

use nalgebra::Vector2;

use super::error::HullError;
use super::merge::merge;
use super::sink::Segment;
use super::sort::check_sorted;
use super::tangent::{lower_tangent, upper_tangent};
use super::types::{Hull, HullCfg};

/// Hull of points already sorted by strictly increasing `(x, y)`.
///
/// Fewer than 3 points are returned verbatim. Use
/// [`compute_convex_hull`](super::compute_convex_hull) for raw input.
pub fn compute_hull(sorted: &[Vector2<f64>]) -> Result<Hull, HullError> {
    Ok(build(sorted, &HullCfg::default())?.hull)
}

/// Tangents found while merging one split, as display segments.
#[derive(Clone, Copy, Debug)]
pub(crate) struct MergeStep {
    pub upper: Segment,
    pub lower: Segment,
}

#[derive(Debug)]
pub(crate) struct Built {
    pub hull: Hull,
    /// Post-order (left subtree, right subtree, this merge); empty unless
    /// `cfg.emit_tangents`.
    pub steps: Vec<MergeStep>,
}

pub(crate) fn build(sorted: &[Vector2<f64>], cfg: &HullCfg) -> Result<Built, HullError> {
    check_sorted(sorted)?;
    divide(sorted, cfg)
}

fn divide(pts: &[Vector2<f64>], cfg: &HullCfg) -> Result<Built, HullError> {
    let n = pts.len();
    if n < 3 {
        return Ok(Built {
            hull: Hull::from_boundary_unchecked(pts.to_vec()),
            steps: Vec::new(),
        });
    }
    let (lo, hi) = pts.split_at(n / 2);
    let (left, right) = if n >= cfg.parallel_cutoff {
        let (l, r) = rayon::join(|| divide(lo, cfg), || divide(hi, cfg));
        (l?, r?)
    } else {
        (divide(lo, cfg)?, divide(hi, cfg)?)
    };

    let (l_anchor, r_anchor) = (left.hull.rightmost(), right.hull.leftmost());
    let upper = upper_tangent(&left.hull, &right.hull, l_anchor, r_anchor)?;
    let lower = lower_tangent(&left.hull, &right.hull, l_anchor, r_anchor)?;
    let hull = merge(&left.hull, &right.hull, upper, lower)?;

    let mut steps = Vec::new();
    if cfg.emit_tangents {
        steps.reserve(left.steps.len() + right.steps.len() + 1);
        steps.extend(left.steps);
        steps.extend(right.steps);
        steps.push(MergeStep {
            upper: Segment::new(left.hull.get(upper.left), right.hull.get(upper.right)),
            lower: Segment::new(left.hull.get(lower.left), right.hull.get(lower.right)),
        });
    }
    Ok(Built { hull, steps })
}

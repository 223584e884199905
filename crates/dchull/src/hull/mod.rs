//! Divide-and-conquer convex hull (sort → split → tangents → merge).
//!
//! Purpose
//! - Compute the convex hull of a finite planar point set as an ordered,
//!   cyclic boundary in O(n log n).
//!
//! Pipeline
//! - `sort::sort_by_x` validates the input and orders it by `(x, y)`.
//! - `divide::compute_hull` splits the sorted slice at `n/2`, recurses, and
//!   seeds the tangent search at the facing extreme points of the two halves.
//! - `tangent::{upper_tangent, lower_tangent}` walk both sub-hulls until the
//!   joining segment supports both.
//! - `merge::merge` stitches the two boundaries along the tangents.
//!
//! Conventions
//! - y points up. Merged hulls are stored clockwise (`signed_area() < 0`);
//!   on a y-down display canvas this reads as counterclockwise.
//! - Sub-problems of fewer than 3 points are returned verbatim.
//! - Collinear boundary points are dropped: ties in the tangent walk move to
//!   the collinear point that lengthens the tangent.
//! - Slopes never divide; a vertical joining segment is `+∞` (see `slope`).
//!
//! Code cross-refs: `Hull`, `Tangent`, `HullCfg`, `HullSink`, `HullError`

mod divide;
mod error;
mod merge;
mod sink;
mod slope;
mod sort;
mod tangent;
mod types;

pub use divide::compute_hull;
pub use error::{HullError, HullSide, Phase};
pub use merge::merge;
pub use sink::{HullSink, NoopSink, RecordingSink, Rgb, Segment};
pub use slope::Slope;
pub use sort::sort_by_x;
pub use tangent::{lower_tangent, upper_tangent, TangentSide};
pub use types::{Hull, HullCfg, Tangent};

use nalgebra::Vector2;

/// Convex hull of an arbitrary (unsorted) point set.
///
/// Fails fast on empty input, non-finite coordinates, or duplicate points.
pub fn compute_convex_hull(points: &[Vector2<f64>]) -> Result<Hull, HullError> {
    compute_convex_hull_with(points, &HullCfg::default(), &mut NoopSink)
}

/// Convex hull with explicit configuration and a visualization sink.
///
/// The sink only sees the finished result: merge tangents (if
/// `cfg.emit_tangents`) in post-order of the recursion, then the hull
/// boundary. It cannot influence or fail the computation.
pub fn compute_convex_hull_with(
    points: &[Vector2<f64>],
    cfg: &HullCfg,
    sink: &mut dyn HullSink,
) -> Result<Hull, HullError> {
    let sorted = sort::sort_by_x(points)?;
    let built = divide::build(&sorted, cfg)?;
    tracing::debug!(
        input = points.len(),
        hull = built.hull.len(),
        merges = built.steps.len(),
        "convex hull computed"
    );
    for step in &built.steps {
        sink.tangent(step.upper, Rgb::GREEN);
        sink.tangent(step.lower, Rgb::BLUE);
    }
    sink.hull(&built.hull.segments(), Rgb::RED);
    Ok(built.hull)
}

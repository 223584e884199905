//! Hull, tangent and configuration types.
//!
//! - `Hull`: immutable cyclic boundary; indices wrap modulo its length.
//! - `Tangent`: index pair into a left and a right hull.
//! - `HullCfg`: knobs that never change the computed boundary.

use nalgebra::Vector2;

use super::sink::Segment;
use crate::geometry::orient;

/// Ordered, cyclic boundary of a convex polygon.
///
/// Invariants (for hulls produced by this module):
/// - Every point is an input point; no two are equal.
/// - 1 or 2 points for identical/collinear inputs, otherwise a strictly convex
///   polygon stored clockwise (y up).
#[derive(Clone, Debug, PartialEq)]
pub struct Hull {
    pts: Vec<Vector2<f64>>,
}

impl Hull {
    /// Wrap an already ordered boundary without any checks.
    ///
    /// Used for base cases, merge output and hand-built hulls in tests;
    /// tangent search and merge assume the clockwise convention above.
    #[inline]
    pub(crate) fn from_boundary_unchecked(pts: Vec<Vector2<f64>>) -> Self {
        Self { pts }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.pts.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pts.is_empty()
    }

    #[inline]
    pub fn points(&self) -> &[Vector2<f64>] {
        &self.pts
    }

    #[inline]
    pub fn into_points(self) -> Vec<Vector2<f64>> {
        self.pts
    }

    /// Point at cyclic index `i`.
    ///
    /// Hulls built by the pipeline are never empty; only crate-internal
    /// hand-built hulls can be, and they panic here.
    #[inline]
    pub fn get(&self, i: usize) -> Vector2<f64> {
        self.pts[i % self.pts.len()]
    }

    #[inline]
    pub(crate) fn next(&self, i: usize) -> usize {
        (i + 1) % self.pts.len()
    }

    #[inline]
    pub(crate) fn prev(&self, i: usize) -> usize {
        (i + self.pts.len() - 1) % self.pts.len()
    }

    /// Index of the point with the largest `(x, y)`.
    pub(crate) fn rightmost(&self) -> usize {
        extreme_by(&self.pts, |a, b| lex_less(b, a))
    }

    /// Index of the point with the smallest `(x, y)`.
    pub(crate) fn leftmost(&self) -> usize {
        extreme_by(&self.pts, lex_less)
    }

    /// Closed polyline of boundary segments; a 2-point hull yields one
    /// segment, a single point none.
    pub fn segments(&self) -> Vec<Segment> {
        match self.pts.len() {
            0 | 1 => Vec::new(),
            2 => vec![Segment::new(self.pts[0], self.pts[1])],
            n => (0..n)
                .map(|i| Segment::new(self.pts[i], self.pts[(i + 1) % n]))
                .collect(),
        }
    }

    /// Shoelace area; negative for the clockwise convention.
    pub fn signed_area(&self) -> f64 {
        let n = self.pts.len();
        if n < 3 {
            return 0.0;
        }
        let mut a = 0.0;
        for i in 0..n {
            let p = self.pts[i];
            let q = self.pts[(i + 1) % n];
            a += p.x * q.y - q.x * p.y;
        }
        0.5 * a
    }

    /// All consecutive triples turn clockwise (orientation `<= eps`).
    pub fn is_convex(&self, eps: f64) -> bool {
        let n = self.pts.len();
        if n < 3 {
            return true;
        }
        (0..n).all(|i| orient(self.pts[i], self.pts[(i + 1) % n], self.pts[(i + 2) % n]) <= eps)
    }

    /// Membership with slack `eps` (closed hull; `eps > 0` is permissive).
    ///
    /// Degenerate hulls test distance to the point or segment instead.
    pub fn contains_eps(&self, p: Vector2<f64>, eps: f64) -> bool {
        match self.pts.len() {
            0 => false,
            1 => (p - self.pts[0]).norm() <= eps,
            2 => dist_to_segment(p, self.pts[0], self.pts[1]) <= eps,
            n => (0..n).all(|i| {
                let a = self.pts[i];
                let b = self.pts[(i + 1) % n];
                // clockwise: inside is to the right of every edge
                orient(a, b, p) <= eps * (b - a).norm()
            }),
        }
    }

    /// Same boundary rotated to start at its smallest `(x, y)` point.
    ///
    /// Two hulls of the same point set compare equal after this.
    pub fn canonical(&self) -> Hull {
        if self.pts.is_empty() {
            return self.clone();
        }
        let start = self.leftmost();
        let mut pts = Vec::with_capacity(self.pts.len());
        pts.extend_from_slice(&self.pts[start..]);
        pts.extend_from_slice(&self.pts[..start]);
        Hull { pts }
    }
}

/// Tangent between a left and a right hull: `left` indexes the left hull,
/// `right` the right hull.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tangent {
    pub left: usize,
    pub right: usize,
}

impl Tangent {
    #[inline]
    pub fn new(left: usize, right: usize) -> Self {
        Self { left, right }
    }
}

/// Builder configuration.
///
/// Neither knob changes the computed hull.
#[derive(Clone, Copy, Debug)]
pub struct HullCfg {
    /// Sub-problems with at least this many points run their two halves with
    /// `rayon::join`. `usize::MAX` keeps everything on the calling thread.
    pub parallel_cutoff: usize,
    /// Record each merge's upper/lower tangent for the sink.
    pub emit_tangents: bool,
}

impl Default for HullCfg {
    fn default() -> Self {
        Self {
            parallel_cutoff: usize::MAX,
            emit_tangents: false,
        }
    }
}

impl HullCfg {
    /// Parallel recursion for sub-problems of at least 4096 points.
    pub fn parallel() -> Self {
        Self {
            parallel_cutoff: 4096,
            ..Self::default()
        }
    }
}

#[inline]
pub(crate) fn lex_less(a: &Vector2<f64>, b: &Vector2<f64>) -> bool {
    a.x < b.x || (a.x == b.x && a.y < b.y)
}

fn extreme_by<F>(pts: &[Vector2<f64>], better: F) -> usize
where
    F: Fn(&Vector2<f64>, &Vector2<f64>) -> bool,
{
    let mut best = 0;
    for (i, p) in pts.iter().enumerate().skip(1) {
        if better(p, &pts[best]) {
            best = i;
        }
    }
    best
}

fn dist_to_segment(p: Vector2<f64>, a: Vector2<f64>, b: Vector2<f64>) -> f64 {
    let ab = b - a;
    let len2 = ab.norm_squared();
    if len2 == 0.0 {
        return (p - a).norm();
    }
    let t = ((p - a).dot(&ab) / len2).clamp(0.0, 1.0);
    (p - (a + ab * t)).norm()
}

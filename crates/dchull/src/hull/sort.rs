//! Input validation and `(x, y)` ordering, the first phase of the pipeline.

use std::cmp::Ordering;

use nalgebra::Vector2;

use super::error::HullError;
use super::types::lex_less;

/// Validate and order points by `(x, y)`.
///
/// Fails on empty input, non-finite coordinates, or duplicate points. The
/// y tie-break makes the order total, so results are reproducible for any
/// input permutation.
pub fn sort_by_x(points: &[Vector2<f64>]) -> Result<Vec<Vector2<f64>>, HullError> {
    if points.is_empty() {
        return Err(HullError::Empty);
    }
    if let Some((index, p)) = points
        .iter()
        .enumerate()
        .find(|(_, p)| !(p.x.is_finite() && p.y.is_finite()))
    {
        return Err(HullError::NonFinite {
            index,
            x: p.x,
            y: p.y,
        });
    }
    let mut pts = points.to_vec();
    // total for finite coordinates
    pts.sort_unstable_by(|a, b| cmp_xy(a, b));
    if let Some(w) = pts.windows(2).find(|w| w[0] == w[1]) {
        return Err(HullError::Duplicate {
            x: w[0].x,
            y: w[0].y,
        });
    }
    Ok(pts)
}

/// Check the builder precondition: strictly increasing `(x, y)`.
pub(crate) fn check_sorted(points: &[Vector2<f64>]) -> Result<(), HullError> {
    if points.is_empty() {
        return Err(HullError::Empty);
    }
    match points.windows(2).position(|w| !lex_less(&w[0], &w[1])) {
        Some(i) => Err(HullError::Unsorted { index: i + 1 }),
        None => Ok(()),
    }
}

#[inline]
fn cmp_xy(a: &Vector2<f64>, b: &Vector2<f64>) -> Ordering {
    match a.x.partial_cmp(&b.x).unwrap_or(Ordering::Equal) {
        Ordering::Equal => a.y.partial_cmp(&b.y).unwrap_or(Ordering::Equal),
        o => o,
    }
}

//! Division-free slopes of segments joining a left point to a right point.

use std::cmp::Ordering;

use nalgebra::Vector2;

/// Slope `rise / run` of the segment from `p` to `q`, kept as a fraction.
///
/// Pre: `p` precedes `q` in `(x, y)` order, so `run >= 0`, and `run == 0`
/// implies `rise > 0`. A vertical segment therefore always points up and
/// compares as `+∞`. Comparisons cross-multiply and never divide.
#[derive(Clone, Copy, Debug)]
pub struct Slope {
    rise: f64,
    run: f64,
}

impl Slope {
    #[inline]
    pub fn between(p: Vector2<f64>, q: Vector2<f64>) -> Self {
        debug_assert!(
            p.x < q.x || (p.x == q.x && p.y < q.y),
            "slope endpoints out of order"
        );
        Self {
            rise: q.y - p.y,
            run: q.x - p.x,
        }
    }

    #[inline]
    pub fn is_vertical(&self) -> bool {
        self.run == 0.0
    }

    /// Numeric value; `f64::INFINITY` for vertical segments.
    pub fn value(&self) -> f64 {
        if self.is_vertical() {
            f64::INFINITY
        } else {
            self.rise / self.run
        }
    }
}

impl PartialEq for Slope {
    fn eq(&self, other: &Self) -> bool {
        self.partial_cmp(other) == Some(Ordering::Equal)
    }
}

impl PartialOrd for Slope {
    // rise_a/run_a < rise_b/run_b  <=>  rise_a*run_b < rise_b*run_a  (runs >= 0)
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        (self.rise * other.run).partial_cmp(&(other.rise * self.run))
    }
}

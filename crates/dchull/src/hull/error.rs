//! Error taxonomy of the hull pipeline, tagged with the phase it came from.

use std::fmt;

use super::tangent::TangentSide;

/// Stage of the hull pipeline an error originated from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Sort,
    Recurse,
    TangentSearch,
    Merge,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Phase::Sort => "sort",
            Phase::Recurse => "recurse",
            Phase::TangentSearch => "tangent-search",
            Phase::Merge => "merge",
        };
        f.write_str(s)
    }
}

/// Which of the two sub-hulls of a merge an index refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HullSide {
    Left,
    Right,
}

impl fmt::Display for HullSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            HullSide::Left => "left",
            HullSide::Right => "right",
        })
    }
}

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum HullError {
    #[error("empty point set")]
    Empty,

    #[error("point {index} has a non-finite coordinate ({x}, {y})")]
    NonFinite { index: usize, x: f64, y: f64 },

    #[error("duplicate point ({x}, {y})")]
    Duplicate { x: f64, y: f64 },

    #[error("points are not sorted by (x, y) at index {index}")]
    Unsorted { index: usize },

    #[error("{side} tangent did not converge (left hull: {left_len} points, right hull: {right_len} points)")]
    TangentDidNotConverge {
        side: TangentSide,
        left_len: usize,
        right_len: usize,
    },

    #[error("left hull reaches {left_max:?}, past the right hull's first point {right_min:?}")]
    HullsOverlap {
        left_max: (f64, f64),
        right_min: (f64, f64),
    },

    #[error("cannot search a tangent on an empty {hull} hull")]
    EmptyHull { hull: HullSide },

    #[error("tangent index {index} out of range for {hull} hull of {len} points")]
    TangentOutOfRange {
        hull: HullSide,
        index: usize,
        len: usize,
    },
}

impl HullError {
    pub fn phase(&self) -> Phase {
        match self {
            HullError::Empty | HullError::NonFinite { .. } | HullError::Duplicate { .. } => {
                Phase::Sort
            }
            HullError::Unsorted { .. } => Phase::Recurse,
            HullError::EmptyHull { .. }
            | HullError::HullsOverlap { .. }
            | HullError::TangentDidNotConverge { .. } => Phase::TangentSearch,
            HullError::TangentOutOfRange { .. } => Phase::Merge,
        }
    }

    /// Caller-side precondition violation (as opposed to a numerical failure).
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            HullError::Empty
                | HullError::NonFinite { .. }
                | HullError::Duplicate { .. }
                | HullError::Unsorted { .. }
                | HullError::HullsOverlap { .. }
        )
    }
}

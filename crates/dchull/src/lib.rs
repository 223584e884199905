//! Divide-and-conquer convex hulls in the plane.
//!
//! Cross-refs live in doc comments:
//! - `hull`: sorter, recursive builder, tangent search and merge.
//! - `geometry`: signed-area predicates shared by the hull helpers.
//! - `rand2`: deterministic point samplers for tests, benches and the CLI.
//!
//! API Policy
//! - The crate is consumed by the workspace `cli` and by benches. There is no
//!   stable public API; prefer clarity over compatibility.

pub mod geometry;
pub mod hull;
pub mod rand2;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use hull::{
    compute_convex_hull, compute_convex_hull_with, compute_hull, Hull, HullCfg, HullError,
    HullSink, Phase, Rgb, Segment, Tangent,
};
pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::geometry::{orient, parallelogram_area};
    pub use crate::hull::{
        compute_convex_hull, compute_convex_hull_with, compute_hull, lower_tangent, merge,
        sort_by_x, upper_tangent, Hull, HullCfg, HullError, HullSink, NoopSink, Phase,
        RecordingSink, Rgb, Segment, Tangent, TangentSide,
    };
    pub use crate::rand2::{sample_disk, with_axis_extremes, DiskCfg, ReplayToken};
    pub use nalgebra::Vector2 as Vec2;
}

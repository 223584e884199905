//! Random planar point sets (uniform disk samples + replay tokens).
//!
//! Purpose
//! - Small, deterministic samplers for hull tests, benches and the CLI
//!   `sample` command.
//!
//! Model
//! - Points are uniform in the open disk of the given radius (area-uniform:
//!   `r = R·sqrt(u)`, `u ∈ [0, 1)`).
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Disk sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct DiskCfg {
    pub count: usize,
    pub radius: f64,
}

impl Default for DiskCfg {
    fn default() -> Self {
        Self {
            count: 1000,
            radius: 10.0,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw `cfg.count` points uniformly from the open disk of radius `cfg.radius`.
///
/// Samples stay off the circle itself; callers that need known hull vertices
/// add them via [`with_axis_extremes`].
pub fn sample_disk(cfg: DiskCfg, tok: ReplayToken) -> Vec<Vector2<f64>> {
    let mut rng = tok.to_std_rng();
    let r0 = cfg.radius.max(0.0);
    (0..cfg.count)
        .map(|_| {
            let th = rng.gen::<f64>() * std::f64::consts::TAU;
            let r = r0 * rng.gen::<f64>().sqrt();
            Vector2::new(th.cos() * r, th.sin() * r)
        })
        .collect()
}

/// Append the four axis extremes `(±r, 0)` and `(0, ±r)`.
///
/// Samples that coincide with an extreme are dropped first so the result
/// stays duplicate-free.
pub fn with_axis_extremes(mut points: Vec<Vector2<f64>>, r: f64) -> Vec<Vector2<f64>> {
    let extremes = [
        Vector2::new(r, 0.0),
        Vector2::new(-r, 0.0),
        Vector2::new(0.0, r),
        Vector2::new(0.0, -r),
    ];
    points.retain(|p| !extremes.contains(p));
    points.extend_from_slice(&extremes);
    points
}

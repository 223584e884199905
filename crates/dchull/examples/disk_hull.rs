//! Hull of random disk samples plus the four axis extremes.
//!
//! Usage:
//!   cargo run -p dchull --example disk_hull -- [count] [seed]
//!
//! Prints the hull size and its vertices in stored (clockwise) order.

use dchull::compute_convex_hull;
use dchull::rand2::{sample_disk, with_axis_extremes, DiskCfg, ReplayToken};

fn main() {
    let mut args = std::env::args().skip(1);
    let count = args.next().and_then(|s| s.parse().ok()).unwrap_or(1000);
    let seed = args.next().and_then(|s| s.parse().ok()).unwrap_or(2025);
    let cfg = DiskCfg {
        count,
        radius: 10.0,
    };
    let pts = with_axis_extremes(sample_disk(cfg, ReplayToken { seed, index: 0 }), cfg.radius);
    match compute_convex_hull(&pts) {
        Ok(hull) => {
            println!("input={} hull={}", pts.len(), hull.len());
            for p in hull.points() {
                println!("{:>12.6} {:>12.6}", p.x, p.y);
            }
        }
        Err(e) => eprintln!("hull failed in {} phase: {e}", e.phase()),
    }
}

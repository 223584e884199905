use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use dchull::rand2::{sample_disk, with_axis_extremes, DiskCfg, ReplayToken};
use dchull::{compute_convex_hull_with, HullCfg};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing_subscriber::fmt::SubscriberBuilder;

mod points;
mod view;

use view::{HullReport, SegmentLog};

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Divide-and-conquer convex hull runner")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Compute the hull of a point file (.csv with x,y columns, or .json [[x,y],...])
    Hull {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
        /// Sleep between display events (animation pacing)
        #[arg(long, default_value_t = 0)]
        pause_ms: u64,
        /// Also emit every merge tangent
        #[arg(long)]
        trace: bool,
        /// Split recursion across threads for sub-problems of at least this size
        #[arg(long)]
        parallel_cutoff: Option<usize>,
    },
    /// Write uniform disk samples plus the four axis extremes as CSV
    Sample {
        #[arg(long, default_value_t = 1000)]
        count: usize,
        #[arg(long, default_value_t = 10.0)]
        radius: f64,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long)]
        out: PathBuf,
    },
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Hull {
            input,
            out,
            pause_ms,
            trace,
            parallel_cutoff,
        } => {
            let cfg = HullCfg {
                parallel_cutoff: parallel_cutoff.unwrap_or(usize::MAX),
                emit_tangents: trace,
            };
            hull(&input, &out, cfg, Duration::from_millis(pause_ms))
        }
        Action::Sample {
            count,
            radius,
            seed,
            out,
        } => sample(count, radius, seed, &out),
    }
}

fn hull(input: &Path, out: &Path, cfg: HullCfg, pause: Duration) -> Result<()> {
    tracing::info!(input = %input.display(), out = %out.display(), trace = cfg.emit_tangents, "hull");
    let pts = points::read_points(input)?;

    let mut log = SegmentLog::new(pause);
    let t0 = Instant::now();
    let hull = compute_convex_hull_with(&pts, &cfg, &mut log)
        .with_context(|| format!("computing hull of {}", input.display()))?;
    let elapsed = t0.elapsed();
    tracing::info!(
        points = pts.len(),
        hull = hull.len(),
        elapsed_ms = elapsed.as_secs_f64() * 1e3,
        "Time Elapsed (Convex Hull): {:3.3} sec",
        elapsed.as_secs_f64()
    );

    let report = HullReport::new(pts.len(), &hull, log, elapsed);
    points::ensure_parent(out)?;
    std::fs::write(out, serde_json::to_vec_pretty(&report)?)
        .with_context(|| format!("writing {}", out.display()))?;
    Ok(())
}

fn sample(count: usize, radius: f64, seed: u64, out: &Path) -> Result<()> {
    tracing::info!(count, radius, seed, out = %out.display(), "sample");
    let cfg = DiskCfg { count, radius };
    let pts = with_axis_extremes(sample_disk(cfg, ReplayToken { seed, index: 0 }), radius);
    points::write_csv(out, &pts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use tempfile::tempdir;

    #[test]
    fn sample_then_hull_writes_only_the_report() {
        let dir = tempdir().unwrap();
        let csv = dir.path().join("disk.csv");
        let out = dir.path().join("hull.json");
        sample(50, 10.0, 7, &csv).unwrap();
        let cfg = HullCfg {
            emit_tangents: true,
            ..HullCfg::default()
        };
        hull(&csv, &out, cfg, Duration::ZERO).unwrap();

        let mut names: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().into_string().unwrap())
            .collect();
        names.sort();
        assert_eq!(names, ["disk.csv", "hull.json"]);

        let report: Value = serde_json::from_slice(&std::fs::read(&out).unwrap()).unwrap();
        assert_eq!(report["input_points"], 54);
        let n = report["hull"].as_array().unwrap().len();
        assert!(n >= 4);
        assert_eq!(report["segments"].as_array().unwrap().len(), n);
        assert!(!report["tangents"].as_array().unwrap().is_empty());
        assert!(report["elapsed_ms"].as_f64().unwrap() >= 0.0);
    }
}

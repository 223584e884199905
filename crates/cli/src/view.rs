//! Display side of the runner: collects coloured segments from the hull sink
//! and serializes them with the hull.

use dchull::{Hull, HullSink, Rgb, Segment};
use serde::Serialize;
use std::time::Duration;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ColoredSegment {
    pub a: [f64; 2],
    pub b: [f64; 2],
    pub color: [u8; 3],
}

impl ColoredSegment {
    fn new(s: Segment, c: Rgb) -> Self {
        Self {
            a: [s.a.x, s.a.y],
            b: [s.b.x, s.b.y],
            color: [c.0, c.1, c.2],
        }
    }
}

/// Sink that records display requests, pausing after each one.
pub struct SegmentLog {
    pause: Duration,
    pub tangents: Vec<ColoredSegment>,
    pub hull: Vec<ColoredSegment>,
}

impl SegmentLog {
    pub fn new(pause: Duration) -> Self {
        Self {
            pause,
            tangents: Vec::new(),
            hull: Vec::new(),
        }
    }

    fn wait(&self) {
        if !self.pause.is_zero() {
            std::thread::sleep(self.pause);
        }
    }
}

impl HullSink for SegmentLog {
    fn tangent(&mut self, segment: Segment, color: Rgb) {
        tracing::trace!(?segment, ?color, "tangent");
        self.tangents.push(ColoredSegment::new(segment, color));
        self.wait();
    }

    fn hull(&mut self, segments: &[Segment], color: Rgb) {
        self.hull = segments
            .iter()
            .map(|s| ColoredSegment::new(*s, color))
            .collect();
        self.wait();
    }
}

/// JSON document written by `cli hull`.
#[derive(Debug, Serialize)]
pub struct HullReport {
    pub input_points: usize,
    pub hull: Vec<[f64; 2]>,
    pub segments: Vec<ColoredSegment>,
    pub tangents: Vec<ColoredSegment>,
    pub elapsed_ms: f64,
}

impl HullReport {
    pub fn new(input_points: usize, hull: &Hull, log: SegmentLog, elapsed: Duration) -> Self {
        Self {
            input_points,
            hull: hull.points().iter().map(|p| [p.x, p.y]).collect(),
            segments: log.hull,
            tangents: log.tangents,
            elapsed_ms: elapsed.as_secs_f64() * 1e3,
        }
    }
}

//! Visualization sink: a write-only observer of hull results.
//!
//! The builder never reads anything back from a sink, so attaching one (or
//! not) cannot change the computed hull.

use nalgebra::Vector2;

/// Display colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const RED: Rgb = Rgb(255, 0, 0);
    pub const GREEN: Rgb = Rgb(0, 255, 0);
    pub const BLUE: Rgb = Rgb(0, 0, 255);
}

/// Line segment between two points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub a: Vector2<f64>,
    pub b: Vector2<f64>,
}

impl Segment {
    #[inline]
    pub fn new(a: Vector2<f64>, b: Vector2<f64>) -> Self {
        Self { a, b }
    }
}

/// Receiver for display requests. Both callbacks are fire-and-forget.
///
/// Tangents arrive first (upper in green, lower in blue, one pair per merge),
/// followed by the final hull boundary in red.
pub trait HullSink {
    fn tangent(&mut self, _segment: Segment, _color: Rgb) {}
    fn hull(&mut self, _segments: &[Segment], _color: Rgb) {}
}

/// Sink that discards everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl HullSink for NoopSink {}

/// Sink that keeps every request, in arrival order.
#[derive(Clone, Debug, Default)]
pub struct RecordingSink {
    pub tangents: Vec<(Segment, Rgb)>,
    pub hulls: Vec<(Vec<Segment>, Rgb)>,
}

impl HullSink for RecordingSink {
    fn tangent(&mut self, segment: Segment, color: Rgb) {
        self.tangents.push((segment, color));
    }

    fn hull(&mut self, segments: &[Segment], color: Rgb) {
        self.hulls.push((segments.to_vec(), color));
    }
}

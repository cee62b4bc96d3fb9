//! Point sequence buffer for the gesture in progress.

use crate::canvas::DrawingMode;
use crate::model::{Curve, Point, StrokeStyle};

/// Raw samples of one drawing gesture.
///
/// A stroke only grows while its gesture is active; [`Stroke::finish`]
/// consumes it, so a finished stroke cannot be appended to.
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    mode: DrawingMode,
    points: Vec<Point>,
}

impl Stroke {
    /// Creates an empty stroke for the given mode.
    pub fn new(mode: DrawingMode) -> Self {
        Self {
            mode,
            points: Vec::new(),
        }
    }

    /// Creates a stroke seeded with its first sample.
    pub fn begin(mode: DrawingMode, first: Point) -> Self {
        Self {
            mode,
            points: vec![first],
        }
    }

    pub fn push(&mut self, point: Point) {
        self.points.push(point);
    }

    pub fn mode(&self) -> DrawingMode {
        self.mode
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Freezes the samples into an unsimplified curve.
    pub fn finish(self, style: StrokeStyle) -> Curve {
        Curve::new(self.points, style)
    }
}

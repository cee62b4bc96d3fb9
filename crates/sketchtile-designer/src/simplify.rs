//! # Curve Simplification
//!
//! Reduces a sampled stroke to the vertices needed to stay within a distance
//! tolerance of the original, using Douglas–Peucker splitting: the sample that
//! deviates most from the chord between the current endpoints is kept when its
//! deviation exceeds the tolerance, and both halves are processed again;
//! otherwise the whole span collapses to its endpoints.
//!
//! The result is always an ordered subset of the input that keeps the first
//! and last samples.

use std::fmt;

use sketchtile_core::GeometryError;

use crate::model::{Curve, Point};

/// Vertex counts before and after a simplification pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimplifyReport {
    pub input_len: usize,
    pub output_len: usize,
}

impl SimplifyReport {
    pub fn new(input_len: usize, output_len: usize) -> Self {
        Self {
            input_len,
            output_len,
        }
    }

    /// Number of vertices dropped.
    pub fn removed(&self) -> usize {
        self.input_len - self.output_len
    }

    /// `round(100 - 100 * output / input)`, or 0 for an empty input.
    pub fn percent_saved(&self) -> i64 {
        if self.input_len == 0 {
            return 0;
        }
        (100.0 - 100.0 * self.output_len as f64 / self.input_len as f64).round() as i64
    }
}

impl fmt::Display for SimplifyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} of the {} segments were removed. Saving {}%",
            self.removed(),
            self.input_len,
            self.percent_saved()
        )
    }
}

/// Simplifies `points` so every dropped sample lies within `tolerance` of the
/// resulting polyline.
///
/// Fewer than two points, or a tolerance of zero, return the input unchanged.
pub fn simplify_points(points: &[Point], tolerance: f64) -> Result<Vec<Point>, GeometryError> {
    if !tolerance.is_finite() || tolerance < 0.0 {
        return Err(GeometryError::InvalidTolerance { tolerance });
    }
    if points.len() < 3 || tolerance == 0.0 {
        return Ok(points.to_vec());
    }

    let last = points.len() - 1;
    let mut keep = vec![false; points.len()];
    keep[0] = true;
    keep[last] = true;

    let mut spans = vec![(0usize, last)];
    while let Some((start, end)) = spans.pop() {
        if end <= start + 1 {
            continue;
        }
        let (index, deviation) = farthest_from_chord(points, start, end);
        if deviation > tolerance {
            keep[index] = true;
            spans.push((start, index));
            spans.push((index, end));
        }
    }

    Ok(points
        .iter()
        .zip(keep)
        .filter_map(|(p, kept)| kept.then_some(*p))
        .collect())
}

/// Index and distance of the interior sample farthest from the chord `start..end`.
fn farthest_from_chord(points: &[Point], start: usize, end: usize) -> (usize, f64) {
    let a = points[start];
    let b = points[end];
    let mut best = (start, 0.0);
    for (offset, p) in points[start + 1..end].iter().enumerate() {
        let d = perpendicular_distance(p, &a, &b);
        if d > best.1 {
            best = (start + 1 + offset, d);
        }
    }
    best
}

/// Distance from `p` to the infinite line through `a` and `b`; falls back to
/// the distance to `a` when the chord has no length.
fn perpendicular_distance(p: &Point, a: &Point, b: &Point) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let len = (dx * dx + dy * dy).sqrt();
    if len == 0.0 {
        return p.distance_to(a);
    }
    ((p.x - a.x) * dy - (p.y - a.y) * dx).abs() / len
}

impl Curve {
    /// Simplifies the curve in place, keeping its id and style.
    pub fn simplify(&mut self, tolerance: f64) -> Result<SimplifyReport, GeometryError> {
        let input_len = self.points.len();
        self.points = simplify_points(&self.points, tolerance)?;
        let report = SimplifyReport::new(input_len, self.points.len());
        tracing::debug!(curve = self.id, tolerance, %report, "simplified curve");
        Ok(report)
    }
}

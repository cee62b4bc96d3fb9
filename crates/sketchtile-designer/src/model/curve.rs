use lyon::path::Path;
use serde::{Deserialize, Serialize};

use super::{polyline_path, Bounds, DesignerShape, Point, StrokeStyle, Transform};

/// A finalized, simplified stroke.
///
/// The `id` is assigned by the [`ShapeStore`](crate::shape_store::ShapeStore)
/// on insertion; simplification only ever changes `points`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Curve {
    pub id: u64,
    pub points: Vec<Point>,
    pub style: StrokeStyle,
    pub closed: bool,
}

impl Curve {
    pub fn new(points: Vec<Point>, style: StrokeStyle) -> Self {
        Self {
            id: 0,
            points,
            style,
            closed: false,
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> Option<Point> {
        self.points.first().copied()
    }

    pub fn last(&self) -> Option<Point> {
        self.points.last().copied()
    }
}

impl DesignerShape for Curve {
    fn render(&self) -> Path {
        polyline_path(&self.points, self.closed)
    }

    fn bounds(&self) -> Option<Bounds> {
        Bounds::from_points(&self.points)
    }

    fn transform(&mut self, t: &Transform) {
        for p in &mut self.points {
            *p = p.transformed(t);
        }
    }
}

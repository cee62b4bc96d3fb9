use lyon::geom::{euclid, vector, Angle};
use lyon::path::Path;
use serde::{Deserialize, Serialize};

mod curve;

pub use curve::Curve;

/// Affine transform in design coordinates.
pub type Transform = lyon::geom::Transform<f64>;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    pub fn transformed(&self, t: &Transform) -> Point {
        let p = t.transform_point(euclid::point2(self.x, self.y));
        Point::new(p.x, p.y)
    }

    /// Single-precision point for path building.
    pub fn to_lyon(&self) -> lyon::math::Point {
        lyon::math::point(self.x as f32, self.y as f32)
    }
}

impl From<lyon::geom::Point<f64>> for Point {
    fn from(p: lyon::geom::Point<f64>) -> Self {
        Self::new(p.x, p.y)
    }
}

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Bounds {
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Smallest box containing every point, or `None` for an empty iterator.
    pub fn from_points<'a>(points: impl IntoIterator<Item = &'a Point>) -> Option<Self> {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let mut bounds = Bounds::new(first.x, first.y, first.x, first.y);
        for p in iter {
            bounds.min_x = bounds.min_x.min(p.x);
            bounds.min_y = bounds.min_y.min(p.y);
            bounds.max_x = bounds.max_x.max(p.x);
            bounds.max_y = bounds.max_y.max(p.y);
        }
        Some(bounds)
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    pub fn longest_side(&self) -> f64 {
        self.width().max(self.height())
    }

    pub fn center(&self) -> Point {
        Point::new(
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }

    pub fn union(&self, other: &Bounds) -> Bounds {
        Bounds::new(
            self.min_x.min(other.min_x),
            self.min_y.min(other.min_y),
            self.max_x.max(other.max_x),
            self.max_y.max(other.max_y),
        )
    }

    /// True when the box has no extent in either direction.
    pub fn is_degenerate(&self) -> bool {
        self.width() <= 0.0 && self.height() <= 0.0
    }
}

/// RGBA color; alpha in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Color {
    pub const BLACK: Color = Color::rgba(0, 0, 0, 1.0);
    pub const GRAY: Color = Color::rgba(128, 128, 128, 1.0);
    /// Translucent gold used for the spiral guide.
    pub const GOLD: Color = Color::rgba(255, 215, 0, 0.5);

    pub const fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrokeStyle {
    pub color: Color,
    pub width: f64,
}

impl StrokeStyle {
    pub fn new(color: Color, width: f64) -> Self {
        Self { color, width }
    }
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self::new(Color::BLACK, sketchtile_core::constants::STROKE_WIDTH)
    }
}

pub trait DesignerShape {
    fn render(&self) -> Path;
    fn bounds(&self) -> Option<Bounds>;
    fn transform(&mut self, t: &Transform);

    fn translate(&mut self, dx: f64, dy: f64) {
        let t = Transform::translation(dx, dy);
        self.transform(&t);
    }

    fn rotate(&mut self, angle_deg: f64, center: Point) {
        let t = Transform::translation(-center.x, -center.y)
            .then_rotate(Angle::degrees(angle_deg))
            .then_translate(vector(center.x, center.y));
        self.transform(&t);
    }

    fn scale(&mut self, factor: f64, center: Point) {
        // Translate to origin, scale, then translate back to keep the pivot fixed.
        let t = Transform::translation(-center.x, -center.y)
            .then_scale(factor, factor)
            .then_translate(vector(center.x, center.y));
        self.transform(&t);
    }
}

/// Builds an open or closed polyline path from design points.
pub(crate) fn polyline_path(points: &[Point], closed: bool) -> Path {
    polylines_path(std::iter::once((points, closed)))
}

/// Builds one path with a subpath per polyline; empty polylines are skipped.
pub(crate) fn polylines_path<'a>(
    polylines: impl IntoIterator<Item = (&'a [Point], bool)>,
) -> Path {
    let mut builder = Path::builder();
    for (points, closed) in polylines {
        if let Some((first, rest)) = points.split_first() {
            builder.begin(first.to_lyon());
            for p in rest {
                builder.line_to(p.to_lyon());
            }
            builder.end(closed);
        }
    }
    builder.build()
}

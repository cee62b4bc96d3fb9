//! Render surfaces.
//!
//! The pipeline only ever writes to a surface: it adds items, removes the ones
//! it added earlier, or clears everything. [`LayeredSurface`] is the in-memory
//! implementation backing both the input and the output canvas.

use lyon::geom::{point, vector, Angle, Arc};
use lyon::path::Path;

use crate::model::{polyline_path, Bounds, Color, Curve, Point, StrokeStyle};

pub type ItemId = u64;

/// What a render item represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    /// A curve drawn on the input canvas
    Curve,
    /// Marker for a path-draw click
    Indicator,
    /// One placed copy of the composite shape
    Instance,
    /// The spiral guide
    Spiral,
}

/// One styled polyline.
#[derive(Debug, Clone, PartialEq)]
pub struct StyledPath {
    pub points: Vec<Point>,
    pub stroke: Option<StrokeStyle>,
    pub fill: Option<Color>,
    pub closed: bool,
}

impl StyledPath {
    pub fn stroked(points: Vec<Point>, stroke: StrokeStyle, closed: bool) -> Self {
        Self {
            points,
            stroke: Some(stroke),
            fill: None,
            closed,
        }
    }

    pub fn to_path(&self) -> Path {
        polyline_path(&self.points, self.closed)
    }
}

impl From<&Curve> for StyledPath {
    fn from(curve: &Curve) -> Self {
        Self::stroked(curve.points.clone(), curve.style, curve.closed)
    }
}

/// A renderable group of paths, added and removed as one unit.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderItem {
    pub kind: ItemKind,
    pub paths: Vec<StyledPath>,
}

impl RenderItem {
    pub fn new(kind: ItemKind, paths: Vec<StyledPath>) -> Self {
        Self { kind, paths }
    }

    pub fn from_curve(curve: &Curve) -> Self {
        Self::new(ItemKind::Curve, vec![StyledPath::from(curve)])
    }

    /// Filled gray dot marking a click.
    pub fn indicator(center: Point, radius: f64) -> Self {
        const SEGMENTS: u32 = 12;
        let arc = Arc {
            center: point(center.x, center.y),
            radii: vector(radius, radius),
            start_angle: Angle::zero(),
            sweep_angle: Angle::two_pi(),
            x_rotation: Angle::zero(),
        };
        let points = (0..SEGMENTS)
            .map(|i| Point::from(arc.sample(f64::from(i) / f64::from(SEGMENTS))))
            .collect();
        Self::new(
            ItemKind::Indicator,
            vec![StyledPath {
                points,
                stroke: None,
                fill: Some(Color::GRAY),
                closed: true,
            }],
        )
    }

    pub fn bounds(&self) -> Option<Bounds> {
        Bounds::from_points(self.paths.iter().flat_map(|p| p.points.iter()))
    }

    pub fn vertex_count(&self) -> usize {
        self.paths.iter().map(|p| p.points.len()).sum()
    }
}

/// Write-only sink the pipeline renders into.
pub trait Surface {
    /// Adds an item to the active layer and returns its id.
    fn add_shape(&mut self, item: RenderItem) -> ItemId;

    /// Removes a previously added item.
    fn remove_shape(&mut self, id: ItemId) -> Option<RenderItem>;

    /// Removes every item.
    fn clear(&mut self);
}

#[derive(Debug, Clone)]
pub struct Layer {
    pub name: String,
    items: Vec<(ItemId, RenderItem)>,
}

impl Layer {
    fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            items: Vec::new(),
        }
    }

    pub fn items(&self) -> impl Iterator<Item = (ItemId, &RenderItem)> {
        self.items.iter().map(|(id, item)| (*id, item))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Fixed-size surface with named layers; new items go to the active layer.
#[derive(Debug, Clone)]
pub struct LayeredSurface {
    width: f64,
    height: f64,
    layers: Vec<Layer>,
    active: usize,
    next_id: ItemId,
}

impl LayeredSurface {
    pub const DEFAULT_LAYER: &'static str = "default";

    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            layers: vec![Layer::new(Self::DEFAULT_LAYER)],
            active: 0,
            next_id: 1,
        }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn center(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }

    /// Makes `name` the active layer, creating it on top if it does not exist.
    pub fn activate_layer(&mut self, name: &str) {
        self.active = match self.layers.iter().position(|l| l.name == name) {
            Some(index) => index,
            None => {
                self.layers.push(Layer::new(name));
                self.layers.len() - 1
            }
        };
    }

    pub fn active_layer(&self) -> &Layer {
        &self.layers[self.active]
    }

    pub fn layer(&self, name: &str) -> Option<&Layer> {
        self.layers.iter().find(|l| l.name == name)
    }

    /// Every item, bottom layer first.
    pub fn items(&self) -> impl Iterator<Item = (ItemId, &RenderItem)> {
        self.layers.iter().flat_map(|l| l.items())
    }

    pub fn items_of_kind(&self, kind: ItemKind) -> impl Iterator<Item = (ItemId, &RenderItem)> {
        self.items().filter(move |(_, item)| item.kind == kind)
    }

    pub fn get(&self, id: ItemId) -> Option<&RenderItem> {
        self.items().find(|(item_id, _)| *item_id == id).map(|(_, item)| item)
    }

    pub fn len(&self) -> usize {
        self.layers.iter().map(Layer::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.iter().all(Layer::is_empty)
    }
}

impl Surface for LayeredSurface {
    fn add_shape(&mut self, item: RenderItem) -> ItemId {
        let id = self.next_id;
        self.next_id += 1;
        self.layers[self.active].items.push((id, item));
        id
    }

    fn remove_shape(&mut self, id: ItemId) -> Option<RenderItem> {
        for layer in &mut self.layers {
            if let Some(index) = layer.items.iter().position(|(item_id, _)| *item_id == id) {
                return Some(layer.items.remove(index).1);
            }
        }
        None
    }

    fn clear(&mut self) {
        for layer in &mut self.layers {
            layer.items.clear();
        }
    }
}

//! Input canvas: turns pointer gestures into registered curves.

use std::fmt;

use sketchtile_core::constants::{FREE_DRAW_TOLERANCE, INDICATOR_RADIUS, PATH_COMMIT_TOLERANCE};
use sketchtile_core::GeometryError;
use tracing::debug;

use crate::model::{Point, StrokeStyle};
use crate::shape_store::ShapeStore;
use crate::simplify::SimplifyReport;
use crate::stroke::Stroke;
use crate::surface::{ItemId, RenderItem, Surface};

/// Drawing modes for the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DrawingMode {
    /// Every drag sample is recorded; releasing the pointer ends the stroke.
    #[default]
    FreeDraw,
    /// One point per click; the path ends on an explicit commit.
    PathDraw,
}

impl fmt::Display for DrawingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FreeDraw => write!(f, "FREE"),
            Self::PathDraw => write!(f, "PATH"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
}

/// Pointer sample in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerEventKind,
    pub point: Point,
}

impl PointerEvent {
    pub fn down(x: f64, y: f64) -> Self {
        Self {
            kind: PointerEventKind::Down,
            point: Point::new(x, y),
        }
    }

    pub fn moved(x: f64, y: f64) -> Self {
        Self {
            kind: PointerEventKind::Move,
            point: Point::new(x, y),
        }
    }

    pub fn up(x: f64, y: f64) -> Self {
        Self {
            kind: PointerEventKind::Up,
            point: Point::new(x, y),
        }
    }
}

/// Tuning for gesture finalization.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasSettings {
    pub free_draw_tolerance: f64,
    pub path_commit_tolerance: f64,
    pub indicator_radius: f64,
    pub stroke_style: StrokeStyle,
}

impl Default for CanvasSettings {
    fn default() -> Self {
        Self {
            free_draw_tolerance: FREE_DRAW_TOLERANCE,
            path_commit_tolerance: PATH_COMMIT_TOLERANCE,
            indicator_radius: INDICATOR_RADIUS,
            stroke_style: StrokeStyle::default(),
        }
    }
}

/// A stroke that has just been simplified and registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommittedCurve {
    pub id: u64,
    pub item: ItemId,
    pub report: SimplifyReport,
}

/// Canvas state managing the active gestures and the drawn curves.
///
/// At most one free-draw stroke and one pending path exist at a time. The
/// drawing mode is supplied with every event, so a pending path survives a
/// switch to free drawing and can still be committed later.
#[derive(Debug, Clone, Default)]
pub struct Canvas {
    shape_store: ShapeStore,
    settings: CanvasSettings,
    free_stroke: Option<Stroke>,
    pending_path: Option<Stroke>,
    indicators: Vec<ItemId>,
}

impl Canvas {
    /// Creates a new canvas.
    pub fn new(settings: CanvasSettings) -> Self {
        Self {
            settings,
            ..Self::default()
        }
    }

    pub fn settings(&self) -> &CanvasSettings {
        &self.settings
    }

    pub fn shape_store(&self) -> &ShapeStore {
        &self.shape_store
    }

    /// Number of samples in the free-draw stroke in progress.
    pub fn active_stroke_len(&self) -> Option<usize> {
        self.free_stroke.as_ref().map(Stroke::len)
    }

    /// Number of clicked points in the uncommitted path.
    pub fn pending_path_len(&self) -> Option<usize> {
        self.pending_path.as_ref().map(Stroke::len)
    }

    pub fn indicator_count(&self) -> usize {
        self.indicators.len()
    }

    /// Routes one pointer event according to `mode`.
    ///
    /// Returns the committed curve when the event ends a free-draw stroke.
    /// Events that arrive without a matching active stroke are ignored.
    pub fn handle_pointer<S: Surface + ?Sized>(
        &mut self,
        mode: DrawingMode,
        event: PointerEvent,
        surface: &mut S,
    ) -> Result<Option<CommittedCurve>, GeometryError> {
        match (mode, event.kind) {
            (DrawingMode::FreeDraw, PointerEventKind::Down) => {
                if self.free_stroke.is_some() {
                    debug!("pointer down during an active stroke; restarting it");
                }
                self.free_stroke = Some(Stroke::begin(mode, event.point));
                Ok(None)
            }
            (DrawingMode::FreeDraw, PointerEventKind::Move) => {
                match self.free_stroke.as_mut() {
                    Some(stroke) => stroke.push(event.point),
                    None => debug!(
                        x = event.point.x,
                        y = event.point.y,
                        "drag without an active stroke"
                    ),
                }
                Ok(None)
            }
            (DrawingMode::FreeDraw, PointerEventKind::Up) => match self.free_stroke.take() {
                Some(stroke) => {
                    let tolerance = self.settings.free_draw_tolerance;
                    self.register(stroke, tolerance, surface).map(Some)
                }
                None => {
                    debug!("pointer up without an active stroke");
                    Ok(None)
                }
            },
            (DrawingMode::PathDraw, PointerEventKind::Down) => {
                self.pending_path
                    .get_or_insert_with(|| Stroke::new(mode))
                    .push(event.point);
                let indicator = RenderItem::indicator(event.point, self.settings.indicator_radius);
                self.indicators.push(surface.add_shape(indicator));
                Ok(None)
            }
            (DrawingMode::PathDraw, _) => Ok(None),
        }
    }

    /// Ends the pending path: simplifies it, registers it and drops the click
    /// indicators. Without a pending path this does nothing.
    pub fn commit_path<S: Surface + ?Sized>(
        &mut self,
        surface: &mut S,
    ) -> Result<Option<CommittedCurve>, GeometryError> {
        let Some(stroke) = self.pending_path.take() else {
            debug!("commit without a pending path");
            return Ok(None);
        };

        let tolerance = self.settings.path_commit_tolerance;
        let committed = match self.register(stroke.clone(), tolerance, surface) {
            Ok(committed) => committed,
            Err(e) => {
                self.pending_path = Some(stroke);
                return Err(e);
            }
        };

        for id in self.indicators.drain(..) {
            surface.remove_shape(id);
        }
        Ok(Some(committed))
    }

    fn register<S: Surface + ?Sized>(
        &mut self,
        stroke: Stroke,
        tolerance: f64,
        surface: &mut S,
    ) -> Result<CommittedCurve, GeometryError> {
        let mode = stroke.mode();
        let mut curve = stroke.finish(self.settings.stroke_style);
        let report = curve.simplify(tolerance)?;
        let item = surface.add_shape(RenderItem::from_curve(&curve));
        let id = self.shape_store.add(curve);
        debug!(id, %mode, %report, "registered curve");
        Ok(CommittedCurve { id, item, report })
    }
}

//! # SketchTile Designer
//!
//! Turns freehand sketches into tiled patterns.
//!
//! ## Core Components
//!
//! - **Stroke**: Raw pointer samples of the gesture in progress
//! - **Simplify**: Douglas–Peucker reduction of a stroke to a curve
//! - **Shape Store**: Append-only registry of finished curves
//! - **Tiling**: Scales the drawing to one grid cell and places a copy per cell
//! - **Spiral**: Golden-ratio spiral guide built from nested squares
//! - **Canvas**: Gesture handling for free-draw and path-draw modes
//! - **Surface**: Write-only render sink with layered in-memory implementation
//!
//! ## Architecture
//!
//! ```text
//! Pointer events
//!   └── Canvas ── Stroke ── Simplify ── ShapeStore
//!                                          │
//! generate_pattern ─────────── Tiling ─────┘──► output Surface
//!
//! toggle_spiral ── Spiral ──► input Surface (guides layer)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use sketchtile_designer::{DesignerState, DrawingMode, PointerEvent};
//!
//! let mut designer = DesignerState::default();
//! designer.handle_pointer(DrawingMode::FreeDraw, PointerEvent::down(10.0, 10.0)).unwrap();
//! designer.handle_pointer(DrawingMode::FreeDraw, PointerEvent::moved(110.0, 60.0)).unwrap();
//! designer.handle_pointer(DrawingMode::FreeDraw, PointerEvent::up(110.0, 60.0)).unwrap();
//!
//! let tiling = designer.generate_pattern().unwrap();
//! assert_eq!(tiling.total_copies(), 25);
//! ```

pub mod canvas;
pub mod commands;
pub mod designer_state;
pub mod model;
pub mod shape_store;
pub mod simplify;
pub mod spiral;
pub mod stroke;
pub mod surface;
pub mod tiling;

pub use canvas::{
    Canvas, CanvasSettings, CommittedCurve, DrawingMode, PointerEvent, PointerEventKind,
};
pub use commands::DesignerCommand;
pub use designer_state::{CommandOutcome, DesignerSettings, DesignerState, SpiralSettings};
pub use model::{Bounds, Color, Curve, DesignerShape, Point, StrokeStyle, Transform};
pub use shape_store::ShapeStore;
pub use simplify::{simplify_points, SimplifyReport};
pub use spiral::{generate_spiral, Spiral, SpiralArc, SpiralParams, SpiralSquare};
pub use stroke::Stroke;
pub use surface::{ItemId, ItemKind, LayeredSurface, RenderItem, StyledPath, Surface};
pub use tiling::{CompositeShape, GridParams, GridTiler, PlacedInstance, Tiling};

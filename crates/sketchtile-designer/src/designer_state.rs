//! Designer state manager for UI integration.
//!
//! Owns the input canvas, both render surfaces and the spiral toggle, and
//! routes user commands to them. Every operation runs to completion on the
//! caller's thread.

use sketchtile_core::constants::{
    DEFAULT_GRID_COLS, DEFAULT_GRID_ROWS, DEFAULT_SURFACE_SIZE, SPIRAL_ARC_SEGMENTS,
    SPIRAL_ITERATIONS, SPIRAL_SIZE_RATIO,
};
use sketchtile_core::Result;
use tracing::{debug, info, warn};

use crate::canvas::{Canvas, CanvasSettings, CommittedCurve, DrawingMode, PointerEvent};
use crate::commands::DesignerCommand;
use crate::spiral::{generate_spiral, SpiralParams};
use crate::surface::{ItemId, LayeredSurface, Surface};
use crate::tiling::{GridParams, GridTiler, Tiling};

/// Layer of the input surface holding the spiral guide.
pub const GUIDE_LAYER: &str = "guides";

/// Spiral guide settings
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpiralSettings {
    pub iterations: u32,
    pub size_ratio: f64,
    pub arc_segments: u32,
    /// Show the guide as soon as the designer starts
    pub visible: bool,
}

impl Default for SpiralSettings {
    fn default() -> Self {
        Self {
            iterations: SPIRAL_ITERATIONS,
            size_ratio: SPIRAL_SIZE_RATIO,
            arc_segments: SPIRAL_ARC_SEGMENTS,
            visible: false,
        }
    }
}

/// Settings for the designer
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DesignerSettings {
    pub rows: u32,
    pub cols: u32,
    pub input_width: f64,
    pub input_height: f64,
    pub output_width: f64,
    pub output_height: f64,
    pub canvas: CanvasSettings,
    pub spiral: SpiralSettings,
}

impl Default for DesignerSettings {
    fn default() -> Self {
        Self {
            rows: DEFAULT_GRID_ROWS,
            cols: DEFAULT_GRID_COLS,
            input_width: DEFAULT_SURFACE_SIZE,
            input_height: DEFAULT_SURFACE_SIZE,
            output_width: DEFAULT_SURFACE_SIZE,
            output_height: DEFAULT_SURFACE_SIZE,
            canvas: CanvasSettings::default(),
            spiral: SpiralSettings::default(),
        }
    }
}

/// What applying a command changed.
#[derive(Debug, Clone, PartialEq)]
pub enum CommandOutcome {
    ModeChanged(DrawingMode),
    CurveAdded(CommittedCurve),
    PatternGenerated(Tiling),
    SpiralToggled(bool),
    Ignored,
}

/// Designer state for UI integration
#[derive(Clone, Debug)]
pub struct DesignerState {
    canvas: Canvas,
    input: LayeredSurface,
    output: LayeredSurface,
    settings: DesignerSettings,
    mode: DrawingMode,
    spiral_item: Option<ItemId>,
}

impl DesignerState {
    pub fn new(settings: DesignerSettings) -> Self {
        let mut state = Self {
            canvas: Canvas::new(settings.canvas),
            input: LayeredSurface::new(settings.input_width, settings.input_height),
            output: LayeredSurface::new(settings.output_width, settings.output_height),
            settings,
            mode: DrawingMode::default(),
            spiral_item: None,
        };
        if settings.spiral.visible {
            state.toggle_spiral();
        }
        state
    }

    pub fn settings(&self) -> &DesignerSettings {
        &self.settings
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn input_surface(&self) -> &LayeredSurface {
        &self.input
    }

    pub fn output_surface(&self) -> &LayeredSurface {
        &self.output
    }

    /// Mode used for pointer commands.
    pub fn mode(&self) -> DrawingMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: DrawingMode) {
        if self.mode != mode {
            debug!(from = %self.mode, to = %mode, "drawing mode changed");
        }
        self.mode = mode;
    }

    pub fn grid_params(&self) -> GridParams {
        GridParams::new(self.settings.rows, self.settings.cols, self.output.width())
    }

    /// Feeds one pointer event to the canvas under an explicit mode.
    pub fn handle_pointer(
        &mut self,
        mode: DrawingMode,
        event: PointerEvent,
    ) -> Result<Option<CommittedCurve>> {
        let committed = self.canvas.handle_pointer(mode, event, &mut self.input)?;
        if let Some(curve) = &committed {
            info!(id = curve.id, "{}", curve.report);
        }
        Ok(committed)
    }

    /// Commits the pending path, if any.
    pub fn commit_path(&mut self) -> Result<Option<CommittedCurve>> {
        let committed = self.canvas.commit_path(&mut self.input)?;
        if let Some(curve) = &committed {
            info!(id = curve.id, "{}", curve.report);
        }
        Ok(committed)
    }

    /// Tiles everything drawn so far into the output surface.
    ///
    /// Fails without touching the output when nothing has been drawn or the
    /// drawing has no extent.
    pub fn generate_pattern(&mut self) -> Result<Tiling> {
        let params = self.grid_params();
        GridTiler::generate(self.canvas.shape_store().list(), &params, &mut self.output).map_err(
            |e| {
                warn!("pattern generation failed: {}", e);
                e.into()
            },
        )
    }

    pub fn spiral_visible(&self) -> bool {
        self.spiral_item.is_some()
    }

    /// Shows or hides the spiral guide; returns whether it is now visible.
    pub fn toggle_spiral(&mut self) -> bool {
        if let Some(id) = self.spiral_item.take() {
            self.input.remove_shape(id);
            debug!("spiral guide hidden");
            return false;
        }

        let spiral = self.settings.spiral;
        let params =
            SpiralParams::for_view(self.input.width(), self.input.height(), spiral.size_ratio)
                .with_iterations(spiral.iterations)
                .with_arc_segments(spiral.arc_segments);
        let item = generate_spiral(&params).to_render_item();

        self.input.activate_layer(GUIDE_LAYER);
        self.spiral_item = Some(self.input.add_shape(item));
        self.input.activate_layer(LayeredSurface::DEFAULT_LAYER);
        debug!(iterations = spiral.iterations, "spiral guide shown");
        true
    }

    pub fn apply(&mut self, command: DesignerCommand) -> Result<CommandOutcome> {
        let outcome = match command {
            DesignerCommand::SelectMode(mode) => {
                self.set_mode(mode);
                CommandOutcome::ModeChanged(mode)
            }
            DesignerCommand::Pointer(event) => match self.handle_pointer(self.mode, event)? {
                Some(curve) => CommandOutcome::CurveAdded(curve),
                None => CommandOutcome::Ignored,
            },
            DesignerCommand::CommitPath if self.mode == DrawingMode::PathDraw => {
                match self.commit_path()? {
                    Some(curve) => CommandOutcome::CurveAdded(curve),
                    None => CommandOutcome::Ignored,
                }
            }
            DesignerCommand::CommitPath => CommandOutcome::Ignored,
            DesignerCommand::GeneratePattern => {
                CommandOutcome::PatternGenerated(self.generate_pattern()?)
            }
            DesignerCommand::ToggleSpiral => CommandOutcome::SpiralToggled(self.toggle_spiral()),
        };
        Ok(outcome)
    }
}

impl Default for DesignerState {
    fn default() -> Self {
        Self::new(DesignerSettings::default())
    }
}

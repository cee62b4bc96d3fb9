//! # SketchTile
//!
//! Turns freehand sketches into tiled patterns:
//! - Free-draw and click-path input with Douglas-Peucker stroke simplification
//! - Grid tiling of everything drawn, scaled to fit one square cell
//! - A golden spiral guide for composing the motif
//!
//! ## Architecture
//!
//! SketchTile is organized as a workspace with multiple crates:
//!
//! 1. **sketchtile-core** - Error types and shared constants
//! 2. **sketchtile-designer** - Canvas, simplifier, tiling engine, spiral, surfaces
//! 3. **sketchtile-settings** - Configuration loading, saving and validation
//! 4. **sketchtile** - Main binary that integrates all crates

pub use sketchtile_core::{Error, GeometryError, Result};
pub use sketchtile_designer as designer;
pub use sketchtile_designer::{
    CanvasSettings, DesignerCommand, DesignerSettings, DesignerState, DrawingMode, PointerEvent,
    StrokeStyle, Tiling,
};
pub use sketchtile_settings::{Config, SettingsError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output with pretty formatting
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(true)
        .with_level(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}

/// Builds designer settings from a loaded configuration.
pub fn designer_settings(config: &Config) -> DesignerSettings {
    let drawing = &config.drawing;

    DesignerSettings {
        rows: config.grid.rows,
        cols: config.grid.cols,
        input_width: config.input.width,
        input_height: config.input.height,
        output_width: config.output.width,
        output_height: config.output.height,
        canvas: CanvasSettings {
            free_draw_tolerance: drawing.free_draw_tolerance,
            path_commit_tolerance: drawing.path_commit_tolerance,
            indicator_radius: drawing.indicator_radius,
            stroke_style: StrokeStyle {
                width: drawing.stroke_width,
                ..StrokeStyle::default()
            },
        },
        spiral: designer::SpiralSettings {
            iterations: config.spiral.iterations,
            size_ratio: config.spiral.size_ratio,
            arc_segments: config.spiral.arc_segments,
            visible: config.spiral.visible,
        },
    }
}

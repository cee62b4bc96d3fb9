//! Configuration file handling.
//!
//! A [`Config`] is split into one section per concern. Every section has
//! defaults, so a file only needs the keys it overrides:
//!
//! ```toml
//! [grid]
//! rows = 3
//! cols = 4
//!
//! [spiral]
//! visible = true
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use sketchtile_core::constants::{
    DEFAULT_GRID_COLS, DEFAULT_GRID_ROWS, DEFAULT_SURFACE_SIZE, FREE_DRAW_TOLERANCE,
    INDICATOR_RADIUS, MAX_GRID_CELLS, PATH_COMMIT_TOLERANCE, SPIRAL_ARC_SEGMENTS,
    SPIRAL_ITERATIONS, SPIRAL_SIZE_RATIO, STROKE_WIDTH,
};

use crate::error::{SettingsError, SettingsResult};

/// Grid layout of the generated pattern
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridSettings {
    pub rows: u32,
    pub cols: u32,
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            rows: DEFAULT_GRID_ROWS,
            cols: DEFAULT_GRID_COLS,
        }
    }
}

/// Size of a drawing surface
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SurfaceSettings {
    pub width: f64,
    pub height: f64,
}

impl Default for SurfaceSettings {
    fn default() -> Self {
        Self {
            width: DEFAULT_SURFACE_SIZE,
            height: DEFAULT_SURFACE_SIZE,
        }
    }
}

/// Stroke finalization and styling
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DrawingSettings {
    /// Simplification tolerance applied when a free-draw stroke ends
    pub free_draw_tolerance: f64,
    /// Simplification tolerance applied when a click path is committed
    pub path_commit_tolerance: f64,
    pub indicator_radius: f64,
    pub stroke_width: f64,
}

impl Default for DrawingSettings {
    fn default() -> Self {
        Self {
            free_draw_tolerance: FREE_DRAW_TOLERANCE,
            path_commit_tolerance: PATH_COMMIT_TOLERANCE,
            indicator_radius: INDICATOR_RADIUS,
            stroke_width: STROKE_WIDTH,
        }
    }
}

/// Golden spiral guide
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpiralSettings {
    pub iterations: u32,
    /// Size of the first square relative to the shorter side of the input
    pub size_ratio: f64,
    pub arc_segments: u32,
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

/// Complete application configuration
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub grid: GridSettings,
    pub input: SurfaceSettings,
    pub output: SurfaceSettings,
    pub drawing: DrawingSettings,
    pub spiral: SpiralSettings,
}

impl Config {
    /// Create new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Default location of the config file in the platform config directory.
    pub fn default_path() -> SettingsResult<PathBuf> {
        let dir = dirs::config_dir().ok_or_else(|| {
            SettingsError::ConfigDirectory("Could not determine config directory".to_string())
        })?;
        Ok(dir.join("sketchtile").join("config.toml"))
    }

    /// Load configuration from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| SettingsError::LoadError(format!("{}: {}", path.display(), e)))?;

        let config = match Format::of(path)? {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };
        Ok(config)
    }

    /// Loads `path` when it exists, otherwise returns the defaults.
    pub fn load_or_default(path: &Path) -> SettingsResult<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        let content = match Format::of(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    SettingsError::ConfigDirectory(format!("{}: {}", parent.display(), e))
                })?;
            }
        }

        std::fs::write(path, content)
            .map_err(|e| SettingsError::SaveError(format!("{}: {}", path.display(), e)))?;
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        if self.grid.rows == 0 {
            return Err(SettingsError::invalid("grid.rows", "must be at least 1"));
        }
        if self.grid.cols == 0 {
            return Err(SettingsError::invalid("grid.cols", "must be at least 1"));
        }
        let cells = u64::from(self.grid.rows) * u64::from(self.grid.cols);
        if cells > MAX_GRID_CELLS {
            return Err(SettingsError::invalid(
                "grid",
                format!("rows * cols must not exceed {}, got {}", MAX_GRID_CELLS, cells),
            ));
        }

        positive("input.width", self.input.width)?;
        positive("input.height", self.input.height)?;
        positive("output.width", self.output.width)?;
        positive("output.height", self.output.height)?;

        non_negative("drawing.free_draw_tolerance", self.drawing.free_draw_tolerance)?;
        non_negative("drawing.path_commit_tolerance", self.drawing.path_commit_tolerance)?;
        positive("drawing.indicator_radius", self.drawing.indicator_radius)?;
        positive("drawing.stroke_width", self.drawing.stroke_width)?;

        let ratio = self.spiral.size_ratio;
        if !(ratio > 0.0 && ratio <= 1.0) {
            return Err(SettingsError::invalid(
                "spiral.size_ratio",
                format!("must be in (0, 1], got {}", ratio),
            ));
        }
        if self.spiral.arc_segments == 0 {
            return Err(SettingsError::invalid(
                "spiral.arc_segments",
                "must be at least 1",
            ));
        }

        Ok(())
    }
}

enum Format {
    Json,
    Toml,
}

impl Format {
    fn of(path: &Path) -> SettingsResult<Self> {
        match path.extension().and_then(|s| s.to_str()) {
            Some("json") => Ok(Self::Json),
            Some("toml") => Ok(Self::Toml),
            other => Err(SettingsError::UnsupportedFormat(format!(
                "Config file must be .json or .toml, got {}",
                other.unwrap_or("no extension")
            ))),
        }
    }
}

fn positive(key: &str, value: f64) -> SettingsResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(SettingsError::invalid(
            key,
            format!("must be positive, got {}", value),
        ))
    }
}

fn non_negative(key: &str, value: f64) -> SettingsResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(SettingsError::invalid(
            key,
            format!("must not be negative, got {}", value),
        ))
    }
}

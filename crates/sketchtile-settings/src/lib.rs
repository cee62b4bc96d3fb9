//! SketchTile Settings Crate
//!
//! Handles application configuration: grid layout, surface sizes, drawing
//! tolerances and the spiral guide, persisted as JSON or TOML.

pub mod config;
pub mod error;

pub use config::{Config, DrawingSettings, GridSettings, SpiralSettings, SurfaceSettings};
pub use error::{SettingsError, SettingsResult};

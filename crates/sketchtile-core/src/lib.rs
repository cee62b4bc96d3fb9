//! # SketchTile Core
//!
//! Core types shared by the SketchTile crates: the error taxonomy of the
//! geometry pipeline and the reference constants the rest of the workspace
//! takes its defaults from.

pub mod constants;
pub mod error;

pub use error::{Error, GeometryError, Result};

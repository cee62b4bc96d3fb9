//! Error handling for SketchTile
//!
//! Provides the error types of the geometry pipeline:
//! - Geometry errors (empty input, degenerate shapes, invalid parameters)
//! - A unified [`Error`] used at crate boundaries
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Geometry error type
///
/// Raised by the simplifier and the tiling engine. Every variant is
/// recoverable: the operation that produced it has not mutated any state.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// Pattern generation requested before anything was drawn
    #[error("Please draw something on the input canvas first")]
    EmptyInput,

    /// The combined bounding box has no extent in either direction
    #[error("Shape has no extent ({width} x {height}); cannot scale it to a grid cell")]
    DegenerateShape {
        /// Width of the combined bounding box.
        width: f64,
        /// Height of the combined bounding box.
        height: f64,
    },

    /// Simplification tolerance is negative or not finite
    #[error("Invalid simplification tolerance: {tolerance}")]
    InvalidTolerance {
        /// The rejected tolerance.
        tolerance: f64,
    },

    /// Grid dimensions or output width cannot produce a layout
    #[error("Invalid grid: rows={rows}, cols={cols}, output_width={output_width}")]
    InvalidGrid {
        /// Requested row count.
        rows: u32,
        /// Requested column count.
        cols: u32,
        /// Requested output width.
        output_width: f64,
    },
}

/// Main error type for SketchTile
///
/// A unified error type that can represent any error from all layers.
#[derive(Error, Debug)]
pub enum Error {
    /// Geometry error
    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

impl Error {
    /// Whether a UI should surface this as a notification rather than a fault
    pub fn is_user_facing(&self) -> bool {
        matches!(
            self,
            Error::Geometry(GeometryError::EmptyInput)
                | Error::Geometry(GeometryError::DegenerateShape { .. })
        )
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;

//! Reference constants for the drawing and tiling pipeline.

/// Golden ratio used by the spiral guide.
pub const GOLDEN_RATIO: f64 = 1.618_033_988_749_895;

/// Rows in the reference output grid.
pub const DEFAULT_GRID_ROWS: u32 = 5;

/// Columns in the reference output grid.
pub const DEFAULT_GRID_COLS: u32 = 5;

/// Upper bound on `rows * cols` for a generated pattern.
pub const MAX_GRID_CELLS: u64 = 10_000;

/// Edge length of the input and output surfaces.
pub const DEFAULT_SURFACE_SIZE: f64 = 400.0;

/// Simplification tolerance applied when a free-draw stroke ends.
pub const FREE_DRAW_TOLERANCE: f64 = 15.0;

/// Simplification tolerance applied when a path is committed (0 leaves it untouched).
pub const PATH_COMMIT_TOLERANCE: f64 = 0.0;

/// Radius of the dots marking path-draw clicks.
pub const INDICATOR_RADIUS: f64 = 2.0;

/// Stroke width of drawn curves.
pub const STROKE_WIDTH: f64 = 2.0;

/// Number of nested squares in the spiral guide.
pub const SPIRAL_ITERATIONS: u32 = 8;

/// Spiral size as a fraction of the shorter surface side.
pub const SPIRAL_SIZE_RATIO: f64 = 0.8;

/// Line segments used to flatten one spiral quarter arc.
pub const SPIRAL_ARC_SEGMENTS: u32 = 16;

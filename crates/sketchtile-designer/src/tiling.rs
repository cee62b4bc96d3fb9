//! # Grid Tiling Module
//!
//! Lays out copies of the drawn shape in a square-celled grid.
//!
//! All curves in the registry are grouped into one rigid [`CompositeShape`].
//! The group is scaled uniformly so its longer bounding-box side fills exactly
//! one cell, re-centered on the origin, and then cloned once per cell with a
//! pure translation to the cell center. Cells are visited in row-major order.
//!
//! Everything is computed before the output surface is touched, so a failed
//! generation leaves the previous output in place.

use lyon::path::Path;
use sketchtile_core::constants::MAX_GRID_CELLS;
use sketchtile_core::GeometryError;
use tracing::info;

use crate::model::{polylines_path, Bounds, Curve, DesignerShape, Point, Transform};
use crate::surface::{ItemKind, RenderItem, StyledPath, Surface};

/// Parameters for a grid layout
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridParams {
    /// Number of rows
    pub rows: u32,
    /// Number of columns
    pub cols: u32,
    /// Width of the output space; cells are `output_width / cols` wide and tall
    pub output_width: f64,
}

impl GridParams {
    /// Create new grid parameters
    pub fn new(rows: u32, cols: u32, output_width: f64) -> Self {
        Self {
            rows,
            cols,
            output_width,
        }
    }

    /// Validate parameters
    pub fn is_valid(&self) -> bool {
        self.rows > 0
            && self.cols > 0
            && self.total_copies() <= MAX_GRID_CELLS
            && self.output_width.is_finite()
            && self.output_width > 0.0
    }

    pub fn validate(&self) -> Result<(), GeometryError> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(GeometryError::InvalidGrid {
                rows: self.rows,
                cols: self.cols,
                output_width: self.output_width,
            })
        }
    }

    /// Get total number of copies
    pub fn total_copies(&self) -> u64 {
        u64::from(self.rows) * u64::from(self.cols)
    }

    /// Edge length of one square cell
    pub fn cell_size(&self) -> f64 {
        self.output_width / f64::from(self.cols)
    }

    /// Height covered by all rows
    pub fn pattern_height(&self) -> f64 {
        self.cell_size() * f64::from(self.rows)
    }

    /// Center of the cell at `(row, col)`
    pub fn cell_center(&self, row: u32, col: u32) -> Option<Point> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        let cell = self.cell_size();
        Some(Point::new(
            cell * f64::from(col) + cell / 2.0,
            cell * f64::from(row) + cell / 2.0,
        ))
    }
}

/// All drawn curves treated as one rigid group.
#[derive(Debug, Clone, PartialEq)]
pub struct CompositeShape {
    curves: Vec<Curve>,
}

impl CompositeShape {
    pub fn from_curves(curves: &[Curve]) -> Self {
        Self {
            curves: curves.to_vec(),
        }
    }

    pub fn curves(&self) -> &[Curve] {
        &self.curves
    }

    /// Center of the bounding box, or `None` for an empty group.
    pub fn center(&self) -> Option<Point> {
        self.bounds().map(|b| b.center())
    }

    /// Moves the group so its bounding-box center lands on `target`.
    pub fn set_position(&mut self, target: Point) {
        if let Some(center) = self.center() {
            self.translate(target.x - center.x, target.y - center.y);
        }
    }
}

impl DesignerShape for CompositeShape {
    fn render(&self) -> Path {
        polylines_path(self.curves.iter().map(|c| (c.points.as_slice(), c.closed)))
    }

    fn bounds(&self) -> Option<Bounds> {
        self.curves
            .iter()
            .filter_map(|c| c.bounds())
            .reduce(|acc, b| acc.union(&b))
    }

    fn transform(&mut self, t: &Transform) {
        for curve in &mut self.curves {
            curve.transform(t);
        }
    }
}

/// One positioned copy of the normalized composite.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedInstance {
    pub row: u32,
    pub col: u32,
    pub center: Point,
    pub shape: CompositeShape,
}

impl PlacedInstance {
    pub fn to_render_item(&self) -> RenderItem {
        RenderItem::new(
            ItemKind::Instance,
            self.shape.curves().iter().map(StyledPath::from).collect(),
        )
    }
}

/// Result of one generation pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Tiling {
    pub params: GridParams,
    /// Union bounds of the source curves before scaling
    pub source_bounds: Bounds,
    pub cell_size: f64,
    pub scale_factor: f64,
    /// Instances in row-major order
    pub instances: Vec<PlacedInstance>,
}

impl Tiling {
    pub fn total_copies(&self) -> usize {
        self.instances.len()
    }

    pub fn instance(&self, row: u32, col: u32) -> Option<&PlacedInstance> {
        if row >= self.params.rows || col >= self.params.cols {
            return None;
        }
        let index = u64::from(row) * u64::from(self.params.cols) + u64::from(col);
        self.instances.get(usize::try_from(index).ok()?)
    }
}

/// Generator for grid tilings
pub struct GridTiler;

impl GridTiler {
    /// Computes the tiling of `curves` without touching any surface.
    pub fn compute(curves: &[Curve], params: &GridParams) -> Result<Tiling, GeometryError> {
        if curves.is_empty() {
            return Err(GeometryError::EmptyInput);
        }
        params.validate()?;

        let mut composite = CompositeShape::from_curves(curves);
        let source_bounds = composite.bounds().ok_or(GeometryError::EmptyInput)?;
        if source_bounds.is_degenerate() {
            return Err(GeometryError::DegenerateShape {
                width: source_bounds.width(),
                height: source_bounds.height(),
            });
        }

        let cell_size = params.cell_size();
        let scale_factor = cell_size / source_bounds.longest_side();

        composite.scale(scale_factor, source_bounds.center());
        composite.set_position(Point::new(0.0, 0.0));

        let mut instances = Vec::with_capacity(params.total_copies() as usize);
        for row in 0..params.rows {
            for col in 0..params.cols {
                if let Some(center) = params.cell_center(row, col) {
                    let mut shape = composite.clone();
                    shape.translate(center.x, center.y);
                    instances.push(PlacedInstance {
                        row,
                        col,
                        center,
                        shape,
                    });
                }
            }
        }

        Ok(Tiling {
            params: *params,
            source_bounds,
            cell_size,
            scale_factor,
            instances,
        })
    }

    /// Computes the tiling and replaces the contents of `surface` with it.
    ///
    /// On error the surface is left untouched.
    pub fn generate<S: Surface + ?Sized>(
        curves: &[Curve],
        params: &GridParams,
        surface: &mut S,
    ) -> Result<Tiling, GeometryError> {
        let tiling = Self::compute(curves, params)?;

        surface.clear();
        for instance in &tiling.instances {
            surface.add_shape(instance.to_render_item());
        }

        info!(
            curves = curves.len(),
            rows = params.rows,
            cols = params.cols,
            cell_size = tiling.cell_size,
            scale_factor = tiling.scale_factor,
            "generated pattern"
        );
        Ok(tiling)
    }
}

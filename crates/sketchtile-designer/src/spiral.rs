//! # Golden Spiral Guide
//!
//! Approximates a logarithmic spiral with quarter-circle arcs inscribed in a
//! sequence of nested squares. Each square's side is the previous side divided
//! by the golden ratio, and square `i` is turned `90° · i` about the spiral
//! center.
//!
//! Generation is a pure function of [`SpiralParams`]; callers regenerate the
//! whole guide rather than mutating one.

use lyon::geom::{point, vector, Angle, Arc};
use sketchtile_core::constants::{GOLDEN_RATIO, SPIRAL_ARC_SEGMENTS, SPIRAL_ITERATIONS};

use crate::model::{Color, Point, StrokeStyle, Transform};
use crate::surface::{ItemKind, RenderItem, StyledPath};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpiralParams {
    pub center: Point,
    /// Side of the first (largest) square
    pub size: f64,
    pub iterations: u32,
    /// Line segments per flattened arc
    pub arc_segments: u32,
}

impl SpiralParams {
    pub fn new(center: Point, size: f64, iterations: u32) -> Self {
        Self {
            center,
            size,
            iterations,
            arc_segments: SPIRAL_ARC_SEGMENTS,
        }
    }

    /// Spiral centered on a `width` × `height` view, sized to `ratio` of its
    /// shorter side.
    pub fn for_view(width: f64, height: f64, ratio: f64) -> Self {
        Self::new(
            Point::new(width / 2.0, height / 2.0),
            width.min(height) * ratio,
            SPIRAL_ITERATIONS,
        )
    }

    pub fn with_iterations(mut self, iterations: u32) -> Self {
        self.iterations = iterations;
        self
    }

    pub fn with_arc_segments(mut self, arc_segments: u32) -> Self {
        self.arc_segments = arc_segments.max(1);
        self
    }
}

/// One square of the construction, already rotated into place.
#[derive(Debug, Clone, PartialEq)]
pub struct SpiralSquare {
    pub index: u32,
    pub side: f64,
    pub rotation_degrees: f64,
    /// Top-left, top-right, bottom-right, bottom-left before rotation.
    pub corners: [Point; 4],
}

#[derive(Debug, Clone, PartialEq)]
pub struct SpiralArc {
    pub square: SpiralSquare,
    /// Flattened quarter circle from the square's top-right to bottom-left corner.
    pub points: Vec<Point>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Spiral {
    pub params: SpiralParams,
    pub arcs: Vec<SpiralArc>,
}

impl Spiral {
    pub fn style() -> StrokeStyle {
        StrokeStyle::new(Color::GOLD, 2.0)
    }

    /// All arcs as one group.
    pub fn to_render_item(&self) -> RenderItem {
        RenderItem::new(
            ItemKind::Spiral,
            self.arcs
                .iter()
                .map(|arc| StyledPath::stroked(arc.points.clone(), Self::style(), false))
                .collect(),
        )
    }
}

/// Builds the spiral guide described by `params`.
pub fn generate_spiral(params: &SpiralParams) -> Spiral {
    let c = params.center;
    let segments = params.arc_segments.max(1);
    let mut side = params.size;
    let mut arcs = Vec::with_capacity(params.iterations as usize);

    for index in 0..params.iterations {
        let rotation_degrees = 90.0 * f64::from(index);
        let turn = Transform::translation(-c.x, -c.y)
            .then_rotate(Angle::degrees(rotation_degrees))
            .then_translate(vector(c.x, c.y));

        let corners = [
            c,
            Point::new(c.x + side, c.y),
            Point::new(c.x + side, c.y + side),
            Point::new(c.x, c.y + side),
        ]
        .map(|p| p.transformed(&turn));

        // Quarter circle around the corner on the spiral center, sweeping
        // through the square towards its far corner.
        let arc = Arc {
            center: point(c.x, c.y),
            radii: vector(side, side),
            start_angle: Angle::zero(),
            sweep_angle: Angle::frac_pi_2(),
            x_rotation: Angle::zero(),
        };
        let points = (0..=segments)
            .map(|i| Point::from(arc.sample(f64::from(i) / f64::from(segments))).transformed(&turn))
            .collect();

        arcs.push(SpiralArc {
            square: SpiralSquare {
                index,
                side,
                rotation_degrees,
                corners,
            },
            points,
        });
        side /= GOLDEN_RATIO;
    }

    Spiral {
        params: *params,
        arcs,
    }
}

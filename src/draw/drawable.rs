//! Render descriptors produced for each shape.
//!
//! A [`Drawable`] is the paintable form of a shape: a flat list of path
//! operations built by a [`DrawableGenerator`]. The shape store asks the
//! generator for a fresh drawable whenever geometry changes and the renderer
//! strokes it; nothing else looks inside.

use super::shape::ShapeKind;
use serde::Serialize;

/// Single path operation in surface coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum PathOp {
    MoveTo { x: f64, y: f64 },
    LineTo { x: f64, y: f64 },
    /// Closes the current sub-path back to its last `MoveTo`
    Close,
}

/// Paintable descriptor for one shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Drawable {
    /// Shape kind this descriptor was generated for
    pub kind: ShapeKind,
    /// Path operations in paint order
    pub ops: Vec<PathOp>,
}

/// Builds drawables from raw geometry.
///
/// Rectangles are requested as origin plus signed extent, so `width` and
/// `height` are negative when the user dragged up or to the left.
pub trait DrawableGenerator {
    /// Straight segment from `(x1, y1)` to `(x2, y2)`.
    fn line(&self, x1: f64, y1: f64, x2: f64, y2: f64) -> Drawable;

    /// Rectangle outline with one corner at `(x, y)`.
    fn rectangle(&self, x: f64, y: f64, width: f64, height: f64) -> Drawable;
}

/// Default generator emitting crisp straight segments.
#[derive(Debug, Default, Clone, Copy)]
pub struct PathGenerator;

impl DrawableGenerator for PathGenerator {
    fn line(&self, x1: f64, y1: f64, x2: f64, y2: f64) -> Drawable {
        Drawable {
            kind: ShapeKind::Line,
            ops: vec![
                PathOp::MoveTo { x: x1, y: y1 },
                PathOp::LineTo { x: x2, y: y2 },
            ],
        }
    }

    fn rectangle(&self, x: f64, y: f64, width: f64, height: f64) -> Drawable {
        Drawable {
            kind: ShapeKind::Rectangle,
            ops: vec![
                PathOp::MoveTo { x, y },
                PathOp::LineTo { x: x + width, y },
                PathOp::LineTo {
                    x: x + width,
                    y: y + height,
                },
                PathOp::LineTo { x, y: y + height },
                PathOp::Close,
            ],
        }
    }
}

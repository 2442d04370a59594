//! Shape records for sketched lines and rectangles.

use super::drawable::Drawable;
use serde::Serialize;
use std::fmt;

/// Geometry family of a shape. Fixed when the shape is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeKind {
    /// Straight segment from anchor to free point
    Line,
    /// Rectangle spanned by anchor and free point as opposite corners
    Rectangle,
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeKind::Line => f.write_str("line"),
            ShapeKind::Rectangle => f.write_str("rectangle"),
        }
    }
}

/// A sketched shape as kept by the [`ShapeStore`](super::ShapeStore).
///
/// `(x1, y1)` is the anchor where the drag began; `(x2, y2)` is the free point.
/// Coordinates are stored exactly as given, so `x1 > x2` is perfectly valid.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Shape {
    /// Creation-order index, equal to the shape's position in the store
    pub id: usize,
    /// Line or rectangle
    pub kind: ShapeKind,
    /// Anchor X coordinate
    pub x1: f64,
    /// Anchor Y coordinate
    pub y1: f64,
    /// Free point X coordinate
    pub x2: f64,
    /// Free point Y coordinate
    pub y2: f64,
    /// Render descriptor handed to the painter untouched
    pub drawable: Drawable,
}

impl Shape {
    /// Signed horizontal extent (`x2 - x1`).
    pub fn width(&self) -> f64 {
        self.x2 - self.x1
    }

    /// Signed vertical extent (`y2 - y1`).
    pub fn height(&self) -> f64 {
        self.y2 - self.y1
    }

    /// Normalized `(min_x, min_y, max_x, max_y)` regardless of corner order.
    pub fn bounds(&self) -> (f64, f64, f64, f64) {
        (
            self.x1.min(self.x2),
            self.y1.min(self.y2),
            self.x1.max(self.x2),
            self.y1.max(self.y2),
        )
    }
}

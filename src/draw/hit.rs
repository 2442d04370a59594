//! Hit-testing: finding the shape under a pointer position.

use super::shape::{Shape, ShapeKind};
use crate::util::distance;

/// Maximum triangle-inequality slack (in surface pixels) for a point to count
/// as lying on a line.
pub const LINE_HIT_TOLERANCE: f64 = 1.0;

/// Returns the first shape, in creation order, whose geometry contains `(x, y)`.
///
/// When shapes overlap the lowest id wins, even though the highest id is the
/// one painted on top.
pub fn locate(x: f64, y: f64, shapes: &[Shape]) -> Option<&Shape> {
    // TODO: decide whether selection should follow paint order (search from
    // the top layer down); callers currently rely on lowest-id-first.
    shapes.iter().find(|shape| contains(shape, x, y))
}

/// Whether `(x, y)` lies within `shape`.
///
/// Rectangles hit anywhere inside their inclusive bounds, not only on the
/// outline. Lines hit when `|AB - (AP + BP)|` stays under
/// [`LINE_HIT_TOLERANCE`]; the slack grows quickly past either endpoint, so no
/// separate length check is needed.
pub fn contains(shape: &Shape, x: f64, y: f64) -> bool {
    match shape.kind {
        ShapeKind::Rectangle => {
            let (min_x, min_y, max_x, max_y) = shape.bounds();
            x >= min_x && x <= max_x && y >= min_y && y <= max_y
        }
        ShapeKind::Line => {
            let a = (shape.x1, shape.y1);
            let b = (shape.x2, shape.y2);
            let p = (x, y);
            let slack = distance(a, b) - (distance(a, p) + distance(b, p));
            slack.abs() < LINE_HIT_TOLERANCE
        }
    }
}

//! Cairo-based rendering functions for shapes.

use super::color::Color;
use super::drawable::{Drawable, PathOp};
use super::shape::{Shape, ShapeKind};

/// Session-wide stroke appearance. Shapes carry no style of their own.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle {
    /// Stroke color
    pub color: Color,
    /// Line thickness in pixels
    pub thickness: f64,
}

/// Clears the canvas and fills it with the background color.
///
/// Should be called before rendering shapes so every frame starts from a
/// blank surface.
pub fn render_background(ctx: &cairo::Context, background: Color) {
    let _ = ctx.save();
    ctx.set_operator(cairo::Operator::Source);
    ctx.set_source_rgba(background.r, background.g, background.b, background.a);
    let _ = ctx.paint(); // Ignore errors - a failed paint leaves the previous frame
    let _ = ctx.restore();
}

/// Renders all shapes in a collection to a Cairo context.
///
/// Shapes are drawn in the order they appear (first shape = bottom layer).
pub fn render_shapes(ctx: &cairo::Context, shapes: &[Shape], style: StrokeStyle) {
    for shape in shapes {
        render_drawable(ctx, &shape.drawable, style);
    }
}

/// Strokes a single drawable.
pub fn render_drawable(ctx: &cairo::Context, drawable: &Drawable, style: StrokeStyle) {
    if drawable.ops.is_empty() {
        return;
    }

    let color = style.color;
    ctx.set_source_rgba(color.r, color.g, color.b, color.a);
    ctx.set_line_width(style.thickness);
    match drawable.kind {
        ShapeKind::Line => ctx.set_line_cap(cairo::LineCap::Round),
        ShapeKind::Rectangle => ctx.set_line_join(cairo::LineJoin::Miter),
    }

    ctx.new_path();
    for op in &drawable.ops {
        match *op {
            PathOp::MoveTo { x, y } => ctx.move_to(x, y),
            PathOp::LineTo { x, y } => ctx.line_to(x, y),
            PathOp::Close => ctx.close_path(),
        }
    }

    let _ = ctx.stroke();
}

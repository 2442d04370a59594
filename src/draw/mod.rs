//! Shape model, hit-testing, and Cairo rendering.
//!
//! This module defines the core drawing types of the sketchpad:
//! - [`Shape`]: a line or rectangle record with anchor and free points
//! - [`ShapeStore`]: ordered, id-indexed container for every shape
//! - [`Drawable`]: the render descriptor built for each shape
//! - [`locate`]: finds the shape under a pointer position
//! - Rendering functions for Cairo-based output

pub mod color;
pub mod drawable;
pub mod hit;
pub mod render;
pub mod shape;
pub mod store;

// Re-export commonly used types at module level
pub use color::Color;
pub use drawable::{Drawable, DrawableGenerator, PathGenerator, PathOp};
pub use hit::{LINE_HIT_TOLERANCE, locate};
pub use render::{StrokeStyle, render_background, render_drawable, render_shapes};
pub use shape::{Shape, ShapeKind};
pub use store::{ShapeStore, StoreError};

pub use color::{BLACK, BLUE, GREEN, PAPER, RED, WHITE};

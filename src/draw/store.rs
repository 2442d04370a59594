//! Ordered shape storage.

use super::drawable::{DrawableGenerator, PathGenerator};
use super::shape::{Shape, ShapeKind};
use thiserror::Error;

/// Contract violations reported by [`ShapeStore`].
///
/// Both variants mean the caller broke the `id == position` rule; user input
/// can never produce them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("shape id {id} is out of range (store holds {len} shapes)")]
    OutOfRange { id: usize, len: usize },

    #[error("shape id mismatch: expected {expected}, found {found}")]
    IdMismatch { expected: usize, found: usize },
}

/// Container for every shape sketched in this session.
///
/// Shapes are kept in creation order, which is also paint order (first =
/// bottom layer, last = top layer). A shape's `id` always equals its index.
pub struct ShapeStore {
    shapes: Vec<Shape>,
    generator: Box<dyn DrawableGenerator>,
}

impl Default for ShapeStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ShapeStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShapeStore")
            .field("shapes", &self.shapes)
            .finish_non_exhaustive()
    }
}

impl ShapeStore {
    /// Creates an empty store using the default [`PathGenerator`].
    pub fn new() -> Self {
        Self::with_generator(Box::new(PathGenerator))
    }

    /// Creates an empty store that builds drawables with `generator`.
    pub fn with_generator(generator: Box<dyn DrawableGenerator>) -> Self {
        Self {
            shapes: Vec::new(),
            generator,
        }
    }

    /// Builds a shape value, including its drawable, without storing it.
    pub fn create(&self, id: usize, x1: f64, y1: f64, x2: f64, y2: f64, kind: ShapeKind) -> Shape {
        let drawable = match kind {
            ShapeKind::Line => self.generator.line(x1, y1, x2, y2),
            ShapeKind::Rectangle => self.generator.rectangle(x1, y1, x2 - x1, y2 - y1),
        };
        Shape {
            id,
            kind,
            x1,
            y1,
            x2,
            y2,
            drawable,
        }
    }

    /// Appends a shape on top of the existing ones.
    ///
    /// Returns the new shape's id. The shape must carry the next free id.
    pub fn push(&mut self, shape: Shape) -> Result<usize, StoreError> {
        let expected = self.shapes.len();
        if shape.id != expected {
            return Err(StoreError::IdMismatch {
                expected,
                found: shape.id,
            });
        }
        self.shapes.push(shape);
        Ok(expected)
    }

    /// Overwrites the shape at position `id` in place.
    pub fn replace(&mut self, id: usize, shape: Shape) -> Result<(), StoreError> {
        let len = self.shapes.len();
        let slot = self
            .shapes
            .get_mut(id)
            .ok_or(StoreError::OutOfRange { id, len })?;
        if shape.id != id {
            return Err(StoreError::IdMismatch {
                expected: id,
                found: shape.id,
            });
        }
        *slot = shape;
        Ok(())
    }

    /// All shapes in creation (and paint) order.
    pub fn all(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn get(&self, id: usize) -> Option<&Shape> {
        self.shapes.get(id)
    }

    /// Most recently created shape, if any.
    pub fn last(&self) -> Option<&Shape> {
        self.shapes.last()
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}

//! Generic pointer event types for cross-backend compatibility.

/// Mouse button identification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    /// Left mouse button (primary drawing button)
    Left,
    /// Right mouse button (currently unused)
    Right,
    /// Middle mouse button (currently unused)
    Middle,
}

/// Pointer event in surface coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Down { button: MouseButton, x: f64, y: f64 },
    Move { x: f64, y: f64 },
    Up { button: MouseButton, x: f64, y: f64 },
}

//! Input handling and the interaction state machine.
//!
//! This module translates backend pointer events into shape store operations.
//! It keeps the tool reported by the UI and manages the state machine for the
//! interaction phases (idle, drawing a new shape, moving an existing one).

pub mod events;
pub mod state;
pub mod tool;

// Re-export commonly used types at module level
pub use events::{MouseButton, PointerEvent};
pub use state::{InputState, InteractionPhase};
pub use tool::Tool;

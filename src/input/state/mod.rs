mod core;
mod mouse;

pub use core::{InputState, InteractionPhase};

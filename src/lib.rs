//! Library exports for reusing sketchpad subsystems.
//!
//! Exposes the shape model, hit-testing and the interaction state machine
//! alongside the headless backend and configuration, so other front ends can
//! drive the same sketching core with their own event source and painter.

pub mod backend;
pub mod config;
pub mod draw;
pub mod export;
pub mod input;
pub mod script;
pub mod util;

pub use config::Config;

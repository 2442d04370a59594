//! Headless backend driving the interaction loop.
//!
//! Events come from a [`Script`] instead of a live seat; every event is handed
//! to the [`InputState`] and the surface is repainted right after any event
//! that changed the shape set.

pub mod surface;

pub use surface::SketchSurface;

use crate::config::Config;
use crate::draw::StrokeStyle;
use crate::input::InputState;
use crate::script::{Script, ScriptCommand};
use anyhow::Result;
use log::{debug, info};

/// A live sketching session: interaction state plus the surface it paints.
pub struct Session {
    pub input: InputState,
    pub surface: SketchSurface,
}

impl Session {
    /// Builds a session from user configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        let style = StrokeStyle {
            color: config.drawing.stroke_color.to_color(),
            thickness: config.drawing.thickness,
        };
        let surface = SketchSurface::new(
            config.canvas.width,
            config.canvas.height,
            config.canvas.background.to_color(),
            style,
        )?;
        let mut input = InputState::new(config.drawing.default_tool);
        input.update_screen_dimensions(surface.width(), surface.height());
        Ok(Self { input, surface })
    }

    /// Applies one scripted command and presents the result.
    pub fn apply(&mut self, command: ScriptCommand) -> Result<()> {
        match command {
            ScriptCommand::Tool(tool) => self.input.set_tool(tool),
            ScriptCommand::Resize { width, height } => {
                if self.surface.resize(width, height)? {
                    self.input.update_screen_dimensions(width, height);
                }
            }
            ScriptCommand::Pointer(event) => self.input.handle_pointer(event),
        }
        if self.surface.present(&mut self.input)? {
            debug!("Presented frame {}", self.surface.frames_rendered());
        }
        Ok(())
    }
}

/// Replays `script` against a fresh session built from `config`.
pub fn run_script(config: &Config, script: &Script) -> Result<Session> {
    let mut session = Session::from_config(config)?;
    session.surface.present(&mut session.input)?;

    for command in &script.commands {
        session.apply(*command)?;
    }

    info!(
        "Replayed {} commands: {} shapes, {} frames",
        script.commands.len(),
        session.input.store.len(),
        session.surface.frames_rendered()
    );
    Ok(session)
}

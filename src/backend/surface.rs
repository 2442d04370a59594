//! Offscreen Cairo surface the sketch is painted into.

use crate::draw::{Color, Shape, StrokeStyle, render_background, render_shapes};
use crate::input::InputState;
use anyhow::{Context, Result};
use log::debug;
use std::io::Write;

/// Owns the image surface sized to the viewport and repaints it on demand.
pub struct SketchSurface {
    surface: cairo::ImageSurface,
    width: u32,
    height: u32,
    background: Color,
    style: StrokeStyle,
    frames_rendered: u64,
}

impl SketchSurface {
    /// Creates a surface of the given size.
    pub fn new(width: u32, height: u32, background: Color, style: StrokeStyle) -> Result<Self> {
        let surface = create_image_surface(width, height)?;
        Ok(Self {
            surface,
            width,
            height,
            background,
            style,
            frames_rendered: 0,
        })
    }

    /// Updates the surface dimensions, returning `true` if the size changed.
    ///
    /// A size change replaces the backing image; the caller must repaint.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<bool> {
        if self.width == width && self.height == height {
            return Ok(false);
        }
        self.surface = create_image_surface(width, height)?;
        self.width = width;
        self.height = height;
        debug!("Surface resized to {width}x{height}");
        Ok(true)
    }

    /// Current surface width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Current surface height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of full repaints performed so far.
    pub fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }

    /// Repaints the full shape snapshot if the input state asked for it.
    ///
    /// Returns `true` when a frame was rendered.
    pub fn present(&mut self, input: &mut InputState) -> Result<bool> {
        if !input.needs_redraw {
            return Ok(false);
        }
        self.render(input.store.all())?;
        input.needs_redraw = false;
        Ok(true)
    }

    /// Clears the surface and paints `shapes` in order.
    pub fn render(&mut self, shapes: &[Shape]) -> Result<()> {
        debug!("=== RENDER START ===");
        {
            let ctx =
                cairo::Context::new(&self.surface).context("Failed to create Cairo context")?;
            render_background(&ctx, self.background);
            debug!("Rendering {} shapes", shapes.len());
            render_shapes(&ctx, shapes, self.style);
        }
        self.surface.flush();
        self.frames_rendered += 1;
        debug!("=== RENDER COMPLETE ===");
        Ok(())
    }

    /// Encodes the current frame as PNG into `writer`.
    pub fn write_png<W: Write>(&self, writer: &mut W) -> Result<()> {
        self.surface
            .write_to_png(writer)
            .context("Failed to encode PNG")?;
        Ok(())
    }

    /// Direct access to the backing image (for pixel inspection).
    pub fn image(&mut self) -> &mut cairo::ImageSurface {
        &mut self.surface
    }
}

fn create_image_surface(width: u32, height: u32) -> Result<cairo::ImageSurface> {
    let width = i32::try_from(width).context("Surface width out of range")?;
    let height = i32::try_from(height).context("Surface height out of range")?;
    cairo::ImageSurface::create(cairo::Format::ARgb32, width, height)
        .context("Failed to create Cairo image surface")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{BLACK, WHITE};
    use crate::input::{MouseButton, Tool};

    fn surface() -> SketchSurface {
        SketchSurface::new(
            64,
            48,
            WHITE,
            StrokeStyle {
                color: BLACK,
                thickness: 2.0,
            },
        )
        .unwrap()
    }

    #[test]
    fn present_renders_only_when_flagged() {
        let mut surface = surface();
        let mut input = InputState::new(Tool::Line);

        assert!(surface.present(&mut input).unwrap());
        assert!(!input.needs_redraw);
        assert!(!surface.present(&mut input).unwrap());
        assert_eq!(surface.frames_rendered(), 1);
    }

    #[test]
    fn one_frame_per_mutation() {
        let mut surface = surface();
        let mut input = InputState::new(Tool::Rectangle);
        surface.present(&mut input).unwrap();

        input.on_mouse_press(MouseButton::Left, 5.0, 5.0);
        surface.present(&mut input).unwrap();
        input.on_mouse_motion(20.0, 20.0);
        surface.present(&mut input).unwrap();
        input.on_mouse_release(MouseButton::Left, 20.0, 20.0);
        surface.present(&mut input).unwrap();

        assert_eq!(surface.frames_rendered(), 3);
    }

    #[test]
    fn resize_reports_changes() {
        let mut surface = surface();
        assert!(!surface.resize(64, 48).unwrap());
        assert!(surface.resize(128, 96).unwrap());
        assert_eq!((surface.width(), surface.height()), (128, 96));
        assert_eq!(surface.image().width(), 128);
    }
}

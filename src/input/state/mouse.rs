use crate::draw::{StoreError, locate};
use crate::input::events::{MouseButton, PointerEvent};
use crate::input::tool::Tool;
use log::debug;

use super::{InputState, InteractionPhase};

impl InputState {
    /// Dispatches a pointer event to the matching handler.
    pub fn handle_pointer(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Down { button, x, y } => self.on_mouse_press(button, x, y),
            PointerEvent::Move { x, y } => self.on_mouse_motion(x, y),
            PointerEvent::Up { button, x, y } => self.on_mouse_release(button, x, y),
        }
    }

    /// Processes a mouse button press event.
    ///
    /// # Behavior
    /// - Selection tool: picks up the first shape under the pointer, if any
    /// - Line/Rectangle tool: creates a zero-size shape at the pointer and
    ///   starts drawing it
    /// - Presses while a drag is already in progress are ignored
    pub fn on_mouse_press(&mut self, button: MouseButton, x: f64, y: f64) {
        if button != MouseButton::Left || !self.is_idle() {
            return;
        }

        if let Some(kind) = self.tool.shape_kind() {
            let id = self.store.len();
            let shape = self.store.create(id, x, y, x, y, kind);
            match self.store.push(shape) {
                Ok(id) => {
                    debug!("Started drawing {kind} #{id} at ({x:.1}, {y:.1})");
                    self.phase = InteractionPhase::Drawing { id };
                    self.needs_redraw = true;
                }
                Err(err) => self.report_store_error(err),
            }
            return;
        }

        match self.tool {
            Tool::Selection => {
                if let Some(target) = locate(x, y, self.store.all()) {
                    debug!(
                        "Picked up {} #{} at ({x:.1}, {y:.1})",
                        target.kind, target.id
                    );
                    self.phase = InteractionPhase::Moving {
                        target: target.clone(),
                    };
                } else {
                    debug!("No shape under ({x:.1}, {y:.1})");
                }
            }
            _ => debug!("Press ignored: no tool selected"),
        }
    }

    /// Processes pointer motion.
    ///
    /// # Behavior
    /// - Drawing: keeps the anchor and moves the free point to the pointer
    /// - Moving: places the anchor at the pointer, keeping the size the shape
    ///   had when the drag started
    /// - Idle: ignored
    pub fn on_mouse_motion(&mut self, x: f64, y: f64) {
        let update = match &self.phase {
            InteractionPhase::Idle => return,
            InteractionPhase::Drawing { id } => match self.store.get(*id) {
                Some(current) => {
                    self.store
                        .create(*id, current.x1, current.y1, x, y, current.kind)
                }
                None => {
                    let len = self.store.len();
                    self.report_store_error(StoreError::OutOfRange { id: *id, len });
                    return;
                }
            },
            InteractionPhase::Moving { target } => {
                let (width, height) = (target.width(), target.height());
                self.store
                    .create(target.id, x, y, x + width, y + height, target.kind)
            }
        };

        self.commit_shape(update.id, update);
    }

    /// Processes mouse button release events.
    ///
    /// Ends any drawing or moving drag and returns to idle. The shape keeps
    /// the geometry from the last motion event.
    pub fn on_mouse_release(&mut self, button: MouseButton, _x: f64, _y: f64) {
        if button != MouseButton::Left || self.is_idle() {
            return;
        }

        debug!("Drag finished ({:?})", self.phase);
        self.phase = InteractionPhase::Idle;
    }
}

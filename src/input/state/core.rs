//! Interaction state machine and input state management.

use crate::draw::{Shape, ShapeStore, StoreError};
use crate::input::tool::Tool;
use log::{debug, error};

/// Current interaction phase.
///
/// Tracks whether the user is idle, dragging out a new shape, or dragging an
/// existing one. Transitions are driven by pointer press, motion and release.
#[derive(Debug, Clone, PartialEq)]
pub enum InteractionPhase {
    /// Waiting for a pointer press
    Idle,
    /// Dragging out a freshly created shape
    Drawing {
        /// Id of the shape being drawn (always the most recent one)
        id: usize,
    },
    /// Dragging an existing shape picked with the selection tool
    Moving {
        /// Snapshot of the shape as it was when the drag started
        target: Shape,
    },
}

/// Main input state containing all sketching session state.
///
/// Holds the shape store, the tool reported by the UI, and the interaction
/// phase. It processes pointer events to update shapes and flags when the
/// surface needs to be redrawn.
#[derive(Debug)]
pub struct InputState {
    /// Every shape sketched so far, in creation order
    pub store: ShapeStore,
    /// Tool currently selected in the UI tool selector
    pub tool: Tool,
    /// Current interaction phase
    pub phase: InteractionPhase,
    /// Whether the display needs to be redrawn
    pub needs_redraw: bool,
    /// Surface width in pixels (set by the backend)
    pub screen_width: u32,
    /// Surface height in pixels (set by the backend)
    pub screen_height: u32,
}

impl Default for InputState {
    fn default() -> Self {
        Self::new(Tool::None)
    }
}

impl InputState {
    /// Creates an idle input state with an empty store.
    ///
    /// Screen dimensions default to 0 and should be updated by the backend
    /// once the surface size is known (see `update_screen_dimensions`).
    pub fn new(tool: Tool) -> Self {
        Self::with_store(ShapeStore::new(), tool)
    }

    /// Creates an idle input state around an existing store.
    pub fn with_store(store: ShapeStore, tool: Tool) -> Self {
        Self {
            store,
            tool,
            phase: InteractionPhase::Idle,
            needs_redraw: true,
            screen_width: 0,
            screen_height: 0,
        }
    }

    /// Records the tool picked in the UI. Takes effect on the next press.
    pub fn set_tool(&mut self, tool: Tool) {
        if self.tool != tool {
            debug!("Tool changed from {} to {}", self.tool, tool);
            self.tool = tool;
        }
    }

    /// Updates screen dimensions after the surface was (re)sized.
    pub fn update_screen_dimensions(&mut self, width: u32, height: u32) {
        if self.screen_width != width || self.screen_height != height {
            self.screen_width = width;
            self.screen_height = height;
            self.needs_redraw = true;
        }
    }

    /// Shape currently being dragged with the selection tool, if any.
    pub fn drag_target(&self) -> Option<&Shape> {
        match &self.phase {
            InteractionPhase::Moving { target } => Some(target),
            _ => None,
        }
    }

    /// Returns whether no drag is in progress.
    pub fn is_idle(&self) -> bool {
        matches!(self.phase, InteractionPhase::Idle)
    }

    /// Writes an updated shape back into the store and requests a redraw.
    ///
    /// A failure here means the state machine lost track of its shape ids.
    pub(super) fn commit_shape(&mut self, id: usize, shape: Shape) {
        match self.store.replace(id, shape) {
            Ok(()) => self.needs_redraw = true,
            Err(err) => self.report_store_error(err),
        }
    }

    pub(super) fn report_store_error(&self, err: StoreError) {
        error!("Shape store rejected update during {:?}: {err}", self.phase);
        if cfg!(debug_assertions) {
            panic!("shape store contract violated: {err}");
        }
    }
}

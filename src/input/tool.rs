//! Drawing tool selection.

use crate::draw::ShapeKind;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Tool picked in the UI tool selector.
///
/// The active tool decides what a pointer press does: the selection tool picks
/// up an existing shape, the shape tools start a new one.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum Tool {
    /// Nothing selected yet - presses are ignored
    #[default]
    None,
    /// Pick up and drag an existing shape
    Selection,
    /// Straight line from press to release point
    Line,
    /// Rectangle from corner to corner
    Rectangle,
}

impl Tool {
    /// Shape kind created by this tool, if it is a drawing tool.
    pub fn shape_kind(self) -> Option<ShapeKind> {
        match self {
            Tool::Line => Some(ShapeKind::Line),
            Tool::Rectangle => Some(ShapeKind::Rectangle),
            Tool::None | Tool::Selection => None,
        }
    }

    /// Name as reported by the tool selector.
    pub fn name(self) -> &'static str {
        match self {
            Tool::None => "none",
            Tool::Selection => "selection",
            Tool::Line => "line",
            Tool::Rectangle => "rectangle",
        }
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Tool {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "none" => Ok(Tool::None),
            "selection" => Ok(Tool::Selection),
            "line" => Ok(Tool::Line),
            "rectangle" => Ok(Tool::Rectangle),
            other => Err(format!(
                "unknown tool '{other}' (expected none, selection, line or rectangle)"
            )),
        }
    }
}

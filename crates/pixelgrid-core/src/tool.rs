//! Active tool and pointer gesture state.

use crate::cell::CellState;
use crate::geometry::{CellCoord, Point};
use serde::{Deserialize, Serialize};

/// Drawing tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tool {
    /// Sets cells active.
    #[default]
    Paint,
    /// Sets cells inactive.
    Erase,
}

impl Tool {
    /// State written to every cell the tool touches.
    #[must_use]
    pub const fn target_state(self) -> CellState {
        match self {
            Self::Paint => CellState::Active,
            Self::Erase => CellState::Inactive,
        }
    }
}

/// Tool selection plus the tracking needed to interpolate a gesture.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ToolState {
    /// Selected tool.
    pub tool: Tool,
    /// Pointer is down and painting.
    pub drawing: bool,
    /// Last cell painted in the current gesture.
    pub last_painted: Option<CellCoord>,
    /// Cell under the pointer.
    pub hovered: Option<CellCoord>,
    /// Pointer position in surface pixels, for the brush indicator.
    pub brush_position: Option<Point>,
}

impl ToolState {
    /// Idle state with the given tool selected.
    #[must_use]
    pub fn new(tool: Tool) -> Self {
        Self {
            tool,
            ..Self::default()
        }
    }

    /// End the gesture and forget pointer tracking.
    pub fn reset_pointer(&mut self) {
        self.drawing = false;
        self.last_painted = None;
        self.hovered = None;
        self.brush_position = None;
    }
}

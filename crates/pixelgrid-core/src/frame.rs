//! Render view-model of a session.
//!
//! The presentation layer draws a [`Frame`] but never owns editor state.

use crate::cell::CellState;
use crate::color::{Color, Palette};
use crate::geometry::{CellCoord, Point, Rect};

/// Radius of the circular brush indicator in surface pixels.
pub const BRUSH_RADIUS: f32 = 6.5;

/// One cell glyph as it should appear on screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellView {
    /// Grid position.
    pub coord: CellCoord,
    /// Pixel bounds on the surface.
    pub bounds: Rect,
    /// Model state.
    pub state: CellState,
    /// Whether the pointer is over this cell.
    pub hovered: bool,
    /// Glyph fill.
    pub fill: Color,
}

/// Circle that follows the pointer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BrushIndicator {
    /// Pointer position.
    pub center: Point,
    /// Circle radius.
    pub radius: f32,
    /// Outline color.
    pub stroke: Color,
}

/// Everything needed to draw the editing surface once.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    /// Cells in row-major order.
    pub cells: Vec<CellView>,
    /// Brush ring, present while the pointer is over the surface.
    pub brush: Option<BrushIndicator>,
}

impl Frame {
    /// The view of one cell, if in range.
    #[must_use]
    pub fn cell(&self, coord: CellCoord) -> Option<&CellView> {
        self.cells.iter().find(|c| c.coord == coord)
    }
}

/// Display fill for a cell: hover wins, then active, then the display inactive tone.
#[must_use]
pub fn display_fill(palette: &Palette, state: CellState, hovered: bool) -> Color {
    if hovered {
        palette.hover
    } else if state.is_active() {
        palette.active
    } else {
        palette.inactive_display
    }
}

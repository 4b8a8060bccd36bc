//! Editing session: owns the grid, its history and the tool state, and turns
//! pointer and keyboard input into grid mutations.
//!
//! Gesture state machine:
//!
//! ```text
//!   Idle --pointer_down (on surface)--> Drawing --pointer_up / pointer_leave--> Idle
//!                                        |   ^
//!                                        +---+ pointer_move (paints interpolated cells)
//! ```

use crate::config::{EditorConfig, Recording};
use crate::event::{KeyEvent, PointerEvent};
use crate::frame::{display_fill, BrushIndicator, CellView, Frame, BRUSH_RADIUS};
use crate::geometry::{CellCoord, Point};
use crate::grid::Grid;
use crate::history::{History, HistoryEvent};
use crate::pattern::SeedPattern;
use crate::shortcut::{EditorAction, Keymap};
use crate::stroke::StrokeCells;
use crate::surface::SurfaceMapping;
use crate::tool::{Tool, ToolState};

/// A single-user editing session.
///
/// All mutations run to completion on the caller's thread. Export works from
/// [`Session::snapshot`], an owned copy, so later edits never reach an
/// export already in progress.
#[derive(Debug, Clone)]
pub struct Session {
    config: EditorConfig,
    mapping: SurfaceMapping,
    grid: Grid,
    history: History,
    tool: ToolState,
    keymap: Keymap,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}

impl Session {
    /// Blank session. The initial history entry is the empty grid.
    #[must_use]
    pub fn new(config: EditorConfig) -> Self {
        let grid = Grid::new(config.grid.width, config.grid.height);
        Self::from_grid(config, grid)
    }

    /// Session whose initial grid (and first history entry) is seeded by `pattern`.
    #[must_use]
    pub fn with_pattern(config: EditorConfig, pattern: &SeedPattern) -> Self {
        let mut grid = Grid::new(config.grid.width, config.grid.height);
        let seeded = pattern.apply(&mut grid);
        log::debug!("session: seeded {seeded} cells");
        Self::from_grid(config, grid)
    }

    fn from_grid(config: EditorConfig, grid: Grid) -> Self {
        let mapping = SurfaceMapping::new(config.surface.size(), grid.width(), grid.height());
        let history = History::with_config(&grid, config.history);
        let keymap = Keymap::with_defaults(config.shortcuts);
        Self {
            config,
            mapping,
            grid,
            history,
            tool: ToolState::default(),
            keymap,
        }
    }

    /// Displayed grid.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Owned copy of the displayed grid.
    #[must_use]
    pub fn snapshot(&self) -> Grid {
        self.grid.clone()
    }

    /// Undo timeline.
    #[must_use]
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Tool selection and pointer tracking.
    #[must_use]
    pub fn tool_state(&self) -> &ToolState {
        &self.tool
    }

    /// Session configuration.
    #[must_use]
    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// Pixel ↔ cell mapping of the pointer surface.
    #[must_use]
    pub fn mapping(&self) -> &SurfaceMapping {
        &self.mapping
    }

    /// Keyboard bindings, for rebinding by the host.
    pub fn keymap_mut(&mut self) -> &mut Keymap {
        &mut self.keymap
    }

    /// Remove every keyboard binding; the session stops reacting to keys.
    pub fn detach_shortcuts(&mut self) {
        self.keymap.clear();
    }

    /// Whether undo would change the grid.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Whether redo would change the grid.
    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Select the active tool.
    pub fn set_tool(&mut self, tool: Tool) {
        if self.tool.tool != tool {
            log::debug!("session: tool {:?} -> {:?}", self.tool.tool, tool);
        }
        self.tool.tool = tool;
    }

    /// Dispatch a pointer event. Returns whether the grid changed.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> bool {
        match event {
            PointerEvent::Down { position } => self.pointer_down(position),
            PointerEvent::Move { position } => self.pointer_move(position),
            PointerEvent::Up => {
                self.pointer_up();
                false
            }
            PointerEvent::Leave => {
                self.pointer_leave();
                false
            }
        }
    }

    /// Start a gesture and paint the cell under the pointer.
    ///
    /// Presses off the surface are ignored. Returns whether the grid changed.
    pub fn pointer_down(&mut self, position: Point) -> bool {
        if !self.mapping.contains(position) {
            return false;
        }
        let cell = self.mapping.cell_at(position);
        self.tool.drawing = true;
        self.track_pointer(position, cell);

        let changed = self.paint_segment(None, cell);
        self.tool.last_painted = Some(cell);
        if self.config.recording == Recording::PerMove {
            self.record();
        }
        log::debug!("session: gesture start at ({}, {})", cell.x, cell.y);
        changed
    }

    /// Track the pointer and, while drawing, paint from the last painted cell.
    ///
    /// Strokes off the surface stop one cell past the grid edge. Non-finite
    /// positions are ignored. Returns whether the grid changed.
    pub fn pointer_move(&mut self, position: Point) -> bool {
        if !position.is_finite() {
            return false;
        }
        let cell = self.mapping.cell_at(position);
        self.track_pointer(position, cell);

        if !self.tool.drawing {
            return false;
        }
        let cell = match self.tool.last_painted {
            Some(from) => self.mapping.clip_stroke(from, cell),
            None => cell,
        };
        if self.tool.last_painted == Some(cell) {
            return false;
        }
        let changed = self.paint_segment(self.tool.last_painted, cell);
        self.tool.last_painted = Some(cell);
        if self.config.recording == Recording::PerMove {
            self.record();
        }
        changed
    }

    /// End the gesture.
    pub fn pointer_up(&mut self) {
        self.finish_gesture();
    }

    /// End the gesture because the pointer left the surface.
    pub fn pointer_leave(&mut self) {
        self.finish_gesture();
    }

    /// Reset every cell to inactive as one undoable step.
    pub fn clear(&mut self) -> HistoryEvent {
        self.commit_pending();
        self.grid.clear();
        log::debug!("session: cleared");
        self.record()
    }

    /// Step back one history entry.
    pub fn undo(&mut self) -> HistoryEvent {
        self.commit_pending();
        let (grid, event) = self.history.undo();
        self.grid = grid.clone();
        log::debug!("session: undo -> {event:?}");
        event
    }

    /// Step forward one history entry.
    pub fn redo(&mut self) -> HistoryEvent {
        self.commit_pending();
        let (grid, event) = self.history.redo();
        self.grid = grid.clone();
        log::debug!("session: redo -> {event:?}");
        event
    }

    /// Run an editor action.
    pub fn apply(&mut self, action: EditorAction) -> HistoryEvent {
        match action {
            EditorAction::Undo => self.undo(),
            EditorAction::Redo => self.redo(),
            EditorAction::Clear => self.clear(),
            EditorAction::Tool(tool) => {
                self.set_tool(tool);
                HistoryEvent::Unchanged
            }
        }
    }

    /// Resolve a key press through the keymap and run the bound action.
    pub fn handle_key(&mut self, event: KeyEvent) -> Option<EditorAction> {
        let action = self.keymap.resolve(&event)?;
        self.apply(action);
        Some(action)
    }

    /// Build the render view-model for the current state.
    #[must_use]
    pub fn frame(&self) -> Frame {
        let palette = &self.config.palette;
        let cells = self
            .grid
            .iter()
            .map(|(coord, state)| {
                let hovered = self.tool.hovered == Some(coord);
                CellView {
                    coord,
                    bounds: self.mapping.cell_rect(coord),
                    state,
                    hovered,
                    fill: display_fill(palette, state, hovered),
                }
            })
            .collect();
        let brush = self.tool.brush_position.map(|center| BrushIndicator {
            center,
            radius: BRUSH_RADIUS,
            stroke: palette.brush,
        });
        Frame { cells, brush }
    }

    fn track_pointer(&mut self, position: Point, cell: CellCoord) {
        self.tool.brush_position = self.mapping.contains(position).then_some(position);
        self.tool.hovered = self.grid.contains(cell.x, cell.y).then_some(cell);
    }

    /// Apply the active tool along a segment on a working copy, then swap it in.
    fn paint_segment(&mut self, from: Option<CellCoord>, to: CellCoord) -> bool {
        let state = self.tool.tool.target_state();
        let mut working = self.grid.clone();
        let mut changed = false;
        for cell in StrokeCells::new(from, to) {
            changed |= working.set_at(cell, state);
        }
        self.grid = working;
        changed
    }

    fn record(&mut self) -> HistoryEvent {
        self.history.record(&self.grid)
    }

    fn finish_gesture(&mut self) {
        let was_drawing = self.tool.drawing;
        self.tool.reset_pointer();
        if was_drawing {
            self.commit_pending();
            log::debug!("session: gesture end");
        }
    }

    /// In per-gesture mode, record the grid if it moved away from the history head.
    fn commit_pending(&mut self) {
        if self.config.recording == Recording::PerGesture && self.grid != *self.history.current() {
            self.record();
        }
    }
}

//! Pointer scripts: a JSON list of editing steps replayed against a session.
//!
//! ```json
//! [{"down": [4, 4]}, {"move": [120, 40]}, "up", {"tool": "erase"}, "undo"]
//! ```
//!
//! Coordinates are surface pixels.

use crate::error::CliError;
use pixelgrid_core::{Key, KeyEvent, Modifiers, Point, PointerEvent, Session, Shortcut, Tool};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum Step {
    Down([f32; 2]),
    Move([f32; 2]),
    Up,
    Leave,
    Tool(Tool),
    Clear,
    Undo,
    Redo,
    Key(KeyStep),
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub(crate) struct KeyStep {
    key: char,
    #[serde(flatten)]
    modifiers: Modifiers,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub(crate) struct Script {
    steps: Vec<Step>,
}

impl Script {
    pub(crate) fn from_json(source: &str) -> Result<Self, CliError> {
        Ok(serde_json::from_str(source)?)
    }

    pub(crate) fn from_file(path: &Path) -> Result<Self, CliError> {
        let source = std::fs::read_to_string(path).map_err(|source| CliError::ScriptIo {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&source)
    }

    pub(crate) fn len(&self) -> usize {
        self.steps.len()
    }

    /// Feed every step to `session`. Returns how many steps changed the grid.
    pub(crate) fn replay(&self, session: &mut Session) -> usize {
        let mut changed = 0;
        for step in &self.steps {
            let before = session.history().index();
            let grid_before = session.grid().active_count();
            match *step {
                Step::Down([x, y]) => {
                    session.handle_pointer(PointerEvent::Down {
                        position: Point::new(x, y),
                    });
                }
                Step::Move([x, y]) => {
                    session.handle_pointer(PointerEvent::Move {
                        position: Point::new(x, y),
                    });
                }
                Step::Up => {
                    session.handle_pointer(PointerEvent::Up);
                }
                Step::Leave => {
                    session.handle_pointer(PointerEvent::Leave);
                }
                Step::Tool(tool) => session.set_tool(tool),
                Step::Clear => {
                    session.clear();
                }
                Step::Undo => {
                    session.undo();
                }
                Step::Redo => {
                    session.redo();
                }
                Step::Key(KeyStep { key, modifiers }) => {
                    let event = KeyEvent::new(Key::char(key), modifiers);
                    if session.handle_key(event).is_none() {
                        log::warn!("no binding for {}", Shortcut::from(event));
                    }
                }
            }
            if session.history().index() != before || session.grid().active_count() != grid_before
            {
                changed += 1;
            }
        }
        log::debug!("replayed {} steps, {changed} changed the grid", self.steps.len());
        changed
    }
}

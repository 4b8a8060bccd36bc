//! Input events delivered to an editing session.

use crate::geometry::Point;
use crate::shortcut::Modifiers;
use serde::{Deserialize, Serialize};

/// Pointer events on the drawing surface.
///
/// Positions are in surface pixels relative to the surface's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointerEvent {
    /// Primary button pressed
    Down {
        /// Position of press
        position: Point,
    },
    /// Pointer moved
    Move {
        /// New position
        position: Point,
    },
    /// Primary button released
    Up,
    /// Pointer left the surface
    Leave,
}

impl PointerEvent {
    /// Position carried by the event, if any.
    #[must_use]
    pub const fn position(&self) -> Option<Point> {
        match self {
            Self::Down { position } | Self::Move { position } => Some(*position),
            Self::Up | Self::Leave => None,
        }
    }
}

/// Keyboard keys the editor distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    /// A printable character key, stored lower-case.
    Char(char),
    /// Escape key
    Escape,
    /// Delete key
    Delete,
    /// Backspace key
    Backspace,
    /// Enter/Return key
    Enter,
}

impl Key {
    /// Character key, normalized to lower case.
    ///
    /// Browsers report `"Z"` while Shift is held; both map to the same key.
    #[must_use]
    pub fn char(c: char) -> Self {
        Self::Char(c.to_ascii_lowercase())
    }
}

/// A key press with its modifier state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KeyEvent {
    /// The key pressed.
    pub key: Key,
    /// Modifiers held during the press.
    pub modifiers: Modifiers,
}

impl KeyEvent {
    /// Create a key event.
    #[must_use]
    pub fn new(key: Key, modifiers: Modifiers) -> Self {
        let key = match key {
            Key::Char(c) => Key::char(c),
            other => other,
        };
        Self { key, modifiers }
    }
}

//! Keyboard shortcut bindings for an editing session.
//!
//! This module provides:
//! - Modifier key state (Ctrl, Alt, Shift, Meta)
//! - Shortcuts (key + modifiers) and the editor actions they trigger
//! - A keymap with explicit bind/unbind so bindings live exactly as long as
//!   the session that owns them

use crate::event::{Key, KeyEvent};
use crate::tool::Tool;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Modifier keys for keyboard shortcuts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Modifiers {
    /// Control key.
    pub ctrl: bool,
    /// Alt key (Option on Mac).
    pub alt: bool,
    /// Shift key.
    pub shift: bool,
    /// Meta key (Windows key, Cmd on Mac).
    pub meta: bool,
}

impl Modifiers {
    /// No modifiers.
    pub const NONE: Self = Self::new(false, false, false, false);
    /// Ctrl only.
    pub const CTRL: Self = Self::new(true, false, false, false);
    /// Shift only.
    pub const SHIFT: Self = Self::new(false, false, true, false);
    /// Meta only.
    pub const META: Self = Self::new(false, false, false, true);

    #[must_use]
    pub const fn new(ctrl: bool, alt: bool, shift: bool, meta: bool) -> Self {
        Self {
            ctrl,
            alt,
            shift,
            meta,
        }
    }

    /// Same modifiers with Shift added.
    #[must_use]
    pub const fn with_shift(self) -> Self {
        Self {
            shift: true,
            ..self
        }
    }

    /// True when no modifier is held.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        !(self.ctrl || self.alt || self.shift || self.meta)
    }
}

/// Renders as `Ctrl+Alt+Shift+Meta`, listing only the held keys.
impl fmt::Display for Modifiers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let held = [
            (self.ctrl, "Ctrl"),
            (self.alt, "Alt"),
            (self.shift, "Shift"),
            (self.meta, "Meta"),
        ];
        let names: Vec<&str> = held.iter().filter(|(on, _)| *on).map(|&(_, n)| n).collect();
        f.write_str(&names.join("+"))
    }
}

/// Modifier that arms the undo/redo shortcuts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrimaryModifier {
    /// Cmd on Mac.
    #[default]
    Meta,
    /// Ctrl everywhere.
    Ctrl,
}

impl PrimaryModifier {
    /// The modifier set for this primary key alone.
    #[must_use]
    pub const fn modifiers(self) -> Modifiers {
        match self {
            Self::Meta => Modifiers::META,
            Self::Ctrl => Modifiers::CTRL,
        }
    }
}

/// Shortcut configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ShortcutConfig {
    /// Modifier used by the default undo/redo bindings.
    pub primary: PrimaryModifier,
}

/// A keyboard shortcut (key + modifiers).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Shortcut {
    /// The key.
    pub key: Key,
    /// Modifier keys.
    pub modifiers: Modifiers,
}

impl Shortcut {
    #[must_use]
    pub const fn new(key: Key, modifiers: Modifiers) -> Self {
        Self { key, modifiers }
    }
}

impl fmt::Display for Shortcut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.modifiers.is_empty() {
            write!(f, "{}+", self.modifiers)?;
        }
        match self.key {
            Key::Char(c) => write!(f, "{}", c.to_ascii_uppercase()),
            other => write!(f, "{other:?}"),
        }
    }
}

impl From<KeyEvent> for Shortcut {
    fn from(event: KeyEvent) -> Self {
        Self::new(event.key, event.modifiers)
    }
}

/// Operation a shortcut invokes on the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EditorAction {
    /// Step back in history.
    Undo,
    /// Step forward in history.
    Redo,
    /// Reset the grid.
    Clear,
    /// Switch tool.
    Tool(Tool),
}

/// Unique ID for a shortcut binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShortcutId(u64);

impl ShortcutId {
    /// Raw id value.
    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

/// Shortcut → action table owned by a session.
#[derive(Debug, Clone, Default)]
pub struct Keymap {
    next_id: u64,
    bindings: HashMap<ShortcutId, (Shortcut, EditorAction)>,
    by_shortcut: HashMap<Shortcut, Vec<ShortcutId>>,
}

impl Keymap {
    /// Empty keymap.
    pub fn new() -> Self {
        Self::default()
    }

    /// Keymap with the standard undo (primary+Z) and redo (primary+Shift+Z) bindings.
    pub fn with_defaults(config: ShortcutConfig) -> Self {
        let primary = config.primary.modifiers();
        let mut keymap = Self::new();
        keymap.bind(Shortcut::new(Key::char('z'), primary), EditorAction::Undo);
        keymap.bind(
            Shortcut::new(Key::char('z'), primary.with_shift()),
            EditorAction::Redo,
        );
        keymap
    }

    /// Register a binding. Later bindings for the same shortcut take precedence.
    pub fn bind(&mut self, shortcut: Shortcut, action: EditorAction) -> ShortcutId {
        let id = ShortcutId(self.next_id);
        self.next_id += 1;
        self.bindings.insert(id, (shortcut, action));
        self.by_shortcut.entry(shortcut).or_default().push(id);
        id
    }

    /// Remove a binding. Returns false if the id was unknown.
    pub fn unbind(&mut self, id: ShortcutId) -> bool {
        let Some((shortcut, _)) = self.bindings.remove(&id) else {
            return false;
        };
        if let Some(ids) = self.by_shortcut.get_mut(&shortcut) {
            ids.retain(|&i| i != id);
            if ids.is_empty() {
                self.by_shortcut.remove(&shortcut);
            }
        }
        true
    }

    /// Drop every binding.
    pub fn clear(&mut self) {
        self.bindings.clear();
        self.by_shortcut.clear();
    }

    /// Action bound to a key press, if any.
    pub fn resolve(&self, event: &KeyEvent) -> Option<EditorAction> {
        let id = self.by_shortcut.get(&Shortcut::from(*event))?.last()?;
        self.bindings.get(id).map(|&(_, action)| action)
    }

    /// Number of bindings.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// True when nothing is bound.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

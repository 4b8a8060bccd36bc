//! Grid editing engine for the Pixelgrid pixel-art surface.
//!
//! This crate provides the pieces an editing front end drives:
//! - The cell model: [`CellState`], [`Grid`]
//! - Gap-free stroke interpolation: [`interpolate`], [`StrokeCells`]
//! - Snapshot undo/redo: [`History`]
//! - The tool controller: [`Session`], fed with [`PointerEvent`]s and [`KeyEvent`]s
//! - Render view-model: [`Frame`]
//! - Configuration: [`EditorConfig`] (TOML)
//!
//! Image export lives in `pixelgrid-export`, which consumes [`Grid`] snapshots.

mod cell;
mod color;
pub mod config;
mod error;
mod event;
mod frame;
mod geometry;
mod grid;
mod history;
mod pattern;
mod session;
pub mod shortcut;
mod stroke;
mod surface;
mod tool;

pub use cell::CellState;
pub use color::{Color, ColorParseError, Palette};
pub use config::{EditorConfig, GridConfig, Recording, SurfaceConfig};
pub use error::{ConfigError, PatternError};
pub use event::{Key, KeyEvent, PointerEvent};
pub use frame::{display_fill, BrushIndicator, CellView, Frame, BRUSH_RADIUS};
pub use geometry::{CellCoord, Point, Rect, Size};
pub use grid::Grid;
pub use history::{History, HistoryConfig, HistoryEvent};
pub use pattern::{SeedPattern, IMAGE_THRESHOLD};
pub use session::Session;
pub use shortcut::{EditorAction, Keymap, Modifiers, PrimaryModifier, Shortcut, ShortcutId};
pub use stroke::{interpolate, StrokeCells};
pub use surface::SurfaceMapping;
pub use tool::{Tool, ToolState};

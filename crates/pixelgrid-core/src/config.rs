//! Editor configuration.
//!
//! Every field has a default matching the reference editor (96×64 cells on a
//! 900×600 surface), so a TOML file only needs the keys it overrides:
//!
//! ```toml
//! [grid]
//! width = 32
//! height = 32
//!
//! [history]
//! max_entries = 500
//! ```

use crate::color::Palette;
use crate::error::ConfigError;
use crate::geometry::Size;
use crate::history::HistoryConfig;
use crate::shortcut::ShortcutConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Grid dimensions in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Columns
    pub width: u32,
    /// Rows
    pub height: u32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            width: 96,
            height: 64,
        }
    }
}

/// Pointer surface size in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SurfaceConfig {
    /// Width in pixels
    pub width: f32,
    /// Height in pixels
    pub height: f32,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            width: 900.0,
            height: 600.0,
        }
    }
}

impl SurfaceConfig {
    /// Surface as a [`Size`].
    #[must_use]
    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

/// How pointer-move painting is grouped into history entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Recording {
    /// One entry per pointer-move sample that changed the stroke.
    #[default]
    PerMove,
    /// One entry per gesture, committed on pointer up/leave.
    PerGesture,
}

/// Complete editor configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// History granularity while dragging.
    pub recording: Recording,
    /// Grid dimensions.
    pub grid: GridConfig,
    /// Pointer surface.
    pub surface: SurfaceConfig,
    /// Live rendering colors.
    pub palette: Palette,
    /// Undo history limits.
    pub history: HistoryConfig,
    /// Keyboard shortcuts.
    pub shortcuts: ShortcutConfig,
}

impl EditorConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and validate a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let source = std::fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }

    /// Render as TOML.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Reject values the editor cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid.width == 0 || self.grid.height == 0 {
            return Err(ConfigError::Invalid {
                field: "grid",
                reason: format!(
                    "dimensions must be positive, got {}x{}",
                    self.grid.width, self.grid.height
                ),
            });
        }
        if !(self.surface.width > 0.0 && self.surface.height > 0.0) {
            return Err(ConfigError::Invalid {
                field: "surface",
                reason: format!(
                    "size must be positive, got {}x{}",
                    self.surface.width, self.surface.height
                ),
            });
        }
        Ok(())
    }
}

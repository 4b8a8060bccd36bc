//! Export settings.

use crate::error::ExportError;
use pixelgrid_core::{CellState, Color, Palette};
use serde::{Deserialize, Serialize};

/// Colors written into exported files.
///
/// The vector output uses a darker inactive tone than the bitmap, matching
/// what the live surface shows for inactive cells.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportPalette {
    /// Glyph fill for active cells in both outputs.
    pub active: Color,
    /// Glyph fill for inactive cells in the bitmap.
    pub inactive: Color,
    /// Glyph fill for inactive cells in the vector document.
    pub vector_inactive: Color,
    /// Bitmap cell background.
    pub background: Color,
}

impl ExportPalette {
    /// `#0D0D0D`
    pub const BACKGROUND: Color = Color::from_rgb8(0x0D, 0x0D, 0x0D);

    /// Bitmap glyph fill for a cell.
    #[must_use]
    pub const fn bitmap_fill(&self, state: CellState) -> Color {
        match state {
            CellState::Active => self.active,
            CellState::Inactive => self.inactive,
        }
    }

    /// Vector glyph fill for a cell.
    #[must_use]
    pub const fn vector_fill(&self, state: CellState) -> Color {
        match state {
            CellState::Active => self.active,
            CellState::Inactive => self.vector_inactive,
        }
    }
}

impl Default for ExportPalette {
    fn default() -> Self {
        Self {
            active: Palette::ACTIVE,
            inactive: Palette::INACTIVE,
            vector_inactive: Palette::INACTIVE_DISPLAY,
            background: Self::BACKGROUND,
        }
    }
}

/// Export configuration, loadable from the `[export]` table of a config file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Cell edge in output units (SVG user units, bitmap pixels before `scale`).
    pub cell_size: u32,
    /// Bitmap supersampling factor.
    pub scale: u32,
    /// Glyph scale inside each SVG cell.
    pub vector_scale: f32,
    /// Largest bitmap, in pixels, the exporter will allocate.
    pub max_pixels: u64,
    /// Name the archive is delivered under.
    pub archive_name: String,
    /// Archive entry holding the PNG.
    pub bitmap_name: String,
    /// Archive entry holding the SVG.
    pub vector_name: String,
    /// Output colors.
    pub palette: ExportPalette,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            cell_size: 25,
            scale: 5,
            vector_scale: 3.57,
            max_pixels: 128 * 1024 * 1024,
            archive_name: "pixel-art.zip".to_string(),
            bitmap_name: "pixel-art.png".to_string(),
            vector_name: "pixel-art.svg".to_string(),
            palette: ExportPalette::default(),
        }
    }
}

impl ExportConfig {
    /// Bitmap pixels per cell edge.
    #[must_use]
    pub const fn bitmap_cell(&self) -> u32 {
        self.cell_size.saturating_mul(self.scale)
    }

    /// Bitmap dimensions for a grid of `columns` by `rows` cells.
    ///
    /// Returns `None` when the size does not fit in `u32`.
    #[must_use]
    pub fn bitmap_size(&self, columns: u32, rows: u32) -> Option<(u32, u32)> {
        let cell = self.cell_size.checked_mul(self.scale)?;
        Some((columns.checked_mul(cell)?, rows.checked_mul(cell)?))
    }

    /// Reject values that cannot produce an export.
    pub fn validate(&self) -> Result<(), ExportError> {
        if self.cell_size == 0 || self.scale == 0 {
            return Err(ExportError::Config(format!(
                "cell_size and scale must be positive, got {} and {}",
                self.cell_size, self.scale
            )));
        }
        if !(self.vector_scale.is_finite() && self.vector_scale > 0.0) {
            return Err(ExportError::Config(format!(
                "vector_scale must be positive, got {}",
                self.vector_scale
            )));
        }
        for (field, name) in [
            ("archive_name", &self.archive_name),
            ("bitmap_name", &self.bitmap_name),
            ("vector_name", &self.vector_name),
        ] {
            if name.is_empty() || name.contains(['/', '\\']) {
                return Err(ExportError::Config(format!(
                    "{field} must be a plain file name, got {name:?}"
                )));
            }
        }
        if self.bitmap_name == self.vector_name {
            return Err(ExportError::Config(
                "bitmap_name and vector_name must differ".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ExportConfig::default();
        assert_eq!(config.bitmap_cell(), 125);
        assert_eq!(config.bitmap_size(96, 64), Some((12000, 8000)));
        assert_eq!(config.archive_name, "pixel-art.zip");
        assert_eq!(config.palette.background.to_hex(), "#0d0d0d");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_fills() {
        let palette = ExportPalette::default();
        assert_eq!(palette.bitmap_fill(CellState::Inactive).to_hex(), "#3b3b3b");
        assert_eq!(palette.vector_fill(CellState::Inactive).to_hex(), "#2a2a2a");
        assert_eq!(palette.vector_fill(CellState::Active).to_hex(), "#f4eadd");
    }

    #[test]
    fn test_bitmap_size_overflow() {
        let config = ExportConfig {
            cell_size: u32::MAX,
            ..ExportConfig::default()
        };
        assert_eq!(config.bitmap_size(2, 2), None);
    }

    #[test]
    fn test_validate_rejects() {
        let zero = ExportConfig {
            scale: 0,
            ..ExportConfig::default()
        };
        assert!(matches!(zero.validate(), Err(ExportError::Config(_))));

        let nested = ExportConfig {
            bitmap_name: "out/pixel-art.png".to_string(),
            ..ExportConfig::default()
        };
        assert!(matches!(nested.validate(), Err(ExportError::Config(_))));

        let clash = ExportConfig {
            vector_name: "pixel-art.png".to_string(),
            ..ExportConfig::default()
        };
        assert!(matches!(clash.validate(), Err(ExportError::Config(_))));
    }

    #[test]
    fn test_partial_json() {
        let config: ExportConfig = serde_json::from_str(r#"{"scale": 1}"#).unwrap();
        assert_eq!(config.scale, 1);
        assert_eq!(config.cell_size, 25);
    }
}

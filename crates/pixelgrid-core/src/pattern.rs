//! Seed patterns: coordinate lists that pre-populate a grid.
//!
//! Patterns are stored as JSON arrays of `[x, y]` pairs. They can also be
//! traced from a reference image: the image is resampled to one pixel per
//! cell and every pixel whose red channel is above [`IMAGE_THRESHOLD`]
//! becomes an active cell.

use crate::error::PatternError;
use crate::geometry::CellCoord;
use crate::grid::Grid;
use image::imageops::{self, FilterType};
use image::RgbaImage;
use std::path::Path;

/// Red channel value a traced pixel must exceed to count as active.
pub const IMAGE_THRESHOLD: u8 = 128;

/// Opening stroke of the default flourish artwork.
const FLOURISH: [(i32, i32); 14] = [
    (50, 10),
    (51, 10),
    (52, 10),
    (53, 10),
    (48, 11),
    (49, 11),
    (50, 11),
    (54, 11),
    (55, 11),
    (47, 12),
    (48, 12),
    (49, 12),
    (56, 12),
    (57, 12),
];

/// A set of cells to activate on a fresh grid.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SeedPattern {
    cells: Vec<CellCoord>,
}

impl SeedPattern {
    /// Pattern from explicit coordinates.
    #[must_use]
    pub fn new(cells: Vec<CellCoord>) -> Self {
        Self { cells }
    }

    /// The default flourish artwork.
    #[must_use]
    pub fn flourish() -> Self {
        Self::new(FLOURISH.iter().copied().map(CellCoord::from).collect())
    }

    /// Parse a JSON array of `[x, y]` pairs.
    pub fn from_json(source: &str) -> Result<Self, PatternError> {
        let pairs: Vec<(i32, i32)> = serde_json::from_str(source)?;
        Ok(Self::new(pairs.into_iter().map(CellCoord::from).collect()))
    }

    /// Read a JSON pattern file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, PatternError> {
        let source = std::fs::read_to_string(path)?;
        Self::from_json(&source)
    }

    /// Render as a JSON array of `[x, y]` pairs.
    pub fn to_json(&self) -> Result<String, PatternError> {
        let pairs: Vec<(i32, i32)> = self.cells.iter().map(|c| (c.x, c.y)).collect();
        Ok(serde_json::to_string(&pairs)?)
    }

    /// Capture the active cells of a grid.
    #[must_use]
    pub fn from_grid(grid: &Grid) -> Self {
        Self::new(
            grid.iter()
                .filter(|(_, state)| state.is_active())
                .map(|(coord, _)| coord)
                .collect(),
        )
    }

    /// Trace an image onto a `width`×`height` grid.
    ///
    /// The image is resampled to exactly one pixel per cell, then thresholded
    /// on the red channel. Cells come out in row-major order.
    #[must_use]
    pub fn from_image(image: &RgbaImage, width: u32, height: u32) -> Self {
        if width == 0 || height == 0 || image.width() == 0 || image.height() == 0 {
            return Self::default();
        }
        let sampled = if image.dimensions() == (width, height) {
            image.clone()
        } else {
            imageops::resize(image, width, height, FilterType::Triangle)
        };
        let cells = sampled
            .enumerate_pixels()
            .filter(|(_, _, pixel)| pixel.0[0] > IMAGE_THRESHOLD)
            .map(|(x, y, _)| CellCoord::new(x as i32, y as i32))
            .collect();
        Self::new(cells)
    }

    /// Decode an image file and trace it with [`SeedPattern::from_image`].
    pub fn from_image_file(
        path: impl AsRef<Path>,
        width: u32,
        height: u32,
    ) -> Result<Self, PatternError> {
        let source = image::open(path)?.to_rgba8();
        log::debug!(
            "pattern: tracing {}x{} image onto {width}x{height} cells",
            source.width(),
            source.height()
        );
        Ok(Self::from_image(&source, width, height))
    }

    /// Coordinates in the pattern.
    #[must_use]
    pub fn cells(&self) -> &[CellCoord] {
        &self.cells
    }

    /// Activate the pattern's cells on `grid`; out-of-range cells are skipped.
    pub fn apply(&self, grid: &mut Grid) -> usize {
        grid.apply_pattern(&self.cells)
    }
}

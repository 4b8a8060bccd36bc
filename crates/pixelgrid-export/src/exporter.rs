//! The export pipeline: grid snapshot to bitmap, vector document and archive.

use crate::archive::{Archive, ZipBundle};
use crate::config::ExportConfig;
use crate::error::ExportError;
use crate::glyph::{Glyph, Placement, GLYPH_BOX, GLYPH_PATH};
use crate::raster::{PixmapSurface, RasterSurface};
use crate::sink::DownloadSink;
use crate::vector::{SvgDocument, VectorDocument};
use pixelgrid_core::Grid;
use std::path::PathBuf;
use std::sync::Arc;
use std::thread::JoinHandle;

/// Handle to an export running on a background thread.
pub type ExportHandle = JoinHandle<Result<Vec<u8>, ExportError>>;

/// Renders grids into the downloadable archive.
///
/// Cheap to clone; clones share the parsed glyph.
#[derive(Debug, Clone)]
pub struct Exporter {
    config: ExportConfig,
    glyph: Arc<Glyph>,
}

impl Exporter {
    /// Validate `config` and prepare the glyph outline.
    pub fn new(config: ExportConfig) -> Result<Self, ExportError> {
        config.validate()?;
        Ok(Self {
            config,
            glyph: Arc::new(Glyph::bowtie()?),
        })
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &ExportConfig {
        &self.config
    }

    /// Produce the zip archive holding the PNG and SVG renderings of `grid`.
    pub fn export(&self, grid: &Grid) -> Result<Vec<u8>, ExportError> {
        let png = self.render_bitmap(grid)?.encode_png()?;
        let svg = self.render_vector(grid)?.serialize();

        let mut bundle = ZipBundle::new();
        bundle.add_entry(&self.config.bitmap_name, &png)?;
        bundle.add_entry(&self.config.vector_name, svg.as_bytes())?;
        let archive = bundle.finish()?;

        log::info!(
            "exported {}x{} grid: png {} bytes, svg {} bytes, archive {} bytes",
            grid.width(),
            grid.height(),
            png.len(),
            svg.len(),
            archive.len()
        );
        Ok(archive)
    }

    /// Export `grid` and hand the archive to `sink`.
    ///
    /// Failures are logged and reported as `None`; calling again retries
    /// from scratch.
    pub fn export_and_deliver(&self, grid: &Grid, sink: &dyn DownloadSink) -> Option<PathBuf> {
        let delivered = self
            .export(grid)
            .and_then(|archive| sink.deliver(&self.config.archive_name, &archive));
        match delivered {
            Ok(path) => {
                log::info!("delivered {}", path.display());
                Some(path)
            }
            Err(err) => {
                log::error!("export failed: {err}");
                None
            }
        }
    }

    /// Run [`Exporter::export`] on a background thread.
    ///
    /// The snapshot is owned by the worker, so later edits never reach it.
    /// Dropping the handle detaches the work.
    #[must_use]
    pub fn spawn(&self, snapshot: Grid) -> ExportHandle {
        let exporter = self.clone();
        std::thread::spawn(move || exporter.export(&snapshot))
    }

    /// Rasterize `grid` onto a new [`PixmapSurface`].
    pub fn render_bitmap(&self, grid: &Grid) -> Result<PixmapSurface, ExportError> {
        let (width, height) = self
            .config
            .bitmap_size(grid.width(), grid.height())
            .ok_or_else(|| ExportError::Surface {
                width: grid.width(),
                height: grid.height(),
                reason: "bitmap dimensions overflow".to_string(),
            })?;
        let mut surface = PixmapSurface::new(width, height, self.config.max_pixels)?;
        self.paint_bitmap(grid, &mut surface);
        Ok(surface)
    }

    /// Paint every cell of `grid` onto `surface`: background square, then
    /// the glyph in the cell's color.
    pub fn paint_bitmap<S: RasterSurface>(&self, grid: &Grid, surface: &mut S) {
        let cell = self.config.bitmap_cell();
        let glyph_scale = cell as f32 / GLYPH_BOX;
        let palette = &self.config.palette;

        for (coord, state) in grid.iter() {
            let x = coord.x as u32 * cell;
            let y = coord.y as u32 * cell;
            surface.fill_rect(x, y, cell, cell, palette.background);
            let outline = self
                .glyph
                .placed(Placement::new(x as f32, y as f32, glyph_scale));
            surface.fill_path(&outline, palette.bitmap_fill(state));
        }
    }

    /// Build the SVG rendering of `grid`.
    pub fn render_vector(&self, grid: &Grid) -> Result<SvgDocument, ExportError> {
        let cell = self.config.cell_size;
        let (Some(width), Some(height)) = (
            grid.width().checked_mul(cell),
            grid.height().checked_mul(cell),
        ) else {
            return Err(ExportError::Surface {
                width: grid.width(),
                height: grid.height(),
                reason: "document dimensions overflow".to_string(),
            });
        };
        let mut document = SvgDocument::new(width, height, GLYPH_PATH, self.config.vector_scale);
        self.paint_vector(grid, &mut document);
        Ok(document)
    }

    /// Append one glyph per cell of `grid`, in row-major order.
    pub fn paint_vector<D: VectorDocument>(&self, grid: &Grid, document: &mut D) {
        let cell = self.config.cell_size as f32;
        let palette = &self.config.palette;
        for (coord, state) in grid.iter() {
            document.append_glyph(
                coord.x as f32 * cell,
                coord.y as f32 * cell,
                palette.vector_fill(state),
            );
        }
    }
}

/// Wait for a spawned export.
pub fn join_export(handle: ExportHandle) -> Result<Vec<u8>, ExportError> {
    handle.join().map_err(|_| ExportError::WorkerPanicked)?
}

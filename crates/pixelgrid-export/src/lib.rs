//! Image export for Pixelgrid.
//!
//! Turns a [`Grid`](pixelgrid_core::Grid) snapshot into a zip archive with a
//! PNG bitmap and an SVG document, both drawing one bowtie glyph per cell:
//!
//! - [`Exporter`] drives the pipeline
//! - [`RasterSurface`] / [`PixmapSurface`] for the bitmap
//! - [`VectorDocument`] / [`SvgDocument`] for the SVG
//! - [`Archive`] / [`ZipBundle`] for bundling
//! - [`DownloadSink`] for delivery

mod archive;
mod config;
mod error;
mod exporter;
pub mod glyph;
mod raster;
mod sink;
mod vector;

pub use archive::{Archive, ZipBundle};
pub use config::{ExportConfig, ExportPalette};
pub use error::ExportError;
pub use exporter::{join_export, ExportHandle, Exporter};
pub use glyph::{Glyph, Placement, GLYPH_PATH};
pub use raster::{PixmapSurface, RasterSurface};
pub use sink::{DirectorySink, DownloadSink, MemorySink};
pub use vector::{SvgDocument, VectorDocument};

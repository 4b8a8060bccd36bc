//! Bitmap rendering.
//!
//! Filling is aliased: a pixel takes the fill color when its center lies
//! inside the shape under the non-zero winding rule, so every pixel carries
//! exactly one of the colors painted into it.

use crate::error::ExportError;
use crate::glyph::Contour;
use image::codecs::png::PngEncoder;
use image::{ImageEncoder, Rgba, RgbaImage};
use pixelgrid_core::Color;

/// A pixel surface the exporter paints cells onto.
pub trait RasterSurface {
    /// Surface dimensions in pixels.
    fn dimensions(&self) -> (u32, u32);

    /// Fill an axis-aligned rectangle, clipped to the surface.
    fn fill_rect(&mut self, x: u32, y: u32, width: u32, height: u32, color: Color);

    /// Fill closed contours with the non-zero winding rule.
    fn fill_path(&mut self, contours: &[Contour], color: Color);

    /// Encode the surface as PNG bytes.
    fn encode_png(&self) -> Result<Vec<u8>, ExportError>;
}

/// [`RasterSurface`] backed by an in-memory RGBA image.
#[derive(Debug, Clone)]
pub struct PixmapSurface {
    image: RgbaImage,
}

impl PixmapSurface {
    /// Allocate a transparent surface of at most `max_pixels` pixels.
    pub fn new(width: u32, height: u32, max_pixels: u64) -> Result<Self, ExportError> {
        let pixels = u64::from(width) * u64::from(height);
        let reason = if pixels == 0 {
            Some("surface is empty".to_string())
        } else if pixels > max_pixels {
            Some(format!("{pixels} pixels exceeds the limit of {max_pixels}"))
        } else if usize::try_from(pixels.saturating_mul(4)).is_err() {
            Some("buffer does not fit in memory".to_string())
        } else {
            None
        };
        if let Some(reason) = reason {
            return Err(ExportError::Surface {
                width,
                height,
                reason,
            });
        }
        Ok(Self {
            image: RgbaImage::new(width, height),
        })
    }

    /// The underlying image.
    #[must_use]
    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Consume the surface and return its image.
    #[must_use]
    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    /// RGBA value of one pixel, or `None` outside the surface.
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        self.image.get_pixel_checked(x, y).map(|p| p.0)
    }

    fn fill_span(&mut self, y: u32, x0: u32, x1: u32, rgba: Rgba<u8>) {
        for x in x0..x1 {
            self.image.put_pixel(x, y, rgba);
        }
    }
}

impl RasterSurface for PixmapSurface {
    fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    fn fill_rect(&mut self, x: u32, y: u32, width: u32, height: u32, color: Color) {
        let (w, h) = self.image.dimensions();
        let x1 = x.saturating_add(width).min(w);
        let y1 = y.saturating_add(height).min(h);
        let rgba = Rgba(color.to_rgba8());
        for row in y.min(h)..y1 {
            self.fill_span(row, x.min(w), x1, rgba);
        }
    }

    fn fill_path(&mut self, contours: &[Contour], color: Color) {
        let (w, h) = self.image.dimensions();
        let Some((min_y, max_y)) = vertical_extent(contours) else {
            return;
        };
        let rgba = Rgba(color.to_rgba8());

        // Rows whose centers fall inside [min_y, max_y)
        let first = pixel_index_at_or_after(min_y).min(h);
        let last = pixel_index_at_or_after(max_y).min(h);

        let mut crossings: Vec<(f32, i32)> = Vec::new();
        for row in first..last {
            let sample_y = row as f32 + 0.5;
            crossings.clear();
            for contour in contours {
                collect_crossings(contour, sample_y, &mut crossings);
            }
            crossings.sort_by(|a, b| a.0.total_cmp(&b.0));

            let mut winding = 0;
            for pair in crossings.windows(2) {
                winding += pair[0].1;
                if winding == 0 {
                    continue;
                }
                let x0 = pixel_index_at_or_after(pair[0].0).min(w);
                let x1 = pixel_index_at_or_after(pair[1].0).min(w);
                self.fill_span(row, x0, x1, rgba);
            }
        }
    }

    fn encode_png(&self) -> Result<Vec<u8>, ExportError> {
        let (width, height) = self.image.dimensions();
        let mut png_bytes = Vec::new();
        PngEncoder::new(&mut png_bytes).write_image(
            self.image.as_raw(),
            width,
            height,
            image::ExtendedColorType::Rgba8,
        )?;
        Ok(png_bytes)
    }
}

fn vertical_extent(contours: &[Contour]) -> Option<(f32, f32)> {
    contours
        .iter()
        .flatten()
        .fold(None, |acc, p| match acc {
            None => Some((p.y, p.y)),
            Some((lo, hi)) => Some((lo.min(p.y), hi.max(p.y))),
        })
}

/// First pixel index whose center is at or beyond `coord`.
fn pixel_index_at_or_after(coord: f32) -> u32 {
    let index = (coord - 0.5).ceil();
    if index <= 0.0 {
        0
    } else {
        index as u32
    }
}

/// Record where each edge of a closed contour crosses the horizontal line
/// `y`, with +1 for downward edges and -1 for upward ones.
fn collect_crossings(contour: &Contour, y: f32, out: &mut Vec<(f32, i32)>) {
    let n = contour.len();
    if n < 2 {
        return;
    }
    for (i, &a) in contour.iter().enumerate() {
        let b = contour[(i + 1) % n];
        let (dir, top, bottom) = if a.y < b.y {
            (1, a, b)
        } else if b.y < a.y {
            (-1, b, a)
        } else {
            continue;
        };
        if y < top.y || y >= bottom.y {
            continue;
        }
        let t = (y - top.y) / (bottom.y - top.y);
        out.push((top.x + t * (bottom.x - top.x), dir));
    }
}

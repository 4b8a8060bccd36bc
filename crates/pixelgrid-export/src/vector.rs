//! SVG rendering.

use pixelgrid_core::Color;

/// A vector document built from placed glyphs.
pub trait VectorDocument {
    /// Append a glyph with its origin at (`x`, `y`) in document units.
    fn append_glyph(&mut self, x: f32, y: f32, fill: Color);

    /// Number of glyphs appended so far.
    fn glyph_count(&self) -> usize;

    /// Render the document.
    fn serialize(&self) -> String;
}

/// [`VectorDocument`] that writes SVG markup.
///
/// Every glyph is a `<path>` sharing the same path data, positioned with a
/// `translate(..) scale(..)` transform.
#[derive(Debug, Clone)]
pub struct SvgDocument {
    width: u32,
    height: u32,
    path_data: String,
    glyph_scale: f32,
    body: String,
    glyphs: usize,
}

impl SvgDocument {
    /// Create an empty `width`×`height` document whose glyphs use `path_data`
    /// scaled by `glyph_scale`.
    pub fn new(width: u32, height: u32, path_data: impl Into<String>, glyph_scale: f32) -> Self {
        Self {
            width,
            height,
            path_data: path_data.into(),
            glyph_scale,
            body: String::new(),
            glyphs: 0,
        }
    }

    /// Document width in user units.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Document height in user units.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }
}

impl VectorDocument for SvgDocument {
    fn append_glyph(&mut self, x: f32, y: f32, fill: Color) {
        let line = format!(
            "  <path d=\"{}\" fill=\"{}\" transform=\"translate({x}, {y}) scale({})\"/>\n",
            self.path_data,
            fill.to_hex(),
            self.glyph_scale,
        );
        self.body.push_str(&line);
        self.glyphs += 1;
    }

    fn glyph_count(&self) -> usize {
        self.glyphs
    }

    fn serialize(&self) -> String {
        let (w, h) = (self.width, self.height);
        format!(
            "<svg width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\" xmlns=\"http://www.w3.org/2000/svg\">\n{}</svg>\n",
            self.body
        )
    }
}

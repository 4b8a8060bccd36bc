//! The per-cell glyph: a rounded bowtie drawn in a 7×7 unit box.
//!
//! The same path data is embedded verbatim in the SVG output and flattened
//! into polygons for the bitmap rasterizer.

use crate::error::ExportError;
use pixelgrid_core::Point;

/// SVG path data of the glyph, in a `0 0 7 7` view box.
pub const GLYPH_PATH: &str = "M6.38787 1.60426C6.69684 1.2953 6.69684 0.794358 6.38787 0.485389C6.07891 0.17642 5.57797 0.17642 5.269 0.485389L3.45493 2.29946L1.64089 0.485416C1.33192 0.176447 0.83098 0.176447 0.522011 0.485416C0.213042 0.794385 0.213042 1.29532 0.522011 1.60429L2.33605 3.41833L0.52201 5.23238C0.213041 5.54135 0.213041 6.04228 0.52201 6.35125C0.830979 6.66022 1.33192 6.66022 1.64089 6.35125L3.45493 4.53721L5.269 6.35128C5.57797 6.66025 6.07891 6.66025 6.38787 6.35128C6.69684 6.04231 6.69684 5.54137 6.38787 5.23241L4.5738 3.41833L6.38787 1.60426Z";

/// Side length of the glyph's view box.
pub const GLYPH_BOX: f32 = 7.0;

/// Line segments used to approximate each cubic curve.
const CURVE_SEGMENTS: usize = 8;

/// Scale-then-translate transform (`translate(tx, ty) scale(s)` in SVG terms).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// Uniform scale
    pub scale: f32,
    /// Horizontal offset after scaling
    pub tx: f32,
    /// Vertical offset after scaling
    pub ty: f32,
}

impl Placement {
    /// Create a placement.
    #[must_use]
    pub const fn new(tx: f32, ty: f32, scale: f32) -> Self {
        Self { scale, tx, ty }
    }

    /// Map a glyph-space point to output space.
    #[must_use]
    pub fn apply(&self, p: Point) -> Point {
        Point::new(p.x * self.scale + self.tx, p.y * self.scale + self.ty)
    }
}

/// A closed outline flattened to line segments.
pub type Contour = Vec<Point>;

/// Parsed glyph outline.
#[derive(Debug, Clone, PartialEq)]
pub struct Glyph {
    contours: Vec<Contour>,
}

impl Glyph {
    /// The standard bowtie glyph.
    pub fn bowtie() -> Result<Self, ExportError> {
        Self::parse(GLYPH_PATH)
    }

    /// Parse absolute SVG path data (`M`, `L`, `C`, `Z` commands).
    pub fn parse(data: &str) -> Result<Self, ExportError> {
        let tokens = tokenize(data)?;
        let mut contours: Vec<Contour> = Vec::new();
        let mut current: Contour = Vec::new();
        let mut cursor = Point::ORIGIN;
        let mut command = None;
        let mut i = 0;

        while i < tokens.len() {
            if let Token::Command(c) = tokens[i] {
                command = Some(c);
                i += 1;
                if c == 'Z' {
                    if current.len() > 2 {
                        contours.push(std::mem::take(&mut current));
                    }
                    current.clear();
                    continue;
                }
            }
            let Some(c) = command else {
                return Err(ExportError::Glyph("path data must start with a command".into()));
            };
            match c {
                'M' | 'L' => {
                    let [x, y] = numbers::<2>(&tokens, &mut i)?;
                    cursor = Point::new(x, y);
                    if c == 'M' && current.len() > 2 {
                        contours.push(std::mem::take(&mut current));
                    }
                    if c == 'M' {
                        current.clear();
                    }
                    current.push(cursor);
                    // Coordinates following M are implicit L
                    command = Some('L');
                }
                'C' => {
                    let [x1, y1, x2, y2, x, y] = numbers::<6>(&tokens, &mut i)?;
                    let (c1, c2, end) = (Point::new(x1, y1), Point::new(x2, y2), Point::new(x, y));
                    for step in 1..=CURVE_SEGMENTS {
                        let t = step as f32 / CURVE_SEGMENTS as f32;
                        current.push(cubic(cursor, c1, c2, end, t));
                    }
                    cursor = end;
                }
                'Z' => {
                    return Err(ExportError::Glyph("unexpected number after Z".into()));
                }
                other => {
                    return Err(ExportError::Glyph(format!("unsupported command '{other}'")));
                }
            }
        }
        if current.len() > 2 {
            contours.push(current);
        }
        if contours.is_empty() {
            return Err(ExportError::Glyph("path has no closed area".into()));
        }
        Ok(Self { contours })
    }

    /// Flattened contours in glyph space.
    #[must_use]
    pub fn contours(&self) -> &[Contour] {
        &self.contours
    }

    /// Contours mapped through a placement.
    #[must_use]
    pub fn placed(&self, placement: Placement) -> Vec<Contour> {
        self.contours
            .iter()
            .map(|c| c.iter().map(|&p| placement.apply(p)).collect())
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Token {
    Command(char),
    Number(f32),
}

fn tokenize(data: &str) -> Result<Vec<Token>, ExportError> {
    let mut tokens = Vec::new();
    let mut chars = data.char_indices().peekable();
    while let Some(&(start, ch)) = chars.peek() {
        if ch.is_ascii_alphabetic() && ch != 'e' && ch != 'E' {
            tokens.push(Token::Command(ch.to_ascii_uppercase()));
            if ch.is_ascii_lowercase() {
                return Err(ExportError::Glyph(format!(
                    "relative command '{ch}' is not supported"
                )));
            }
            chars.next();
        } else if ch.is_whitespace() || ch == ',' {
            chars.next();
        } else if ch.is_ascii_digit() || ch == '-' || ch == '+' || ch == '.' {
            chars.next();
            let mut end = start + ch.len_utf8();
            let mut seen_dot = ch == '.';
            let mut prev = ch;
            while let Some(&(idx, c)) = chars.peek() {
                let sign_in_exponent = (c == '-' || c == '+') && (prev == 'e' || prev == 'E');
                let extends = c.is_ascii_digit()
                    || (c == '.' && !seen_dot)
                    || c == 'e'
                    || c == 'E'
                    || sign_in_exponent;
                if !extends {
                    break;
                }
                seen_dot |= c == '.';
                prev = c;
                end = idx + c.len_utf8();
                chars.next();
            }
            let text = &data[start..end];
            let value = text
                .parse::<f32>()
                .map_err(|_| ExportError::Glyph(format!("bad number '{text}'")))?;
            tokens.push(Token::Number(value));
        } else {
            return Err(ExportError::Glyph(format!("unexpected character '{ch}'")));
        }
    }
    Ok(tokens)
}

fn numbers<const N: usize>(tokens: &[Token], i: &mut usize) -> Result<[f32; N], ExportError> {
    let mut out = [0.0; N];
    for slot in &mut out {
        match tokens.get(*i) {
            Some(Token::Number(v)) => *slot = *v,
            _ => return Err(ExportError::Glyph("missing coordinate".into())),
        }
        *i += 1;
    }
    Ok(out)
}

fn cubic(p0: Point, p1: Point, p2: Point, p3: Point, t: f32) -> Point {
    let mt = 1.0 - t;
    let a = mt * mt * mt;
    let b = 3.0 * mt * mt * t;
    let c = 3.0 * mt * t * t;
    let d = t * t * t;
    Point::new(
        a * p0.x + b * p1.x + c * p2.x + d * p3.x,
        a * p0.y + b * p1.y + c * p2.y + d * p3.y,
    )
}

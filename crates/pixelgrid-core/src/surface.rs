//! Mapping between surface pixels and grid cells.

use crate::geometry::{CellCoord, Point, Rect, Size};

/// Fixed-size rendering region laid over a grid.
///
/// Cell size is `surface / grid` per axis and need not be an integer
/// (900 / 96 = 9.375 for the reference surface).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceMapping {
    surface: Size,
    columns: u32,
    rows: u32,
}

impl SurfaceMapping {
    /// Map a `surface` of logical pixels onto `columns × rows` cells.
    #[must_use]
    pub const fn new(surface: Size, columns: u32, rows: u32) -> Self {
        Self {
            surface,
            columns,
            rows,
        }
    }

    /// Surface size in pixels.
    #[must_use]
    pub const fn surface(&self) -> Size {
        self.surface
    }

    /// Bounds of the surface at the origin.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        Rect::from_size(self.surface)
    }

    /// Pixel size of one cell.
    #[must_use]
    pub fn cell_size(&self) -> Size {
        Size::new(
            self.surface.width / self.columns.max(1) as f32,
            self.surface.height / self.rows.max(1) as f32,
        )
    }

    /// Whether a pointer position lies on the surface.
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        self.bounds().contains_point(&point)
    }

    /// Cell under a pointer position (`floor(px / cell)` per axis).
    ///
    /// Positions off the surface map to coordinates outside the grid.
    #[must_use]
    pub fn cell_at(&self, point: Point) -> CellCoord {
        let cell = self.cell_size();
        CellCoord::new(
            (point.x / cell.width).floor() as i32,
            (point.y / cell.height).floor() as i32,
        )
    }

    /// End of the stroke `from -> to`, shortened so it stops one cell past the
    /// grid edge.
    ///
    /// The direction of the segment is kept, so the in-grid cells it crosses
    /// are the same. `from` is expected within that one-cell margin.
    #[must_use]
    pub fn clip_stroke(&self, from: CellCoord, to: CellCoord) -> CellCoord {
        let x = Span::new(from.x, to.x, self.columns);
        let y = Span::new(from.y, to.y, self.rows);
        let t = x.limit().min(y.limit());
        if t >= 1.0 {
            return to;
        }
        CellCoord::new(x.at(t), y.at(t))
    }

    /// Pixel rectangle covered by a cell.
    #[must_use]
    pub fn cell_rect(&self, coord: CellCoord) -> Rect {
        let cell = self.cell_size();
        Rect::new(
            coord.x as f32 * cell.width,
            coord.y as f32 * cell.height,
            cell.width,
            cell.height,
        )
    }
}

/// One axis of a stroke, with the one-cell margin around `0..cells`.
struct Span {
    start: f64,
    delta: f64,
    lo: f64,
    hi: f64,
}

impl Span {
    fn new(from: i32, to: i32, cells: u32) -> Self {
        Self {
            start: f64::from(from),
            delta: f64::from(to) - f64::from(from),
            lo: -1.0,
            hi: f64::from(cells),
        }
    }

    /// Fraction of the stroke that stays within the margin on this axis.
    fn limit(&self) -> f64 {
        let end = self.start + self.delta;
        let t = if end > self.hi {
            (self.hi - self.start) / self.delta
        } else if end < self.lo {
            (self.lo - self.start) / self.delta
        } else {
            1.0
        };
        t.max(0.0)
    }

    fn at(&self, t: f64) -> i32 {
        (self.start + t * self.delta).round().clamp(self.lo, self.hi) as i32
    }
}

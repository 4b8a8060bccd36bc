//! Fixed-size grid of cells.

use crate::cell::CellState;
use crate::geometry::CellCoord;

/// Rectangular array of [`CellState`] with dimensions fixed at creation.
///
/// Reads outside `[0, width) × [0, height)` return [`CellState::Inactive`];
/// writes outside are ignored. `Clone` is a deep copy.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    width: u32,
    height: u32,
    cells: Vec<CellState>,
}

impl Grid {
    /// Create a grid filled with inactive cells.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            cells: vec![CellState::Inactive; width as usize * height as usize],
        }
    }

    /// Grid width in cells.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Grid height in cells.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Total number of cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// True for a zero-area grid.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `(x, y)` addresses a cell of this grid.
    #[must_use]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.index(x, y).is_some()
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        let x = u32::try_from(x).ok().filter(|&x| x < self.width)?;
        let y = u32::try_from(y).ok().filter(|&y| y < self.height)?;
        Some(y as usize * self.width as usize + x as usize)
    }

    /// Cell state at `(x, y)`, inactive when out of range.
    #[must_use]
    pub fn get(&self, x: i32, y: i32) -> CellState {
        self.index(x, y)
            .map_or(CellState::Inactive, |i| self.cells[i])
    }

    /// Set the cell at `(x, y)`; out-of-range writes are ignored.
    ///
    /// Returns whether the cell changed.
    pub fn set(&mut self, x: i32, y: i32, state: CellState) -> bool {
        match self.index(x, y) {
            Some(i) if self.cells[i] != state => {
                self.cells[i] = state;
                true
            }
            _ => false,
        }
    }

    /// Cell state at a coordinate.
    #[must_use]
    pub fn get_at(&self, coord: CellCoord) -> CellState {
        self.get(coord.x, coord.y)
    }

    /// Set the cell at a coordinate.
    pub fn set_at(&mut self, coord: CellCoord, state: CellState) -> bool {
        self.set(coord.x, coord.y, state)
    }

    /// Reset every cell to inactive.
    pub fn clear(&mut self) {
        self.cells.fill(CellState::Inactive);
    }

    /// Number of active cells.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_active()).count()
    }

    /// Activate every in-range coordinate of a seed pattern.
    ///
    /// Returns how many cells changed.
    pub fn apply_pattern<'a>(&mut self, coords: impl IntoIterator<Item = &'a CellCoord>) -> usize {
        coords
            .into_iter()
            .filter(|c| self.set_at(**c, CellState::Active))
            .count()
    }

    /// Iterate cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (CellCoord, CellState)> + '_ {
        let width = self.width.max(1) as usize;
        self.cells.iter().enumerate().map(move |(i, &state)| {
            let coord = CellCoord::new((i % width) as i32, (i / width) as i32);
            (coord, state)
        })
    }

    /// Iterate the rows of the grid.
    pub fn rows(&self) -> impl Iterator<Item = &[CellState]> {
        self.cells.chunks(self.width.max(1) as usize)
    }
}

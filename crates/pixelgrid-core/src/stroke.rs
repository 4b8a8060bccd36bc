//! Stroke interpolation between consecutive pointer samples.
//!
//! A fast drag produces pointer samples several cells apart. Painting every
//! cell on the straight segment between the previous and current sample keeps
//! the stroke free of holes regardless of pointer speed.

use crate::geometry::CellCoord;

/// Cells to paint when the pointer moves from `prev` to `current`.
///
/// The start cell is excluded (it was painted by the previous call) and the
/// end cell is always included. With no previous cell, or when both are
/// equal, the result is just `current`.
#[must_use]
pub fn interpolate(prev: Option<CellCoord>, current: CellCoord) -> Vec<CellCoord> {
    StrokeCells::new(prev, current).collect()
}

/// Iterator over the cells of one interpolated stroke segment.
#[derive(Debug, Clone)]
pub struct StrokeCells {
    start: CellCoord,
    end: CellCoord,
    steps: u32,
    next: u32,
}

impl StrokeCells {
    /// Segment from `prev` (exclusive) to `current` (inclusive).
    #[must_use]
    pub fn new(prev: Option<CellCoord>, current: CellCoord) -> Self {
        let start = prev.unwrap_or(current);
        let dx = i64::from(current.x) - i64::from(start.x);
        let dy = i64::from(current.y) - i64::from(start.y);
        let steps = dx.unsigned_abs().max(dy.unsigned_abs()) as u32;
        Self {
            start,
            end: current,
            steps,
            next: if steps == 0 { 0 } else { 1 },
        }
    }

    /// Number of cells the segment yields.
    #[must_use]
    pub const fn steps(&self) -> u32 {
        self.steps
    }
}

impl Iterator for StrokeCells {
    type Item = CellCoord;

    fn next(&mut self) -> Option<Self::Item> {
        if self.steps == 0 {
            // Degenerate segment: emit the point once.
            if self.next == 0 {
                self.next = 1;
                return Some(self.end);
            }
            return None;
        }
        if self.next > self.steps {
            return None;
        }
        let t = f64::from(self.next) / f64::from(self.steps);
        self.next += 1;
        Some(CellCoord::new(
            lerp_round(self.start.x, self.end.x, t),
            lerp_round(self.start.y, self.end.y, t),
        ))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = if self.steps == 0 {
            usize::from(self.next == 0)
        } else {
            (self.steps + 1).saturating_sub(self.next) as usize
        };
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for StrokeCells {}

/// Nearest integer, halves toward positive infinity.
fn lerp_round(a: i32, b: i32, t: f64) -> i32 {
    let v = f64::from(a) + (f64::from(b) - f64::from(a)) * t;
    (v + 0.5).floor() as i32
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn c(x: i32, y: i32) -> CellCoord {
        CellCoord::new(x, y)
    }

    #[test]
    fn test_diagonal_excludes_start() {
        assert_eq!(
            interpolate(Some(c(0, 0)), c(3, 3)),
            vec![c(1, 1), c(2, 2), c(3, 3)]
        );
    }

    #[test]
    fn test_same_cell_yields_point() {
        assert_eq!(interpolate(Some(c(5, 7)), c(5, 7)), vec![c(5, 7)]);
    }

    #[test]
    fn test_stroke_start_yields_point() {
        assert_eq!(interpolate(None, c(2, 9)), vec![c(2, 9)]);
    }

    #[test]
    fn test_horizontal_backwards() {
        assert_eq!(
            interpolate(Some(c(4, 1)), c(1, 1)),
            vec![c(3, 1), c(2, 1), c(1, 1)]
        );
    }

    #[test]
    fn test_shallow_slope_rounds_half_up() {
        // t = 1/4, 2/4, 3/4, 1 over dy = 1 -> y = 0.25, 0.5, 0.75, 1
        assert_eq!(
            interpolate(Some(c(0, 0)), c(4, 1)),
            vec![c(1, 0), c(2, 1), c(3, 1), c(4, 1)]
        );
    }

    #[test]
    fn test_negative_half_rounds_toward_positive() {
        // y = -0.5 rounds to 0, not -1
        assert_eq!(
            interpolate(Some(c(0, 0)), c(2, -1)),
            vec![c(1, 0), c(2, -1)]
        );
    }

    #[test]
    fn test_exact_size() {
        let cells = StrokeCells::new(Some(c(0, 0)), c(10, -3));
        assert_eq!(cells.steps(), 10);
        assert_eq!(cells.len(), 10);
        assert_eq!(StrokeCells::new(None, c(1, 1)).len(), 1);
    }

    proptest! {
        #[test]
        fn prop_length_and_endpoint(
            x0 in -200i32..200, y0 in -200i32..200,
            x1 in -200i32..200, y1 in -200i32..200,
        ) {
            let cells = interpolate(Some(c(x0, y0)), c(x1, y1));
            let steps = (x1 - x0).abs().max((y1 - y0).abs()).max(1) as usize;
            prop_assert_eq!(cells.len(), steps);
            prop_assert_eq!(cells.last().copied(), Some(c(x1, y1)));
        }

        #[test]
        fn prop_consecutive_cells_touch(
            x0 in -50i32..50, y0 in -50i32..50,
            x1 in -50i32..50, y1 in -50i32..50,
        ) {
            let mut prev = c(x0, y0);
            for cell in interpolate(Some(prev), c(x1, y1)) {
                prop_assert!((cell.x - prev.x).abs() <= 1);
                prop_assert!((cell.y - prev.y).abs() <= 1);
                prev = cell;
            }
        }
    }
}

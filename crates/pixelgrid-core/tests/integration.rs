//! Integration tests for pixelgrid-core.
//!
//! These tests drive the public API the way an editing front end does.

use pixelgrid_core::{
    interpolate, CellCoord, CellState, EditorAction, EditorConfig, Grid, History, HistoryEvent,
    Key, KeyEvent, Modifiers, Point, PointerEvent, SeedPattern, Session, Tool,
};
use proptest::prelude::*;

fn at(x: i32, y: i32) -> Point {
    Point::new(x as f32 * 9.375 + 1.0, y as f32 * 9.375 + 1.0)
}

// =============================================================================
// Grid Model
// =============================================================================

#[test]
fn test_paint_out_of_bounds_leaves_grid_unchanged() {
    let mut grid = Grid::new(96, 64);
    let blank = grid.clone();
    grid.set(-1, 10, CellState::Active);
    grid.set(96, 10, CellState::Active);
    assert_eq!(grid, blank);
}

proptest! {
    #[test]
    fn prop_snapshot_isolation(cells in prop::collection::vec((0i32..96, 0i32..64), 0..50)) {
        let mut original = Grid::new(96, 64);
        original.set(0, 0, CellState::Active);
        let frozen = original.clone();
        let mut copy = original.clone();
        for (x, y) in cells {
            copy.set(x, y, CellState::Active);
            copy.set(0, 0, CellState::Inactive);
        }
        prop_assert_eq!(original, frozen);
    }
}

// =============================================================================
// Stroke Interpolator
// =============================================================================

#[test]
fn test_interpolation_diagonal() {
    let cells = interpolate(Some(CellCoord::new(0, 0)), CellCoord::new(3, 3));
    assert_eq!(
        cells,
        vec![CellCoord::new(1, 1), CellCoord::new(2, 2), CellCoord::new(3, 3)]
    );
}

#[test]
fn test_interpolation_same_point() {
    let p = CellCoord::new(9, 9);
    assert_eq!(interpolate(Some(p), p), vec![p]);
}

// =============================================================================
// History Manager
// =============================================================================

#[test]
fn test_record_after_undo_truncates() {
    let mut grid = Grid::new(16, 16);
    let mut history = History::new(&grid);
    for x in 0..3 {
        grid.set(x, 0, CellState::Active);
        history.record(&grid);
    }
    history.undo();
    let index = history.index();

    grid.set(9, 9, CellState::Active);
    history.record(&grid);
    assert_eq!(history.len(), index + 2);
    assert_eq!(history.redo().1, HistoryEvent::Unchanged);
}

proptest! {
    #[test]
    fn prop_undo_redo_restores(strokes in prop::collection::vec((0i32..96, 0i32..64, 0i32..96, 0i32..64), 1..12), k in 0usize..12) {
        let mut session = Session::default();
        for (x0, y0, x1, y1) in &strokes {
            session.pointer_down(at(*x0, *y0));
            session.pointer_move(at(*x1, *y1));
            session.pointer_up();
        }
        let original = session.snapshot();
        let k = k.min(session.history().len() - 1);
        for _ in 0..k {
            session.undo();
        }
        for _ in 0..k {
            session.redo();
        }
        prop_assert_eq!(session.grid(), &original);
    }
}

// =============================================================================
// Tool Controller
// =============================================================================

#[test]
fn test_clear_single_active_cell() {
    let mut session = Session::default();
    session.handle_pointer(PointerEvent::Down { position: at(10, 10) });
    session.handle_pointer(PointerEvent::Up);
    assert_eq!(session.grid().active_count(), 1);

    session.apply(EditorAction::Clear);
    assert!(session.grid().iter().all(|(_, s)| s == CellState::Inactive));

    session.undo();
    assert_eq!(session.grid().get(10, 10), CellState::Active);
}

#[test]
fn test_paint_then_erase_same_stroke_is_blank() {
    let mut session = Session::default();
    let stroke = [at(2, 2), at(20, 9), at(40, 30), at(3, 60)];

    for tool in [Tool::Paint, Tool::Erase] {
        session.set_tool(tool);
        session.handle_pointer(PointerEvent::Down { position: stroke[0] });
        for &p in &stroke[1..] {
            session.handle_pointer(PointerEvent::Move { position: p });
        }
        session.handle_pointer(PointerEvent::Up);
    }
    assert_eq!(session.grid().active_count(), 0);
}

#[test]
fn test_keyboard_shortcuts_with_ctrl_config() {
    let config = EditorConfig::from_toml_str("[shortcuts]\nprimary = \"ctrl\"").unwrap();
    let mut session = Session::new(config);
    session.pointer_down(at(0, 0));
    session.pointer_up();

    session.handle_key(KeyEvent::new(Key::char('z'), Modifiers::CTRL));
    assert_eq!(session.grid().active_count(), 0);
    session.handle_key(KeyEvent::new(Key::char('z'), Modifiers::CTRL.with_shift()));
    assert_eq!(session.grid().active_count(), 1);
}

#[test]
fn test_seeded_session_then_edit() {
    let pattern = SeedPattern::from_json("[[0,0],[1,0],[2,0]]").unwrap();
    let mut session = Session::with_pattern(EditorConfig::default(), &pattern);
    session.set_tool(Tool::Erase);
    session.pointer_down(at(1, 0));
    session.pointer_up();
    assert_eq!(session.grid().active_count(), 2);
    session.undo();
    assert_eq!(session.grid().active_count(), 3);
}

//! Benchmarks for grid editing operations.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pixelgrid_core::{interpolate, CellCoord, Grid, History, Point, Session};

fn bench_interpolate_diagonal(c: &mut Criterion) {
    let from = CellCoord::new(0, 0);
    let to = CellCoord::new(95, 63);

    c.bench_function("interpolate_full_diagonal", |b| {
        b.iter(|| interpolate(black_box(Some(from)), black_box(to)))
    });
}

fn bench_history_record(c: &mut Criterion) {
    let grid = Grid::new(96, 64);

    c.bench_function("history_record_96x64", |b| {
        b.iter(|| {
            let mut history = History::new(&grid);
            for _ in 0..32 {
                history.record(black_box(&grid));
            }
            history
        })
    });
}

fn bench_session_drag(c: &mut Criterion) {
    c.bench_function("session_drag_40_samples", |b| {
        b.iter(|| {
            let mut session = Session::default();
            session.pointer_down(Point::new(5.0, 5.0));
            for i in 1..40 {
                let t = i as f32;
                session.pointer_move(Point::new(5.0 + t * 21.0, 5.0 + t * 14.0));
            }
            session.pointer_up();
            session
        })
    });
}

fn bench_frame(c: &mut Criterion) {
    let session = Session::default();

    c.bench_function("session_frame", |b| b.iter(|| black_box(&session).frame()));
}

criterion_group!(
    benches,
    bench_interpolate_diagonal,
    bench_history_record,
    bench_session_drag,
    bench_frame,
);
criterion_main!(benches);

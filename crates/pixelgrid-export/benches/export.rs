//! Benchmarks for the export pipeline.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pixelgrid_core::{CellState, Grid};
use pixelgrid_export::{ExportConfig, Exporter, Glyph, VectorDocument};

fn checkerboard(width: u32, height: u32) -> Grid {
    let mut grid = Grid::new(width, height);
    for y in 0..height as i32 {
        for x in 0..width as i32 {
            if (x + y) % 2 == 0 {
                grid.set(x, y, CellState::Active);
            }
        }
    }
    grid
}

fn bench_glyph_parse(c: &mut Criterion) {
    c.bench_function("glyph_parse_bowtie", |b| b.iter(Glyph::bowtie));
}

fn bench_render_vector(c: &mut Criterion) {
    let exporter = Exporter::new(ExportConfig::default()).expect("default config");
    let grid = checkerboard(96, 64);

    c.bench_function("render_vector_96x64", |b| {
        b.iter(|| exporter.render_vector(black_box(&grid)).map(|d| d.serialize()))
    });
}

fn bench_render_bitmap(c: &mut Criterion) {
    let config = ExportConfig {
        scale: 1,
        ..ExportConfig::default()
    };
    let exporter = Exporter::new(config).expect("valid config");
    let grid = checkerboard(32, 32);

    c.bench_function("render_bitmap_32x32_scale1", |b| {
        b.iter(|| exporter.render_bitmap(black_box(&grid)))
    });
}

fn bench_export_archive(c: &mut Criterion) {
    let config = ExportConfig {
        scale: 1,
        ..ExportConfig::default()
    };
    let exporter = Exporter::new(config).expect("valid config");
    let grid = checkerboard(16, 16);

    c.bench_function("export_archive_16x16", |b| {
        b.iter(|| exporter.export(black_box(&grid)))
    });
}

criterion_group!(
    benches,
    bench_glyph_parse,
    bench_render_vector,
    bench_render_bitmap,
    bench_export_archive,
);
criterion_main!(benches);

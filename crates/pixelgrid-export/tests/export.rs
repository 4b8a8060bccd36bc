//! End-to-end export tests: session edits in, archive bytes out.

use pixelgrid_core::{CellState, Grid, Palette, Point, Session};
use pixelgrid_export::{
    join_export, DirectorySink, ExportConfig, ExportPalette, Exporter, GLYPH_PATH,
};
use proptest::prelude::*;
use std::io::{Cursor, Read};
use zip::ZipArchive;

fn unzip(bytes: Vec<u8>) -> ZipArchive<Cursor<Vec<u8>>> {
    ZipArchive::new(Cursor::new(bytes)).unwrap()
}

fn entry(archive: &mut ZipArchive<Cursor<Vec<u8>>>, name: &str) -> Vec<u8> {
    let mut bytes = Vec::new();
    archive.by_name(name).unwrap().read_to_end(&mut bytes).unwrap();
    bytes
}

// =============================================================================
// Archive Layout
// =============================================================================

#[test]
fn test_single_active_cell_archive() {
    let mut grid = Grid::new(4, 3);
    grid.set(0, 0, CellState::Active);
    let exporter = Exporter::new(ExportConfig::default()).unwrap();

    let mut archive = unzip(exporter.export(&grid).unwrap());
    assert_eq!(archive.len(), 2);
    let mut names: Vec<_> = archive.file_names().map(str::to_string).collect();
    names.sort();
    assert_eq!(names, ["pixel-art.png", "pixel-art.svg"]);

    let svg = String::from_utf8(entry(&mut archive, "pixel-art.svg")).unwrap();
    assert!(svg.contains(r#"width="100" height="75" viewBox="0 0 100 75""#));
    assert_eq!(svg.matches("<path ").count(), 12);
    assert_eq!(svg.matches(GLYPH_PATH).count(), 12);

    let active: Vec<_> = svg.lines().filter(|l| l.contains("fill=\"#f4eadd\"")).collect();
    assert_eq!(active.len(), 1);
    assert!(active[0].contains("transform=\"translate(0, 0) scale(3.57)\""));
    assert_eq!(svg.matches("fill=\"#2a2a2a\"").count(), 11);
}

#[test]
fn test_png_dimensions_and_origin_glyph() {
    let mut grid = Grid::new(3, 2);
    grid.set(0, 0, CellState::Active);
    let exporter = Exporter::new(ExportConfig::default()).unwrap();

    let mut archive = unzip(exporter.export(&grid).unwrap());
    let png = entry(&mut archive, "pixel-art.png");
    let image = image::load_from_memory(&png).unwrap().to_rgba8();
    assert_eq!(image.dimensions(), (375, 250));

    let palette = ExportPalette::default();
    // Glyph centers of the origin cell and its right neighbour
    assert_eq!(image.get_pixel(62, 62).0, palette.active.to_rgba8());
    assert_eq!(image.get_pixel(187, 62).0, palette.inactive.to_rgba8());
    assert_eq!(image.get_pixel(0, 0).0, palette.background.to_rgba8());
}

#[test]
fn test_png_has_only_palette_colors() {
    let mut grid = Grid::new(2, 2);
    grid.set(1, 1, CellState::Active);
    let config = ExportConfig {
        scale: 1,
        ..ExportConfig::default()
    };
    let exporter = Exporter::new(config).unwrap();
    let palette = exporter.config().palette;
    let allowed = [
        palette.active.to_rgba8(),
        palette.inactive.to_rgba8(),
        palette.background.to_rgba8(),
    ];

    let image = exporter.render_bitmap(&grid).unwrap().into_image();
    assert!(image.pixels().all(|p| allowed.contains(&p.0)));
}

// =============================================================================
// Delivery
// =============================================================================

#[test]
fn test_session_export_to_directory() {
    let mut session = Session::default();
    session.pointer_down(Point::new(1.0, 1.0));
    session.pointer_move(Point::new(40.0, 1.0));
    session.pointer_up();

    let tmp = tempfile::tempdir().unwrap();
    let exporter = Exporter::new(ExportConfig {
        scale: 1,
        ..ExportConfig::default()
    })
    .unwrap();
    let path = exporter
        .export_and_deliver(&session.snapshot(), &DirectorySink::new(tmp.path()))
        .unwrap();
    assert_eq!(path, tmp.path().join("pixel-art.zip"));

    let mut archive = unzip(std::fs::read(path).unwrap());
    let svg = String::from_utf8(entry(&mut archive, "pixel-art.svg")).unwrap();
    assert_eq!(svg.matches("fill=\"#f4eadd\"").count(), 5);
}

#[test]
fn test_failed_delivery_leaves_session_untouched() {
    let mut session = Session::default();
    session.pointer_down(Point::new(1.0, 1.0));
    session.pointer_up();
    let before = session.snapshot();

    let tmp = tempfile::tempdir().unwrap();
    let blocker = tmp.path().join("not-a-dir");
    std::fs::write(&blocker, b"").unwrap();

    let exporter = Exporter::new(ExportConfig::default()).unwrap();
    assert_eq!(
        exporter.export_and_deliver(&session.snapshot(), &DirectorySink::new(&blocker)),
        None
    );
    assert_eq!(session.grid(), &before);
    assert!(session.can_undo());
}

#[test]
fn test_background_export_ignores_later_edits() {
    let mut session = Session::default();
    let exporter = Exporter::new(ExportConfig {
        scale: 1,
        ..ExportConfig::default()
    })
    .unwrap();

    let handle = exporter.spawn(session.snapshot());
    session.pointer_down(Point::new(1.0, 1.0));
    session.pointer_up();

    let mut archive = unzip(join_export(handle).unwrap());
    let svg = String::from_utf8(entry(&mut archive, "pixel-art.svg")).unwrap();
    assert!(!svg.contains(&Palette::ACTIVE.to_hex()));
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn prop_vector_has_one_glyph_per_cell(
        width in 1u32..12,
        height in 1u32..12,
        active in prop::collection::vec((0i32..12, 0i32..12), 0..20),
    ) {
        let mut grid = Grid::new(width, height);
        for (x, y) in active {
            grid.set(x, y, CellState::Active);
        }
        let exporter = Exporter::new(ExportConfig::default()).unwrap();
        let svg = exporter.render_vector(&grid).unwrap();
        let text = pixelgrid_export::VectorDocument::serialize(&svg);

        prop_assert_eq!(text.matches("<path ").count(), (width * height) as usize);
        prop_assert_eq!(text.matches("fill=\"#f4eadd\"").count(), grid.active_count());
    }
}

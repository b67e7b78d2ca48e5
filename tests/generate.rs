use std::fs;
use std::path::PathBuf;

use image::Rgba;
use journal_icon::{IconError, JournalLayout, JournalPalette, generate_icon_at, render_icon};
use palette::Srgb;

/// Fresh scratch directory per test so parallel tests never share files.
fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("journal-icon-{}-{name}", std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn palette() -> JournalPalette {
    JournalPalette::standard().unwrap()
}

fn to_rgba(color: Srgb<u8>) -> Rgba<u8> {
    Rgba([color.red, color.green, color.blue, 255])
}

#[test]
fn writes_1024_square_png() {
    let dir = scratch_dir("dimensions");
    let path = dir.join("app_icon.png");
    generate_icon_at(&path).unwrap();

    let img = image::open(&path).unwrap();
    assert_eq!((img.width(), img.height()), (1024, 1024));
    assert_eq!(img.color(), image::ColorType::Rgb8);
    assert_eq!(image::ImageFormat::from_path(&path).unwrap(), image::ImageFormat::Png);
}

#[test]
fn key_pixels_have_exact_colors() {
    let dir = scratch_dir("pixels");
    let path = dir.join("app_icon.png");
    generate_icon_at(&path).unwrap();

    let img = image::open(&path).unwrap().to_rgba8();
    let layout = JournalLayout::standard();
    let palette = palette();

    assert_eq!(*img.get_pixel(0, 0), to_rgba(palette.background));
    assert_eq!(*img.get_pixel(1023, 1023), to_rgba(palette.background));
    assert_eq!(*img.get_pixel(512, 512), to_rgba(palette.accent));
    assert_eq!(*img.get_pixel(layout.cover.x + 10, 512), to_rgba(palette.spine));
}

#[test]
fn page_lines_are_cut_in_background_color() {
    let img = render_icon().unwrap();
    let layout = JournalLayout::standard();
    let palette = palette();
    let mid_x = (layout.page_line_x1 + layout.page_line_x2) / 2;

    for &y in &layout.page_line_ys {
        assert_eq!(*img.get_pixel(mid_x, y), to_rgba(palette.background));
    }
    // Between the first two lines the cover shows through.
    let between = (layout.page_line_ys[0] + layout.page_line_ys[1]) / 2;
    assert_eq!(*img.get_pixel(mid_x, between), to_rgba(palette.accent));
}

#[test]
fn output_is_deterministic() {
    let dir = scratch_dir("determinism");
    let first = dir.join("first.png");
    let second = dir.join("second.png");
    generate_icon_at(&first).unwrap();
    generate_icon_at(&second).unwrap();

    assert_eq!(fs::read(&first).unwrap(), fs::read(&second).unwrap());
}

#[test]
fn overwrites_existing_file() {
    let dir = scratch_dir("overwrite");
    let path = dir.join("app_icon.png");
    fs::write(&path, b"not an image").unwrap();

    generate_icon_at(&path).unwrap();
    let img = image::open(&path).unwrap();
    assert_eq!(img.width(), 1024);
}

#[test]
fn format_follows_extension() {
    let dir = scratch_dir("bmp");
    let path = dir.join("app_icon.bmp");
    generate_icon_at(&path).unwrap();

    let bytes = fs::read(&path).unwrap();
    assert_eq!(&bytes[..2], b"BM");
    let img = image::load_from_memory(&bytes).unwrap().to_rgba8();
    assert_eq!(*img.get_pixel(512, 512), to_rgba(palette().accent));
}

#[test]
fn unknown_extension_writes_nothing() {
    let dir = scratch_dir("unknown");
    let path = dir.join("app_icon.svg");
    let err = generate_icon_at(&path).unwrap_err();

    assert!(matches!(err, IconError::UnsupportedFormat(_)));
    assert!(!path.exists());
}

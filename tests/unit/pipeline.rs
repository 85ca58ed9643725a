use std::path::PathBuf;

use super::*;
use crate::foundation::error::ThumbError;

const TEST_FONT: &str = "tests/data/fonts/DejaVuSans-Bold.ttf";

fn thumbnailer() -> Thumbnailer {
    Thumbnailer::new(FontFace::load(Path::new(TEST_FONT)).unwrap())
}

fn gradient(w: u32, h: u32) -> image::DynamicImage {
    image::DynamicImage::ImageRgba8(image::RgbaImage::from_fn(w, h, |x, y| {
        image::Rgba([(x * 255 / w) as u8, (y * 255 / h) as u8, 90, 255])
    }))
}

#[test]
fn render_is_deterministic() {
    let bg = gradient(800, 600);
    let a = thumbnailer().render(&bg, "TOP", "MIDDLE", "BOTTOM").unwrap();
    let b = thumbnailer().render(&bg, "TOP", "MIDDLE", "BOTTOM").unwrap();
    assert_eq!(a, b);

    let mut reused = thumbnailer();
    let c = reused.render(&bg, "TOP", "MIDDLE", "BOTTOM").unwrap();
    let d = reused.render(&bg, "TOP", "MIDDLE", "BOTTOM").unwrap();
    assert_eq!(c, d);
    assert_eq!(a, c);
}

#[test]
fn empty_lines_leave_only_the_background() {
    let bg = gradient(640, 360);
    let raster = thumbnailer().render(&bg, "", "", "").unwrap();
    assert_eq!((raster.width, raster.height), (1280, 720));

    let plain = Canvas::composite(&bg).unwrap().into_raster();
    assert_eq!(raster, plain);
}

#[test]
fn text_changes_pixels_near_each_anchor() {
    let bg = gradient(640, 360);
    let plain = thumbnailer().render(&bg, "", "", "").unwrap();
    let drawn = thumbnailer().render(&bg, "TOP", "MID", "LOW").unwrap();

    // Rows just above each baseline (424, 544, 658) carry glyph ink.
    for y in [415u32, 535, 650] {
        let differs = (0..400).any(|x| plain.pixel(x, y) != drawn.pixel(x, y));
        assert!(differs, "expected ink near row {y}");
    }
    // The far right of the canvas is untouched by short lines.
    assert_eq!(plain.pixel(1275, 500), drawn.pixel(1275, 500));
}

#[test]
fn undecodable_background_is_a_decode_error() {
    let err = thumbnailer()
        .generate_from_bytes(b"definitely not an image", "a", "b", "c")
        .unwrap_err();
    assert!(matches!(err, ThumbError::Decode(_)));
}

#[test]
fn missing_font_is_reported_after_background_loads() {
    let dir = PathBuf::from("target").join("pipeline_unit");
    std::fs::create_dir_all(&dir).unwrap();
    let bg_path = dir.join("bg.png");
    gradient(16, 9).save(&bg_path).unwrap();

    let err = generate(
        &BackgroundSource::File(bg_path),
        "a",
        "b",
        "c",
        Path::new("tests/data/fonts/Nope.ttf"),
    )
    .unwrap_err();
    assert!(matches!(err, ThumbError::FontLoad(_)));
}

#[test]
fn missing_background_wins_over_missing_font() {
    let err = generate(
        &BackgroundSource::File(PathBuf::from("target/pipeline_unit/absent.png")),
        "a",
        "b",
        "c",
        Path::new("tests/data/fonts/Nope.ttf"),
    )
    .unwrap_err();
    assert!(matches!(err, ThumbError::Fetch(_)));
}

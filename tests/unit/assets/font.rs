use super::*;

const TEST_FONT: &str = "tests/data/fonts/DejaVuSans-Bold.ttf";

#[test]
fn default_path_points_at_user_local_fonts() {
    let Ok(path) = default_font_path() else {
        return;
    };
    assert!(path.ends_with(".local/share/fonts/BebasNeue-Regular.ttf"));
}

#[test]
fn load_reports_family_and_bytes() {
    let face = FontFace::load(Path::new(TEST_FONT)).unwrap();
    assert!(face.family().contains("DejaVu"));
    assert_eq!(face.bytes(), std::fs::read(TEST_FONT).unwrap().as_slice());
}

#[test]
fn missing_font_is_a_font_load_error() {
    let err = FontFace::load(Path::new("tests/data/fonts/Missing.ttf")).unwrap_err();
    assert!(matches!(err, ThumbError::FontLoad(_)));
}

#[test]
fn garbage_bytes_are_a_font_load_error() {
    let err = FontFace::from_bytes(b"not a font".to_vec()).unwrap_err();
    assert!(matches!(err, ThumbError::FontLoad(_)));
}

#[test]
fn shape_rejects_unusable_sizes() {
    let mut face = FontFace::load(Path::new(TEST_FONT)).unwrap();
    for size in [0.0, -4.0, f32::NAN, f32::INFINITY] {
        assert!(matches!(
            face.shape("HI", size),
            Err(ThumbError::FontLoad(_))
        ));
    }
}

#[test]
fn shape_produces_one_line_scaled_by_size() {
    let mut face = FontFace::load(Path::new(TEST_FONT)).unwrap();
    let small = face.shape("HELLO", 20.0).unwrap();
    let large = face.shape("HELLO", 40.0).unwrap();
    assert_eq!(small.lines().count(), 1);
    assert_eq!(large.lines().count(), 1);
    assert!(large.width() > small.width() * 1.5);
}

#[test]
fn hard_line_breaks_shape_as_one_line() {
    let mut face = FontFace::load(Path::new(TEST_FONT)).unwrap();
    for text in ["A\nB", "A\r\nB", "A\u{2028}B"] {
        let layout = face.shape(text, 40.0).unwrap();
        assert_eq!(layout.lines().count(), 1, "{text:?}");
    }
}

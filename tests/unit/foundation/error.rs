use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(ThumbError::fetch("x").to_string().contains("fetch error:"));
    assert!(ThumbError::decode("x").to_string().contains("decode error:"));
    assert!(
        ThumbError::font_load("x")
            .to_string()
            .contains("font load error:")
    );
    assert!(ThumbError::write("x").to_string().contains("write error:"));
    assert!(
        ThumbError::validation("x")
            .to_string()
            .contains("validation error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = ThumbError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

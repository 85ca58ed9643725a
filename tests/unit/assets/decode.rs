use std::io::Cursor;

use super::*;

fn encode(img: image::DynamicImage, format: image::ImageFormat) -> Vec<u8> {
    let mut buf = Vec::new();
    img.write_to(&mut Cursor::new(&mut buf), format).unwrap();
    buf
}

#[test]
fn decode_png_and_jpeg_dimensions() {
    let rgba = image::RgbaImage::from_pixel(3, 2, image::Rgba([100, 50, 200, 255]));
    let png = encode(image::DynamicImage::ImageRgba8(rgba), image::ImageFormat::Png);
    let img = decode_image(&png).unwrap();
    assert_eq!((img.width(), img.height()), (3, 2));

    let rgb = image::RgbImage::from_pixel(5, 4, image::Rgb([10, 20, 30]));
    let jpeg = encode(image::DynamicImage::ImageRgb8(rgb), image::ImageFormat::Jpeg);
    let img = decode_image(&jpeg).unwrap();
    assert_eq!((img.width(), img.height()), (5, 4));
}

#[test]
fn non_image_bytes_are_a_decode_error() {
    assert!(matches!(
        decode_image(b"<html>not found</html>"),
        Err(ThumbError::Decode(_))
    ));
    assert!(matches!(decode_image(&[]), Err(ThumbError::Decode(_))));
}

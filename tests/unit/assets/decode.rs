use std::io::Cursor;

use super::*;

fn png_bytes(img: image::RgbaImage) -> Vec<u8> {
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();
    buf
}

#[test]
fn decode_sheet_png_keeps_straight_alpha() {
    let img = image::RgbaImage::from_raw(2, 1, vec![100, 50, 200, 128, 1, 2, 3, 255]).unwrap();
    let sheet = decode_sheet(&png_bytes(img)).unwrap();
    assert_eq!((sheet.width, sheet.height), (2, 1));
    assert_eq!(sheet.pixel(0, 0), [100, 50, 200, 128]);
    assert_eq!(sheet.pixel(1, 0), [1, 2, 3, 255]);
}

#[test]
fn decode_garbage_is_an_error() {
    assert!(matches!(
        decode_sheet(b"not a png"),
        Err(FlipbookError::Other(_))
    ));
}

#[test]
fn from_rgba8_checks_length() {
    assert!(SheetImage::from_rgba8(2, 2, vec![0; 16]).is_ok());
    assert!(matches!(
        SheetImage::from_rgba8(2, 2, vec![0; 15]),
        Err(FlipbookError::Config(_))
    ));
}

#[test]
fn from_rgba8_rejects_overflowing_dimensions() {
    let err = SheetImage::from_rgba8(u32::MAX, u32::MAX, vec![]).unwrap_err();
    assert!(matches!(err, FlipbookError::Config(_)));
    assert!(err.to_string().contains("overflows"));
}

#[test]
fn pixel_outside_a_mismatched_buffer_is_transparent() {
    let sheet = SheetImage {
        width: 4,
        height: 4,
        rgba8: std::sync::Arc::new(vec![9; 4]),
    };
    assert_eq!(sheet.pixel(0, 0), [9; 4]);
    assert_eq!(sheet.pixel(3, 3), [0; 4]);
    assert_eq!(sheet.pixel(u32::MAX, u32::MAX), [0; 4]);
}

#[test]
fn desc_uses_image_dimensions() {
    let sheet = SheetImage::from_rgba8(8, 2, vec![0; 64]).unwrap();
    let desc = sheet.desc(4).unwrap();
    assert_eq!(desc.frame_width(), 2.0);
    assert_eq!(desc.height, 2);
}

#[test]
fn load_missing_file_reports_path() {
    let err = load_sheet(Path::new("/no/such/sheet.png")).unwrap_err();
    assert!(format!("{err:#}").contains("/no/such/sheet.png"));
}

use mirror_transform::{HorizontalFlip, ImageTransform, TransformError};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn gradient(width: u32, height: u32) -> image::RgbImage {
    image::RgbImage::from_fn(width, height, |x, y| {
        image::Rgb([(x * 40) as u8, (y * 40) as u8, 200])
    })
}

fn assert_mirrored(original: &image::RgbImage, output: &Path) {
    let mirrored = image::open(output).unwrap().to_rgb8();
    assert_eq!(mirrored.dimensions(), original.dimensions());
    let width = original.width();
    for (x, y, px) in mirrored.enumerate_pixels() {
        assert_eq!(px, original.get_pixel(width - 1 - x, y), "pixel ({x}, {y})");
    }
}

#[test]
fn test_flip_png() {
    let temp = TempDir::new().unwrap();
    let src = temp.path().join("in.png");
    let dst = temp.path().join("out.png");
    let original = gradient(5, 3);
    original.save(&src).unwrap();

    HorizontalFlip::new().transform(&src, &dst).unwrap();

    assert_mirrored(&original, &dst);
}

#[test]
fn test_flip_bmp() {
    let temp = TempDir::new().unwrap();
    let src = temp.path().join("in.bmp");
    let dst = temp.path().join("out.bmp");
    let original = gradient(4, 4);
    original.save(&src).unwrap();

    HorizontalFlip::new().transform(&src, &dst).unwrap();

    assert_mirrored(&original, &dst);
}

#[test]
fn test_flip_jpeg_preserves_dimensions() {
    let temp = TempDir::new().unwrap();
    let src = temp.path().join("in.jpg");
    let dst = temp.path().join("out.jpg");
    gradient(16, 8).save(&src).unwrap();

    HorizontalFlip::new().transform(&src, &dst).unwrap();

    // Lossy codec: only the geometry is stable.
    let out = image::open(&dst).unwrap();
    assert_eq!((out.width(), out.height()), (16, 8));
}

#[test]
fn test_overwrites_existing_destination() {
    let temp = TempDir::new().unwrap();
    let src = temp.path().join("in.png");
    let dst = temp.path().join("out.png");
    let original = gradient(3, 3);
    original.save(&src).unwrap();
    fs::write(&dst, b"stale").unwrap();

    HorizontalFlip::new().transform(&src, &dst).unwrap();

    assert_mirrored(&original, &dst);
}

#[test]
fn test_corrupt_source_fails() {
    let temp = TempDir::new().unwrap();
    let src = temp.path().join("broken.png");
    let dst = temp.path().join("out.png");
    fs::write(&src, b"this is not an image at all").unwrap();

    let err = HorizontalFlip::new().transform(&src, &dst).unwrap_err();

    assert!(matches!(
        err,
        TransformError::Decode { .. } | TransformError::UnsupportedFormat { .. }
    ));
    assert_eq!(err.path(), src.as_path());
    assert!(!dst.exists());
}

#[test]
fn test_missing_source_is_io_error() {
    let temp = TempDir::new().unwrap();
    let err = HorizontalFlip::new()
        .transform(&temp.path().join("nope.png"), &temp.path().join("out.png"))
        .unwrap_err();

    assert!(matches!(err, TransformError::Io { .. }));
}

#[test]
fn test_missing_destination_dir_is_error() {
    let temp = TempDir::new().unwrap();
    let src = temp.path().join("in.png");
    gradient(2, 2).save(&src).unwrap();

    let result =
        HorizontalFlip::new().transform(&src, &temp.path().join("missing").join("out.png"));

    assert!(result.is_err());
}

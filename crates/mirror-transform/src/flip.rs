//! Horizontal flip using the `image` crate.

use std::path::Path;

use image::{DynamicImage, ImageError, ImageFormat, ImageReader};
use mirror_core::{ImageTransform, TransformError};

/// Mirrors images left to right.
#[derive(Debug, Clone, Copy, Default)]
pub struct HorizontalFlip;

impl HorizontalFlip {
    pub fn new() -> Self {
        Self
    }

    /// Flip an already decoded image.
    pub fn apply(image: &DynamicImage) -> DynamicImage {
        image.fliph()
    }
}

impl ImageTransform for HorizontalFlip {
    fn transform(&self, source: &Path, destination: &Path) -> Result<(), TransformError> {
        let format = ImageFormat::from_path(destination).map_err(|_| {
            TransformError::UnsupportedFormat {
                path: destination.to_path_buf(),
            }
        })?;

        let image = ImageReader::open(source)
            .map_err(|e| TransformError::Io {
                path: source.to_path_buf(),
                source: e,
            })?
            .with_guessed_format()
            .map_err(|e| TransformError::Io {
                path: source.to_path_buf(),
                source: e,
            })?
            .decode()
            .map_err(|e| decode_error(source, e))?;

        let mirrored = Self::apply(&image);
        mirrored
            .save_with_format(destination, format)
            .map_err(|e| encode_error(destination, e))?;

        tracing::debug!(
            source = %source.display(),
            destination = %destination.display(),
            width = image.width(),
            height = image.height(),
            "mirrored image"
        );
        Ok(())
    }
}

fn decode_error(path: &Path, error: ImageError) -> TransformError {
    match error {
        ImageError::IoError(source) => TransformError::Io {
            path: path.to_path_buf(),
            source,
        },
        ImageError::Unsupported(_) => TransformError::UnsupportedFormat {
            path: path.to_path_buf(),
        },
        other => TransformError::Decode {
            path: path.to_path_buf(),
            message: other.to_string(),
        },
    }
}

fn encode_error(path: &Path, error: ImageError) -> TransformError {
    match error {
        ImageError::IoError(source) => TransformError::Io {
            path: path.to_path_buf(),
            source,
        },
        other => TransformError::Encode {
            path: path.to_path_buf(),
            message: other.to_string(),
        },
    }
}

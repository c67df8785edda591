//! The image transform seam.

use std::path::Path;

use crate::error::TransformError;

/// Produces a transformed copy of one image file.
///
/// Callers guarantee that `source` is an existing regular file and that the
/// parent directory of `destination` exists.
pub trait ImageTransform: Send + Sync {
    fn transform(&self, source: &Path, destination: &Path) -> Result<(), TransformError>;
}

impl<F> ImageTransform for F
where
    F: Fn(&Path, &Path) -> Result<(), TransformError> + Send + Sync,
{
    fn transform(&self, source: &Path, destination: &Path) -> Result<(), TransformError> {
        self(source, destination)
    }
}

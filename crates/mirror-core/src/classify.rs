//! Extension based image classification.

use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// File extensions recognized as images.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum ImageExtension {
    Jpg,
    Jpeg,
    Png,
    Gif,
    Bmp,
    Tiff,
    Webp,
}

impl ImageExtension {
    /// Classify a path by its final extension component.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?;
        Self::from_str(ext).ok()
    }
}

/// Check whether a path names a candidate image.
///
/// Purely name based: the file is never opened.
pub fn is_image(path: &Path) -> bool {
    ImageExtension::from_path(path).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_recognized_extensions() {
        for ext in ["jpg", "jpeg", "png", "gif", "bmp", "tiff", "webp"] {
            let name = format!("photo.{ext}");
            assert!(is_image(Path::new(&name)), "{name}");
        }
        assert_eq!(ImageExtension::iter().count(), 7);
    }

    #[test]
    fn test_case_insensitive() {
        assert!(is_image(Path::new("IMG_0001.JPG")));
        assert!(is_image(Path::new("scan.TiFf")));
        assert_eq!(
            ImageExtension::from_path(Path::new("a/b/C.PNG")),
            Some(ImageExtension::Png)
        );
    }

    #[test]
    fn test_non_images() {
        assert!(!is_image(Path::new("readme.txt")));
        assert!(!is_image(Path::new("Makefile")));
        assert!(!is_image(Path::new(".png")));
        assert!(!is_image(Path::new("archive.png.txt")));
        assert!(!is_image(Path::new("photo.tif")));
        assert!(!is_image(Path::new("photo.")));
    }

    #[test]
    fn test_only_final_extension_counts() {
        assert!(is_image(Path::new("backup.txt.png")));
        assert!(is_image(Path::new("dir.jpg/inner.gif")));
        assert!(!is_image(Path::new("dir.jpg/inner")));
    }

    #[test]
    fn test_display() {
        assert_eq!(ImageExtension::Webp.to_string(), "webp");
    }
}

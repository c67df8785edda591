//! Image codec backed transforms for mirror.
//!
//! [`HorizontalFlip`] is the production [`ImageTransform`]: it decodes the
//! source with the `image` crate, reverses the pixel columns and encodes the
//! result in the format implied by the destination extension.
//!
//! ```rust,no_run
//! use std::path::Path;
//! use mirror_transform::{HorizontalFlip, ImageTransform};
//!
//! HorizontalFlip::new()
//!     .transform(Path::new("in/cat.png"), Path::new("out/cat.png"))
//!     .unwrap();
//! ```

mod flip;

pub use flip::HorizontalFlip;

pub use mirror_core::{ImageTransform, TransformError};

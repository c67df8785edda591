//! Directory mirroring traversal engine for mirror.
//!
//! This crate walks an input tree depth-first, recreates its directories
//! under an output root, and hands every image it finds to an
//! [`ImageTransform`], writing the result at the same relative path.
//!
//! # Overview
//!
//! - **Structural mirroring**: every input directory has an output twin
//! - **Partial failure isolation**: a broken image is counted, not fatal
//! - **Progress updates** via broadcast channels
//! - **Optional worker pool** for transforms via rayon
//!
//! # Example
//!
//! ```rust,no_run
//! let stats = mirror_walk::process_images("photos", "mirrored").unwrap();
//!
//! println!("{} processed, {} skipped, {} failed", stats.processed, stats.skipped, stats.errors);
//! ```
//!
//! # Custom transforms
//!
//! ```rust,no_run
//! use std::path::Path;
//! use mirror_walk::{MirrorConfig, TransformError, TreeWalker};
//!
//! let copy = |src: &Path, dst: &Path| -> Result<(), TransformError> {
//!     std::fs::copy(src, dst)
//!         .map(|_| ())
//!         .map_err(|e| TransformError::Io { path: src.to_path_buf(), source: e })
//! };
//! let walker = TreeWalker::new(copy);
//! let stats = walker.run(&MirrorConfig::new("in", "out")).unwrap();
//! ```

mod directory;
mod progress;
mod walker;

use std::path::PathBuf;

pub use directory::{ensure_directory, mirror_path, relative_to};
pub use progress::WalkProgress;
pub use walker::TreeWalker;

// Re-export core types for convenience
pub use mirror_core::{
    EntryKind, ImageExtension, ImageTransform, MirrorConfig, MirrorConfigBuilder, TransformError,
    TransformFailure, TraversalStats, WalkError, is_image,
};
pub use mirror_transform::HorizontalFlip;

/// Mirror every image under `input_root` into `output_root`.
///
/// Fails only on unrecoverable traversal errors; per-image failures are
/// reported in the returned stats.
pub fn process_images(
    input_root: impl Into<PathBuf>,
    output_root: impl Into<PathBuf>,
) -> Result<TraversalStats, WalkError> {
    TreeWalker::new(HorizontalFlip::new()).run(&MirrorConfig::new(input_root, output_root))
}

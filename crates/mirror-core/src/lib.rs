//! Core types and traits for mirror.
//!
//! This crate provides the data model shared by the mirror crates: the
//! traversal statistics, the image classifier, the transform seam, the run
//! configuration, and the error types.

mod classify;
mod config;
mod error;
mod stats;
mod transform;

pub use classify::{ImageExtension, is_image};
pub use config::{MirrorConfig, MirrorConfigBuilder};
pub use error::{TransformError, WalkError};
pub use stats::{EntryKind, TransformFailure, TraversalStats};
pub use transform::ImageTransform;

//! Traversal statistics.

use std::fs::Metadata;
use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::TransformError;

/// Kind of a listed entry, as far as the traversal is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntryKind {
    File,
    Directory,
}

impl EntryKind {
    /// Anything that is not a directory is handled as a file.
    pub fn from_metadata(metadata: &Metadata) -> Self {
        if metadata.is_dir() {
            Self::Directory
        } else {
            Self::File
        }
    }
}

/// A recorded per-file transform failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransformFailure {
    /// Source image that failed.
    pub path: PathBuf,
    /// Human-readable cause.
    pub message: String,
}

impl TransformFailure {
    pub fn new(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Capture a transform error against the source it was raised for.
    pub fn from_error(source: impl Into<PathBuf>, error: &TransformError) -> Self {
        Self::new(source, error.to_string())
    }
}

/// Outcome counters of one traversal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraversalStats {
    /// Images transformed successfully.
    pub processed: u64,
    /// Non-image files encountered.
    pub skipped: u64,
    /// Images whose transform failed.
    pub errors: u64,
    /// Details for each failed image.
    #[serde(default)]
    pub failures: Vec<TransformFailure>,
    /// Wall time of the run.
    #[serde(default)]
    pub duration: Duration,
}

impl TraversalStats {
    /// Create new empty stats.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_processed(&mut self) {
        self.processed += 1;
    }

    pub fn record_skipped(&mut self) {
        self.skipped += 1;
    }

    /// Record a failed transform.
    pub fn record_error(&mut self, failure: TransformFailure) {
        self.errors += 1;
        self.failures.push(failure);
    }

    /// Fold another accumulator into this one.
    pub fn merge(&mut self, other: TraversalStats) {
        self.processed += other.processed;
        self.skipped += other.skipped;
        self.errors += other.errors;
        self.failures.extend(other.failures);
    }

    /// Total files looked at.
    pub fn total_files(&self) -> u64 {
        self.processed + self.skipped + self.errors
    }

    /// True when no image failed.
    pub fn is_success(&self) -> bool {
        self.errors == 0
    }

    /// Get a human-readable summary of the run.
    pub fn summary(&self) -> String {
        let mut parts = vec![format!("{} processed", self.processed)];
        if self.skipped > 0 {
            parts.push(format!("{} skipped", self.skipped));
        }
        if self.errors > 0 {
            parts.push(format!("{} failed", self.errors));
        }
        parts.join(", ")
    }
}

//! Walk progress reporting.

use std::path::PathBuf;
use std::time::Duration;

use mirror_core::TraversalStats;

/// Progress information during a walk.
#[derive(Debug, Clone, Default)]
pub struct WalkProgress {
    /// Directories listed so far.
    pub dirs_visited: u64,
    /// Images transformed so far.
    pub processed: u64,
    /// Non-image files seen so far.
    pub skipped: u64,
    /// Failed transforms so far.
    pub errors: u64,
    /// Entry whose outcome triggered this update.
    pub current_path: PathBuf,
    /// Time elapsed since the walk started.
    pub elapsed: Duration,
}

impl WalkProgress {
    /// Snapshot the counters of a running traversal.
    pub fn snapshot(dirs_visited: u64, stats: &TraversalStats, current_path: PathBuf) -> Self {
        Self {
            dirs_visited,
            processed: stats.processed,
            skipped: stats.skipped,
            errors: stats.errors,
            current_path,
            elapsed: Duration::ZERO,
        }
    }

    /// Get total files handled (processed + skipped + failed).
    pub fn total_files(&self) -> u64 {
        self.processed + self.skipped + self.errors
    }
}

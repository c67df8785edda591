//! Recursive directory-mirroring walker.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

use rayon::prelude::*;
use tokio::sync::broadcast;

use mirror_core::{
    EntryKind, ImageTransform, MirrorConfig, TransformFailure, TraversalStats, WalkError, is_image,
};

use crate::directory::{ensure_directory, mirror_path, resolve_path};
use crate::progress::WalkProgress;

/// One image to mirror, with its destination already mapped.
#[derive(Debug, Clone)]
struct MirrorJob {
    source: PathBuf,
    destination: PathBuf,
}

/// Roots of one traversal.
struct Roots<'a> {
    input: &'a Path,
    output: &'a Path,
    /// Resolved output root, so an output tree nested inside the input tree
    /// is never walked into.
    output_resolved: Option<PathBuf>,
    started: Instant,
}

impl<'a> Roots<'a> {
    fn new(input: &'a Path, output: &'a Path, started: Instant) -> Self {
        Self {
            input,
            output,
            output_resolved: output.canonicalize().ok(),
            started,
        }
    }

    fn is_output_root(&self, dir: &Path) -> bool {
        match &self.output_resolved {
            Some(resolved) => dir.canonicalize().is_ok_and(|d| &d == resolved),
            None => false,
        }
    }
}

/// Walks an input tree and writes transformed images to the same relative
/// paths under an output tree.
pub struct TreeWalker<T> {
    transform: T,
    progress_tx: broadcast::Sender<WalkProgress>,
    dirs_visited: AtomicU64,
}

impl<T: ImageTransform> TreeWalker<T> {
    /// Create a walker around an image transform.
    pub fn new(transform: T) -> Self {
        let (progress_tx, _) = broadcast::channel(100);
        Self {
            transform,
            progress_tx,
            dirs_visited: AtomicU64::new(0),
        }
    }

    /// Subscribe to walk progress updates.
    pub fn subscribe(&self) -> broadcast::Receiver<WalkProgress> {
        self.progress_tx.subscribe()
    }

    /// Run a complete mirroring pass described by `config`.
    ///
    /// Nothing is written until the input root has been verified as a
    /// listable directory that the output root cannot write into.
    pub fn run(&self, config: &MirrorConfig) -> Result<TraversalStats, WalkError> {
        let start = Instant::now();
        let input = config.input_root.as_path();
        let output = config.output_root.as_path();

        check_input_root(input)?;
        check_roots_disjoint(input, output)?;
        ensure_directory(output)?;

        tracing::info!(
            input = %input.display(),
            output = %output.display(),
            jobs = config.jobs,
            "mirroring images"
        );

        self.dirs_visited.store(0, Ordering::Relaxed);
        let roots = Roots::new(input, output, start);
        let mut stats = TraversalStats::new();
        if config.is_parallel() {
            self.run_parallel(&roots, config.jobs, &mut stats)?;
        } else {
            self.walk_from(input, &roots, &mut stats)?;
        }
        stats.duration = start.elapsed();

        tracing::info!(
            files = stats.total_files(),
            elapsed_ms = stats.duration.as_millis() as u64,
            "mirroring finished: {}",
            stats.summary()
        );
        Ok(stats)
    }

    /// Mirror everything below `current_dir`, transforming images as they
    /// are found.
    ///
    /// Listing and directory creation failures abort the walk. Transform
    /// failures are recorded in `stats` and the walk continues.
    pub fn walk(
        &self,
        current_dir: &Path,
        output_root: &Path,
        input_root: &Path,
        stats: &mut TraversalStats,
    ) -> Result<(), WalkError> {
        let roots = Roots::new(input_root, output_root, Instant::now());
        self.walk_from(current_dir, &roots, stats)
    }

    fn walk_from(
        &self,
        current_dir: &Path,
        roots: &Roots<'_>,
        stats: &mut TraversalStats,
    ) -> Result<(), WalkError> {
        self.visit(current_dir, roots, stats, &mut |job, stats| {
            match self.mirror_file(&job) {
                Ok(()) => stats.record_processed(),
                Err(failure) => stats.record_error(failure),
            }
            self.report(roots, job.source, stats);
        })
    }

    /// Plan sequentially, then run the transforms on a rayon pool.
    ///
    /// All output directories exist before the first transform starts.
    fn run_parallel(
        &self,
        roots: &Roots<'_>,
        jobs: usize,
        stats: &mut TraversalStats,
    ) -> Result<(), WalkError> {
        let mut planned = Vec::new();
        self.visit(roots.input, roots, stats, &mut |job, _| planned.push(job))?;

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(jobs)
            .build()
            .map_err(|e| WalkError::InvalidConfig {
                message: format!("Failed to build worker pool: {e}"),
            })?;

        tracing::debug!(images = planned.len(), threads = pool.current_num_threads(), "transforming");

        let outcome = pool.install(|| {
            planned
                .par_iter()
                .fold(TraversalStats::new, |mut acc, job| {
                    match self.mirror_file(job) {
                        Ok(()) => acc.record_processed(),
                        Err(failure) => acc.record_error(failure),
                    }
                    acc
                })
                .reduce(TraversalStats::new, |mut a, b| {
                    a.merge(b);
                    a
                })
        });
        stats.merge(outcome);
        self.report(roots, roots.input.to_path_buf(), stats);

        Ok(())
    }

    /// Depth-first traversal shared by the sequential and parallel modes.
    fn visit(
        &self,
        current_dir: &Path,
        roots: &Roots<'_>,
        stats: &mut TraversalStats,
        on_image: &mut dyn FnMut(MirrorJob, &mut TraversalStats),
    ) -> Result<(), WalkError> {
        let entries = fs::read_dir(current_dir).map_err(|e| WalkError::read_dir(current_dir, e))?;
        self.dirs_visited.fetch_add(1, Ordering::Relaxed);
        tracing::debug!(dir = %current_dir.display(), "visiting");

        for entry in entries {
            let entry = entry.map_err(|e| WalkError::read_dir(current_dir, e))?;
            let entry_path = current_dir.join(entry.file_name());
            let metadata = fs::metadata(&entry_path).map_err(|source| WalkError::Metadata {
                path: entry_path.clone(),
                source,
            })?;

            match EntryKind::from_metadata(&metadata) {
                EntryKind::Directory => {
                    if roots.is_output_root(&entry_path) {
                        tracing::debug!(dir = %entry_path.display(), "not descending into output root");
                        continue;
                    }
                    let output_dir = mirror_path(roots.output, roots.input, &entry_path)?;
                    ensure_directory(&output_dir)?;
                    self.visit(&entry_path, roots, stats, on_image)?;
                }
                EntryKind::File => {
                    if !is_image(&entry_path) {
                        stats.record_skipped();
                        tracing::trace!(file = %entry_path.display(), "skipping non-image");
                        self.report(roots, entry_path, stats);
                        continue;
                    }
                    let destination = mirror_path(roots.output, roots.input, &entry_path)?;
                    // The directory branch may not have run for this parent.
                    if let Some(parent) = destination.parent() {
                        ensure_directory(parent)?;
                    }
                    on_image(
                        MirrorJob {
                            source: entry_path,
                            destination,
                        },
                        stats,
                    );
                }
            }
        }

        Ok(())
    }

    /// Transform one image, logging the failure if there is one.
    fn mirror_file(&self, job: &MirrorJob) -> Result<(), TransformFailure> {
        match self.transform.transform(&job.source, &job.destination) {
            Ok(()) => {
                tracing::debug!(
                    source = %job.source.display(),
                    destination = %job.destination.display(),
                    "mirrored"
                );
                Ok(())
            }
            Err(e) => {
                tracing::warn!(source = %job.source.display(), error = %e, "failed to mirror image");
                Err(TransformFailure::from_error(&job.source, &e))
            }
        }
    }

    fn report(&self, roots: &Roots<'_>, current_path: PathBuf, stats: &TraversalStats) {
        let mut progress = WalkProgress::snapshot(
            self.dirs_visited.load(Ordering::Relaxed),
            stats,
            current_path,
        );
        progress.elapsed = roots.started.elapsed();
        // No subscribers is fine.
        let _ = self.progress_tx.send(progress);
    }
}

/// Reject an output root that resolves to the input root or to one of its
/// ancestors; either would write mirrored files over input files.
fn check_roots_disjoint(input: &Path, output: &Path) -> Result<(), WalkError> {
    let resolved_input = input.canonicalize().map_err(|e| WalkError::io(input, e))?;
    let Some(resolved_output) = resolve_path(output) else {
        return Err(WalkError::InvalidConfig {
            message: format!("Cannot resolve output root {}", output.display()),
        });
    };
    if resolved_input.starts_with(&resolved_output) {
        return Err(WalkError::InvalidConfig {
            message: format!(
                "Output root {} would overwrite input root {}",
                output.display(),
                input.display()
            ),
        });
    }
    Ok(())
}

/// Verify the input root is a directory we can list.
fn check_input_root(path: &Path) -> Result<(), WalkError> {
    let metadata = fs::metadata(path).map_err(|e| WalkError::io(path, e))?;
    if !metadata.is_dir() {
        return Err(WalkError::NotADirectory {
            path: path.to_path_buf(),
        });
    }
    fs::read_dir(path).map_err(|e| WalkError::read_dir(path, e))?;
    Ok(())
}

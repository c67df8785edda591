//! Error types for traversal and transform operations.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Unrecoverable errors that abort a whole traversal.
#[derive(Debug, Error)]
pub enum WalkError {
    /// Permission denied for a path.
    #[error("Permission denied: {path}")]
    PermissionDenied { path: PathBuf },

    /// Path not found.
    #[error("Path not found: {path}")]
    NotFound { path: PathBuf },

    /// Input root is not a directory.
    #[error("Not a directory: {path}")]
    NotADirectory { path: PathBuf },

    /// A directory could not be listed.
    #[error("Failed to read directory {path}: {source}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Metadata of a listed entry could not be read.
    #[error("Failed to read metadata of {path}: {source}")]
    Metadata {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An output directory could not be created.
    #[error("Failed to create directory {path}: {source}")]
    CreateDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An entry was not located under the traversal root.
    #[error("{path} is not inside {root}")]
    OutsideRoot { path: PathBuf, root: PathBuf },

    /// Invalid configuration.
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// Generic I/O error.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl WalkError {
    /// Create an I/O error with path context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied { path },
            std::io::ErrorKind::NotFound => Self::NotFound { path },
            _ => Self::Io { path, source },
        }
    }

    /// Create a directory listing error, keeping not-found and permission
    /// failures distinguishable.
    pub fn read_dir(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied { path },
            std::io::ErrorKind::NotFound => Self::NotFound { path },
            _ => Self::ReadDir { path, source },
        }
    }

    /// The path that caused the failure, if any.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::PermissionDenied { path }
            | Self::NotFound { path }
            | Self::NotADirectory { path }
            | Self::ReadDir { path, .. }
            | Self::Metadata { path, .. }
            | Self::CreateDirectory { path, .. }
            | Self::OutsideRoot { path, .. }
            | Self::Io { path, .. } => Some(path.as_path()),
            Self::InvalidConfig { .. } => None,
        }
    }
}

/// Per-file failures of an image transform. These never abort a traversal.
#[derive(Debug, Error)]
pub enum TransformError {
    /// Reading the source or writing the destination failed.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The source could not be decoded as an image.
    #[error("Failed to decode {path}: {message}")]
    Decode { path: PathBuf, message: String },

    /// The mirrored image could not be encoded.
    #[error("Failed to encode {path}: {message}")]
    Encode { path: PathBuf, message: String },

    /// No codec is available for the path's format.
    #[error("Unsupported image format: {path}")]
    UnsupportedFormat { path: PathBuf },
}

impl TransformError {
    /// The path the failure refers to.
    pub fn path(&self) -> &Path {
        match self {
            Self::Io { path, .. }
            | Self::Decode { path, .. }
            | Self::Encode { path, .. }
            | Self::UnsupportedFormat { path } => path.as_path(),
        }
    }
}

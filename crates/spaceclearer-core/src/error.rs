//! Error types for scanning, removal and opening.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors that can occur while scanning a directory.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The directory, or something beneath it, could not be read.
    #[error("Access Denied: {}", path.display())]
    AccessDenied {
        path: PathBuf,
        #[source]
        source: Option<std::io::Error>,
    },

    /// A rescan was requested before any directory was selected.
    #[error("No directory selected")]
    NoDirectorySelected,
}

impl ScanError {
    /// Access denied without an underlying I/O error.
    pub fn access_denied(path: impl Into<PathBuf>) -> Self {
        Self::AccessDenied {
            path: path.into(),
            source: None,
        }
    }

    /// Access denied caused by an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::AccessDenied {
            path: path.into(),
            source: Some(source),
        }
    }

    /// Path the scan failed on, if it got as far as a path.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::AccessDenied { path, .. } => Some(path),
            Self::NoDirectorySelected => None,
        }
    }
}

/// Errors that can occur while removing a file.
#[derive(Debug, Error)]
pub enum RemoveError {
    /// Moving to the trash failed or the platform has no trash.
    #[error(
        "Unable to recycle {}: {reason} (this platform may not support recycling)",
        path.display()
    )]
    RecycleUnsupportedOrFailed { path: PathBuf, reason: String },

    /// Permanent deletion failed.
    #[error("Unable to delete {}: {source}", path.display())]
    DeleteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The entry is not part of the current listing.
    #[error("{} is not in the current listing", path.display())]
    NotListed { path: PathBuf },
}

impl RemoveError {
    /// Path the removal was attempted on.
    pub fn path(&self) -> &Path {
        match self {
            Self::RecycleUnsupportedOrFailed { path, .. }
            | Self::DeleteFailed { path, .. }
            | Self::NotListed { path } => path,
        }
    }
}

/// Errors that can occur while opening a file with its default application.
#[derive(Debug, Error)]
pub enum OpenError {
    #[error("Unable to open {}: {source}", path.display())]
    Failed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

//! Recycle and permanent delete.

use std::fs;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use spaceclearer_core::{FileEntry, RemoveError};

/// How a file is removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, Serialize, Deserialize)]
pub enum RemoveMode {
    /// Move to the platform trash.
    #[strum(to_string = "recycle")]
    Recycle,
    /// Irreversible removal.
    #[strum(to_string = "permanently delete")]
    PermanentDelete,
}

/// Removes files from disk.
///
/// Implementations either remove the file completely or leave it untouched,
/// and never retry on their own.
pub trait FileRemover {
    /// Move the file to the platform trash.
    fn recycle(&self, entry: &FileEntry) -> Result<(), RemoveError>;

    /// Delete the file irreversibly.
    fn permanent_delete(&self, entry: &FileEntry) -> Result<(), RemoveError>;

    /// Remove the file using `mode`.
    fn remove(&self, entry: &FileEntry, mode: RemoveMode) -> Result<(), RemoveError> {
        match mode {
            RemoveMode::Recycle => self.recycle(entry),
            RemoveMode::PermanentDelete => self.permanent_delete(entry),
        }
    }
}

/// Remover backed by the `trash` crate and `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRemover;

impl SystemRemover {
    pub fn new() -> Self {
        Self
    }
}

impl FileRemover for SystemRemover {
    fn recycle(&self, entry: &FileEntry) -> Result<(), RemoveError> {
        let path = &entry.path;

        // The trash backends differ on missing files; report it uniformly.
        if let Err(e) = fs::symlink_metadata(path) {
            return Err(RemoveError::RecycleUnsupportedOrFailed {
                path: path.clone(),
                reason: e.to_string(),
            });
        }

        match trash::delete(path) {
            Ok(()) => {
                tracing::debug!(path = %path.display(), "moved to trash");
                Ok(())
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), "recycle failed: {e}");
                Err(RemoveError::RecycleUnsupportedOrFailed {
                    path: path.clone(),
                    reason: e.to_string(),
                })
            }
        }
    }

    fn permanent_delete(&self, entry: &FileEntry) -> Result<(), RemoveError> {
        let path = &entry.path;
        match fs::remove_file(path) {
            Ok(()) => {
                tracing::debug!(path = %path.display(), "deleted");
                Ok(())
            }
            Err(source) => {
                tracing::warn!(path = %path.display(), "delete failed: {source}");
                Err(RemoveError::DeleteFailed {
                    path: path.clone(),
                    source,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;
    use tempfile::TempDir;

    #[test]
    fn test_permanent_delete_removes_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("big.bin");
        fs::write(&path, vec![0u8; 64]).unwrap();

        let entry = FileEntry::new(&path, 64);
        SystemRemover::new().permanent_delete(&entry).unwrap();

        assert!(!path.exists());
    }

    #[test]
    fn test_permanent_delete_missing_file_fails() {
        let temp = TempDir::new().unwrap();
        let entry = FileEntry::new(temp.path().join("gone"), 1);

        let err = SystemRemover::new().permanent_delete(&entry).unwrap_err();
        assert!(matches!(err, RemoveError::DeleteFailed { .. }));
    }

    #[test]
    fn test_permanent_delete_refuses_directory() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("folder");
        fs::create_dir(&dir).unwrap();

        let err = SystemRemover::new()
            .permanent_delete(&FileEntry::new(&dir, 0))
            .unwrap_err();
        assert!(matches!(err, RemoveError::DeleteFailed { .. }));
        assert!(dir.exists());
    }

    #[test]
    fn test_recycle_missing_file_fails() {
        let temp = TempDir::new().unwrap();
        let entry = FileEntry::new(temp.path().join("gone"), 1);

        let err = SystemRemover::new().recycle(&entry).unwrap_err();
        assert!(matches!(err, RemoveError::RecycleUnsupportedOrFailed { .. }));
        assert!(err.to_string().contains("may not support recycling"));
    }

    #[test]
    fn test_remove_dispatches_on_mode() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("a");
        fs::write(&path, "a").unwrap();

        SystemRemover::new()
            .remove(&FileEntry::new(&path, 1), RemoveMode::PermanentDelete)
            .unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn test_mode_labels() {
        let labels: Vec<String> = RemoveMode::iter().map(|m| m.to_string()).collect();
        assert_eq!(labels, vec!["recycle", "permanently delete"]);
    }
}

//! JWalk-based directory scanner.

use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use jwalk::{Parallelism, WalkDir};
use tokio::sync::broadcast;

use spaceclearer_core::{FileEntry, FileList, ScanConfig, ScanError};

use crate::progress::{ProgressTracker, ScanProgress};
use crate::sort::sort_by_size;

/// Files recorded between two progress updates.
const PROGRESS_INTERVAL: u64 = 500;

/// Recursive scanner collecting every regular file under a root.
///
/// Symlinks are skipped unless [`ScanConfig::follow_symlinks`] is set, in
/// which case they are resolved and the regular files they lead to are
/// listed under the link's path.
pub struct DirectoryScanner {
    progress_tx: broadcast::Sender<ScanProgress>,
}

impl DirectoryScanner {
    /// Create a new scanner.
    pub fn new() -> Self {
        let (progress_tx, _) = broadcast::channel(100);
        Self { progress_tx }
    }

    /// Subscribe to scan progress updates.
    pub fn subscribe(&self) -> broadcast::Receiver<ScanProgress> {
        self.progress_tx.subscribe()
    }

    /// Scan and order the result largest first.
    pub fn scan_sorted(&self, config: &ScanConfig) -> Result<FileList, ScanError> {
        self.scan(config).map(sort_by_size)
    }

    /// Collect every regular file under `config.root`, in walk order.
    ///
    /// Files that disappear while the walk is running are skipped. Any other
    /// walk failure, including a subdirectory that cannot be read, aborts the
    /// scan with [`ScanError::AccessDenied`].
    pub fn scan(&self, config: &ScanConfig) -> Result<Vec<FileEntry>, ScanError> {
        let root_path = config
            .root
            .canonicalize()
            .map_err(|e| ScanError::io(&config.root, e))?;

        if !root_path.is_dir() {
            return Err(ScanError::access_denied(root_path));
        }

        // Opening the root up front turns an unreadable root into an error
        // instead of an empty listing.
        std::fs::read_dir(&root_path).map_err(|e| ScanError::io(&root_path, e))?;

        let parallelism = match config.threads {
            0 => Parallelism::RayonDefaultPool {
                busy_timeout: Duration::from_millis(100),
            },
            n => Parallelism::RayonNewPool(n),
        };

        let walker = WalkDir::new(&root_path)
            .parallelism(parallelism)
            .skip_hidden(!config.include_hidden)
            .follow_links(config.follow_symlinks)
            .min_depth(1);

        let mut tracker = ProgressTracker::new();
        let mut files = Vec::new();

        for entry_result in walker {
            let mut entry = match entry_result {
                Ok(e) => e,
                Err(err) => {
                    check_walk_error(err, &root_path)?;
                    continue;
                }
            };

            // jwalk reports a directory it could not read on the directory's
            // own entry instead of yielding an error item.
            if let Some(err) = entry.read_children_error.take() {
                check_walk_error(err, &root_path)?;
            }

            let path = entry.path();
            let Some(size) = regular_file_size(&path, config.follow_symlinks)? else {
                continue;
            };

            tracker.record_file(path.clone(), size);
            files.push(FileEntry::new(path, size));

            if tracker.files_scanned() % PROGRESS_INTERVAL == 0 {
                let _ = self.progress_tx.send(tracker.snapshot());
            }
        }

        let _ = self.progress_tx.send(tracker.snapshot());
        tracing::debug!(
            root = %root_path.display(),
            files = files.len(),
            elapsed_ms = tracker.elapsed().as_millis() as u64,
            "scan complete"
        );

        Ok(files)
    }
}

impl Default for DirectoryScanner {
    fn default() -> Self {
        Self::new()
    }
}

/// Skip walk errors that leave the listing complete, fail on everything else.
///
/// A directory removed while the walk runs and a symlink loop are skipped.
/// Unreadable directories and an overloaded thread pool abort the scan.
fn check_walk_error(err: jwalk::Error, root: &Path) -> Result<(), ScanError> {
    let path = err
        .path()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| root.to_path_buf());

    if let Some(ancestor) = err.loop_ancestor() {
        tracing::warn!(
            path = %path.display(),
            ancestor = %ancestor.display(),
            "skipping symlink loop"
        );
        return Ok(());
    }

    match err.io_error().map(io::Error::kind) {
        Some(io::ErrorKind::NotFound) if path != root => {
            tracing::debug!(path = %path.display(), "directory vanished during scan");
            Ok(())
        }
        _ => Err(ScanError::io(path, io::Error::from(err))),
    }
}

/// Size of `path` if it is a regular file, `None` for anything else or for
/// a file that no longer exists.
fn regular_file_size(path: &Path, follow_symlinks: bool) -> Result<Option<u64>, ScanError> {
    let metadata = if follow_symlinks {
        std::fs::metadata(path)
    } else {
        std::fs::symlink_metadata(path)
    };

    match metadata {
        Ok(m) if m.file_type().is_file() => Ok(Some(m.len())),
        Ok(_) => Ok(None),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "file vanished during scan");
            Ok(None)
        }
        Err(e) => Err(ScanError::io(PathBuf::from(path), e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn create_test_tree() -> TempDir {
        let temp = TempDir::new().unwrap();
        let root = temp.path();

        fs::create_dir(root.join("dir1")).unwrap();
        fs::create_dir(root.join("dir2")).unwrap();
        fs::create_dir(root.join("dir1/subdir")).unwrap();

        fs::write(root.join("file1.txt"), "hello").unwrap();
        fs::write(root.join("dir1/file2.txt"), "world world world").unwrap();
        fs::write(root.join("dir1/subdir/file3.txt"), "test").unwrap();
        fs::write(root.join("dir2/file4.txt"), "another file here!").unwrap();

        temp
    }

    #[test]
    fn test_scan_finds_nested_files() {
        let temp = create_test_tree();
        let scanner = DirectoryScanner::new();
        let files = scanner.scan(&ScanConfig::new(temp.path())).unwrap();

        assert_eq!(files.len(), 4);
        assert!(files.iter().all(|e| e.path.is_absolute()));
        assert!(files.iter().all(|e| e.path.is_file()));
    }

    #[test]
    fn test_scan_sorted_largest_first() {
        let temp = create_test_tree();
        let scanner = DirectoryScanner::new();
        let files = scanner.scan_sorted(&ScanConfig::new(temp.path())).unwrap();

        let names: Vec<String> = files.iter().map(|e| e.name()).collect();
        assert_eq!(names, vec!["file4.txt", "file2.txt", "file1.txt", "file3.txt"]);
    }

    #[test]
    fn test_missing_root_is_access_denied() {
        let temp = TempDir::new().unwrap();
        let scanner = DirectoryScanner::new();
        let err = scanner
            .scan(&ScanConfig::new(temp.path().join("missing")))
            .unwrap_err();

        assert!(matches!(err, ScanError::AccessDenied { .. }));
    }

    #[test]
    fn test_file_root_is_access_denied() {
        let temp = create_test_tree();
        let scanner = DirectoryScanner::new();
        let err = scanner
            .scan(&ScanConfig::new(temp.path().join("file1.txt")))
            .unwrap_err();

        assert!(matches!(err, ScanError::AccessDenied { .. }));
    }

    #[test]
    fn test_hidden_files_toggle() {
        let temp = create_test_tree();
        fs::write(temp.path().join(".hidden"), "secret").unwrap();
        let scanner = DirectoryScanner::new();

        let with_hidden = scanner.scan(&ScanConfig::new(temp.path())).unwrap();
        assert_eq!(with_hidden.len(), 5);

        let config = ScanConfig::builder()
            .root(temp.path())
            .include_hidden(false)
            .build()
            .unwrap();
        let without_hidden = scanner.scan(&config).unwrap();
        assert_eq!(without_hidden.len(), 4);
    }

    #[test]
    fn test_progress_sent_on_completion() {
        let temp = create_test_tree();
        let scanner = DirectoryScanner::new();
        let mut rx = scanner.subscribe();

        scanner.scan(&ScanConfig::new(temp.path())).unwrap();

        let progress = rx.try_recv().unwrap();
        assert_eq!(progress.files_scanned, 4);
    }
}

//! Session state and transitions.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use tokio::sync::broadcast;

use spaceclearer_core::{
    FileEntry, FileList, OpenError, PageCursor, RemoveError, ScanConfig, ScanError,
};
use spaceclearer_ops::{FileOpener, FileRemover, RemoveMode, SystemOpener, SystemRemover};
use spaceclearer_scan::{DirectoryScanner, ScanProgress};

/// Session shared with a background scan.
///
/// The session itself is not safe for concurrent use; every caller goes
/// through this lock.
pub type SharedSession<R = SystemRemover, O = SystemOpener> = Arc<Mutex<Session<R, O>>>;

/// Where the session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No directory has been scanned successfully yet.
    NoDirectory,
    /// A directory is selected and its files are listed (possibly none).
    Listing,
}

/// Owned file list and cursor for one selected directory.
pub struct Session<R = SystemRemover, O = SystemOpener> {
    root: Option<PathBuf>,
    files: FileList,
    cursor: PageCursor,
    scan_template: ScanConfig,
    scanner: DirectoryScanner,
    remover: R,
    opener: O,
}

impl Session {
    /// Session using the system trash, delete and open facilities.
    pub fn new() -> Self {
        Self::with_parts(SystemRemover::new(), SystemOpener::new())
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: FileRemover, O: FileOpener> Session<R, O> {
    /// Session with custom remover and opener.
    pub fn with_parts(remover: R, opener: O) -> Self {
        Self {
            root: None,
            files: FileList::default(),
            cursor: PageCursor::new(),
            scan_template: ScanConfig::default(),
            scanner: DirectoryScanner::new(),
            remover,
            opener,
        }
    }

    /// Scan options applied to every selected directory. The root is ignored.
    pub fn with_scan_options(mut self, template: ScanConfig) -> Self {
        self.scan_template = template;
        self
    }

    /// Use a different page size than the default.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.cursor = PageCursor::with_page_size(page_size);
        self
    }

    /// Wrap the session for use across threads.
    pub fn shared(self) -> SharedSession<R, O> {
        Arc::new(Mutex::new(self))
    }

    pub fn state(&self) -> SessionState {
        if self.root.is_some() {
            SessionState::Listing
        } else {
            SessionState::NoDirectory
        }
    }

    /// Currently selected root directory.
    pub fn root(&self) -> Option<&Path> {
        self.root.as_deref()
    }

    pub fn files(&self) -> &FileList {
        &self.files
    }

    pub fn cursor(&self) -> &PageCursor {
        &self.cursor
    }

    /// Progress updates from scans started by this session.
    pub fn subscribe(&self) -> broadcast::Receiver<ScanProgress> {
        self.scanner.subscribe()
    }

    /// Scan `path` and make it the selected directory.
    ///
    /// On failure the previous directory, list and page stay as they were.
    pub fn select_directory(&mut self, path: impl AsRef<Path>) -> Result<&FileList, ScanError> {
        let config = self.scan_template.with_root(path.as_ref());
        let files = self.scanner.scan_sorted(&config)?;

        // Store the canonical form so the root matches the entry paths.
        let root = config.root.canonicalize().unwrap_or(config.root);
        tracing::info!(root = %root.display(), files = files.len(), "directory selected");

        self.root = Some(root);
        self.files = files;
        self.cursor.reset();
        Ok(&self.files)
    }

    /// Scan the selected directory again.
    pub fn rescan(&mut self) -> Result<&FileList, ScanError> {
        let root = self
            .root
            .clone()
            .ok_or(ScanError::NoDirectorySelected)?;
        self.select_directory(root)
    }

    /// Remove a listed file from disk and from the list.
    ///
    /// The list is only touched when the removal succeeded. Returns the
    /// removed entry.
    pub fn remove_entry(
        &mut self,
        path: &Path,
        mode: RemoveMode,
    ) -> Result<FileEntry, RemoveError> {
        let entry = self
            .files
            .iter()
            .find(|e| e.path == path)
            .cloned()
            .ok_or_else(|| RemoveError::NotListed {
                path: path.to_path_buf(),
            })?;

        self.remover.remove(&entry, mode)?;

        self.files.remove(&entry.path);
        self.cursor.clamp(self.files.len());
        tracing::info!(path = %entry.path.display(), %mode, "removed");
        Ok(entry)
    }

    /// Open a file with its default application. Never changes the session.
    pub fn open_entry(&self, path: &Path) -> Result<(), OpenError> {
        self.opener.open(path)
    }

    /// Entries on the current page.
    pub fn visible(&self) -> &[FileEntry] {
        self.files.slice(self.cursor.visible_range(self.files.len()))
    }

    pub fn has_next(&self) -> bool {
        self.cursor.has_next(self.files.len())
    }

    pub fn has_previous(&self) -> bool {
        self.cursor.has_previous()
    }

    pub fn next_page(&mut self) {
        self.cursor.advance(self.files.len());
    }

    pub fn previous_page(&mut self) {
        self.cursor.retreat();
    }

    /// One-based number of the current page.
    pub fn page_number(&self) -> usize {
        self.cursor.page_number()
    }

    pub fn page_count(&self) -> usize {
        self.cursor.page_count(self.files.len())
    }
}

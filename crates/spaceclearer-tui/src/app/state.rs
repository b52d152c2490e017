//! Application state types.

use std::path::PathBuf;

use spaceclearer_core::FileEntry;
use spaceclearer_session::{
    FileOpener, FileRemover, RemoveMode, ScanError, ScanProgress, Session,
};

use super::input::InputState;

/// Application mode.
#[derive(Debug, Default)]
pub enum AppMode {
    /// Browsing the listing.
    #[default]
    Normal,
    /// Waiting for the user to confirm a removal.
    Confirm { entry: FileEntry, mode: RemoveMode },
    /// Typing a directory path.
    ChangeDirectory(InputState),
    /// A scan is running in the background.
    Scanning { path: PathBuf },
    Quit,
}

/// Messages from a background scan.
#[derive(Debug)]
pub enum ScanResult {
    Progress(ScanProgress),
    /// The scan finished; on success carries the number of files listed.
    Complete {
        path: PathBuf,
        result: Result<usize, ScanError>,
    },
}

/// Copy of what the listing shows, taken after every session change so
/// drawing never needs the session lock.
#[derive(Debug, Clone)]
pub struct ListingSnapshot {
    pub root: PathBuf,
    pub page: Vec<FileEntry>,
    pub file_count: usize,
    pub total_size: u64,
    pub page_number: usize,
    pub page_count: usize,
    pub has_next: bool,
    pub has_previous: bool,
}

impl ListingSnapshot {
    /// Capture the current page, or `None` before any directory was listed.
    pub fn capture<R: FileRemover, O: FileOpener>(session: &Session<R, O>) -> Option<Self> {
        let root = session.root()?.to_path_buf();
        Some(Self {
            root,
            page: session.visible().to_vec(),
            file_count: session.files().len(),
            total_size: session.files().total_size(),
            page_number: session.page_number(),
            page_count: session.page_count(),
            has_next: session.has_next(),
            has_previous: session.has_previous(),
        })
    }
}

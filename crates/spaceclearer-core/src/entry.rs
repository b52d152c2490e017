//! Scanned file entries and the size-ordered file list.

use std::cmp::Ordering;
use std::ops::Range;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// A regular file observed during a scan.
///
/// The size is a snapshot taken when the file was visited; it is never
/// refreshed from disk afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FileEntry {
    /// Path of the file.
    pub path: PathBuf,
    /// Size in bytes at scan time.
    pub size: u64,
}

impl FileEntry {
    /// Create a new entry.
    pub fn new(path: impl Into<PathBuf>, size: u64) -> Self {
        Self {
            path: path.into(),
            size,
        }
    }

    /// Final path component, for display.
    pub fn name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.to_string_lossy().into_owned())
    }

    /// Display ordering: largest first, then by path so ties are deterministic.
    pub fn display_order(a: &FileEntry, b: &FileEntry) -> Ordering {
        b.size.cmp(&a.size).then_with(|| a.path.cmp(&b.path))
    }
}

/// Files of one scan, largest first.
///
/// Display order is list order. The list only shrinks after it is built;
/// a fresh scan replaces it wholesale.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FileList {
    entries: Vec<FileEntry>,
}

impl FileList {
    /// Build a list, sorting the entries into display order.
    pub fn new(mut entries: Vec<FileEntry>) -> Self {
        entries.sort_unstable_by(FileEntry::display_order);
        Self { entries }
    }

    /// Wrap entries the caller has already sorted into display order.
    pub fn from_sorted(entries: Vec<FileEntry>) -> Self {
        debug_assert!(
            entries.windows(2).all(|w| w[0].size >= w[1].size),
            "entries must be sorted largest first"
        );
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&FileEntry> {
        self.entries.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FileEntry> {
        self.entries.iter()
    }

    pub fn as_slice(&self) -> &[FileEntry] {
        &self.entries
    }

    /// Entries in `range`, clipped to the list bounds.
    pub fn slice(&self, range: Range<usize>) -> &[FileEntry] {
        let end = range.end.min(self.entries.len());
        let start = range.start.min(end);
        &self.entries[start..end]
    }

    /// Index of the entry with the given path.
    pub fn position(&self, path: &Path) -> Option<usize> {
        self.entries.iter().position(|e| e.path == path)
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.position(path).is_some()
    }

    /// Remove the entry with the given path, keeping the order of the rest.
    pub fn remove(&mut self, path: &Path) -> Option<FileEntry> {
        let index = self.position(path)?;
        Some(self.entries.remove(index))
    }

    /// Sum of all entry sizes.
    pub fn total_size(&self) -> u64 {
        self.entries.iter().map(|e| e.size).sum()
    }

    pub fn into_vec(self) -> Vec<FileEntry> {
        self.entries
    }
}

impl<'a> IntoIterator for &'a FileList {
    type Item = &'a FileEntry;
    type IntoIter = std::slice::Iter<'a, FileEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

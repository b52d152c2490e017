//! Size ordering.

use rayon::slice::ParallelSliceMut;

use spaceclearer_core::{FileEntry, FileList};

/// Order entries largest first.
///
/// Equal sizes fall back to path order, so the same snapshot always sorts
/// the same way.
pub fn sort_by_size(mut entries: Vec<FileEntry>) -> FileList {
    entries.par_sort_unstable_by(FileEntry::display_order);
    FileList::from_sorted(entries)
}

//! Listing session for spaceclearer.
//!
//! A [`Session`] owns the selected root directory, the size-ordered file
//! list and the page cursor. Front ends call its methods and render what
//! comes back; nothing here draws or prompts.

mod session;

pub use session::{Session, SessionState, SharedSession};

pub use spaceclearer_core::{
    FileEntry, FileList, OpenError, PAGE_SIZE, PageCursor, RemoveError, ScanConfig, ScanError,
};
pub use spaceclearer_ops::{FileOpener, FileRemover, RemoveMode, SystemOpener, SystemRemover};
pub use spaceclearer_scan::ScanProgress;

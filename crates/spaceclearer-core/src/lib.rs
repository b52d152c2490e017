//! Core types for spaceclearer.
//!
//! This crate provides the data structures shared by the scanner, the file
//! operations and the session: scanned file entries, the size-ordered file
//! list, the page cursor, scan configuration and the error taxonomy.

mod config;
mod cursor;
mod entry;
mod error;

pub use config::{ScanConfig, ScanConfigBuilder};
pub use cursor::{PAGE_SIZE, PageCursor};
pub use entry::{FileEntry, FileList};
pub use error::{OpenError, RemoveError, ScanError};

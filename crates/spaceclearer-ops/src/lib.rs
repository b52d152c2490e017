//! File operations for spaceclearer.
//!
//! Removing a listed file (recycle or permanent delete) and handing a file
//! to the operating system's default application. Both sit behind traits so
//! the session can be driven with substitutes in tests.

mod open;
mod remove;

pub use open::{FileOpener, SystemOpener};
pub use remove::{FileRemover, RemoveMode, SystemRemover};

// Re-export core types for convenience
pub use spaceclearer_core::{FileEntry, OpenError, RemoveError};

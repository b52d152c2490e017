//! Directory scanning for spaceclearer.
//!
//! Walks a directory tree with jwalk, records every regular file with its
//! size, and orders the result largest first.
//!
//! # Example
//!
//! ```rust,no_run
//! use spaceclearer_scan::{DirectoryScanner, ScanConfig};
//!
//! let scanner = DirectoryScanner::new();
//! let files = scanner.scan_sorted(&ScanConfig::new("/path/to/scan")).unwrap();
//!
//! for entry in files.iter().take(5) {
//!     println!("{} {}", entry.size, entry.path.display());
//! }
//! ```
//!
//! # Progress Monitoring
//!
//! ```rust,no_run
//! use spaceclearer_scan::{DirectoryScanner, ScanConfig};
//!
//! let scanner = DirectoryScanner::new();
//! let mut progress_rx = scanner.subscribe();
//!
//! std::thread::spawn(move || {
//!     while let Ok(progress) = progress_rx.blocking_recv() {
//!         println!("Scanned {} files", progress.files_scanned);
//!     }
//! });
//!
//! let files = scanner.scan(&ScanConfig::new("/path/to/scan"))?;
//! println!("{} files", files.len());
//! # Ok::<(), spaceclearer_scan::ScanError>(())
//! ```

mod progress;
mod scanner;
mod sort;

pub use progress::ScanProgress;
pub use scanner::DirectoryScanner;
pub use sort::sort_by_size;

// Re-export core types for convenience
pub use spaceclearer_core::{FileEntry, FileList, ScanConfig, ScanError};

//! Terminal user interface for spaceclearer.
//!
//! Shows the largest files under a directory five at a time and lets the
//! user recycle, permanently delete or open them. All listing logic lives in
//! `spaceclearer-session`; this crate only maps keys to session calls and
//! draws the result.
//!
//! # Keyboard
//!
//! - `j`/`k` - Move selection
//! - `n`/`p` - Next/previous page
//! - `r` - Recycle selected file
//! - `D` - Permanently delete selected file
//! - `o`/`Enter` - Open selected file
//! - `c` - Change directory
//! - `R` - Rescan
//! - `q` - Quit

pub mod app;
mod event;
mod theme;
mod ui;

use std::path::PathBuf;

use spaceclearer_core::{PAGE_SIZE, ScanConfig};

pub use app::{App, AppResult};
pub use theme::Theme;
pub use ui::{format_size, truncate_start};

/// Options the front end passes to the TUI.
#[derive(Debug, Clone)]
pub struct TuiConfig {
    /// Scan options applied to every selected directory.
    pub scan: ScanConfig,
    /// Entries per page.
    pub page_size: usize,
}

impl TuiConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_scan(mut self, scan: ScanConfig) -> Self {
        self.scan = scan;
        self
    }
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            scan: ScanConfig::default(),
            page_size: PAGE_SIZE,
        }
    }
}

/// Run the TUI, starting at `path` or at the directory prompt.
pub fn run(path: Option<PathBuf>) -> AppResult<()> {
    run_with_config(path, TuiConfig::default())
}

/// Run the TUI with custom options.
pub fn run_with_config(path: Option<PathBuf>, config: TuiConfig) -> AppResult<()> {
    let rt = tokio::runtime::Runtime::new()?;

    let terminal = ratatui::init();
    let result = rt.block_on(App::with_config(path, config).run(terminal));
    ratatui::restore();

    rt.shutdown_timeout(std::time::Duration::from_millis(100));

    result
}

//! Opening files with the system default application.

use std::path::Path;

use spaceclearer_core::OpenError;

/// Hands a file to an external application.
pub trait FileOpener {
    fn open(&self, path: &Path) -> Result<(), OpenError>;
}

/// Opener using the platform's default handler via the `open` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemOpener;

impl SystemOpener {
    pub fn new() -> Self {
        Self
    }
}

impl FileOpener for SystemOpener {
    fn open(&self, path: &Path) -> Result<(), OpenError> {
        if let Err(source) = std::fs::metadata(path) {
            return Err(OpenError::Failed {
                path: path.to_path_buf(),
                source,
            });
        }

        open::that(path).map_err(|source| {
            tracing::warn!(path = %path.display(), "open failed: {source}");
            OpenError::Failed {
                path: path.to_path_buf(),
                source,
            }
        })
    }
}

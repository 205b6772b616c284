use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// A non-fatal filesystem failure recorded while scanning, measuring or
/// deleting. The core never aborts on these; it collects them.
#[derive(Debug, Error)]
pub enum CleanError {
    #[error("permission denied: {}", path.display())]
    PermissionDenied { path: PathBuf },

    #[error("failed to read {}: {source}", path.display())]
    Enumeration {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to delete {}: {source}", path.display())]
    Deletion {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl CleanError {
    /// Classify a walkdir error. `fallback` is used when walkdir has no path
    /// attached to the error.
    pub fn from_walk(err: walkdir::Error, fallback: &Path) -> Self {
        let path = err
            .path()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| fallback.to_path_buf());
        let source = err
            .into_io_error()
            .unwrap_or_else(|| io::Error::new(io::ErrorKind::Other, "filesystem loop"));

        if source.kind() == io::ErrorKind::PermissionDenied {
            CleanError::PermissionDenied { path }
        } else {
            CleanError::Enumeration { path, source }
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            CleanError::PermissionDenied { path }
            | CleanError::Enumeration { path, .. }
            | CleanError::Deletion { path, .. } => path,
        }
    }

    pub fn is_permission_denied(&self) -> bool {
        matches!(self, CleanError::PermissionDenied { .. })
    }

    /// Log the error at the level its kind warrants.
    pub fn log(&self) {
        if self.is_permission_denied() {
            log::warn!("Skipping directory due to lack of permissions: {}", self.path().display());
        } else {
            log::error!("{self}");
        }
    }
}

/// Errors vanishing between enumeration and stat are treated as already gone.
pub(crate) fn is_not_found(err: &walkdir::Error) -> bool {
    err.io_error()
        .map(|e| e.kind() == io::ErrorKind::NotFound)
        .unwrap_or(false)
}

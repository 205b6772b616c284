use std::ffi::{OsStr, OsString};
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

use crate::cleaner::ScanReport;
use crate::error::CleanError;

/// Directory name the scanner looks for.
pub const MARKER_DIR: &str = "node_modules";

/// Finds marker directories under a root without descending into them.
pub struct Scanner {
    marker: OsString,
}

impl Default for Scanner {
    fn default() -> Self {
        Self::new(MARKER_DIR)
    }
}

impl Scanner {
    pub fn new(marker: impl AsRef<OsStr>) -> Self {
        Self {
            marker: marker.as_ref().to_os_string(),
        }
    }

    pub fn marker(&self) -> &OsStr {
        &self.marker
    }

    /// Walk `root` depth-first and collect every marker directory.
    ///
    /// A missing root, or one that is not a directory, yields an empty report.
    /// Unreadable subtrees are recorded in `skipped` and the walk continues
    /// with their siblings. Symlinks are never followed.
    pub fn scan(&self, root: &Path) -> ScanReport {
        let mut report = ScanReport::default();

        match fs::symlink_metadata(root) {
            Ok(meta) if meta.is_dir() => {}
            _ => return report,
        }

        let mut walker = WalkDir::new(root)
            .min_depth(1)
            .follow_links(false)
            .follow_root_links(false)
            .into_iter();

        while let Some(next) = walker.next() {
            let entry = match next {
                Ok(entry) => entry,
                Err(err) => {
                    if crate::error::is_not_found(&err) {
                        continue;
                    }
                    let err = CleanError::from_walk(err, root);
                    err.log();
                    report.skipped.push(err);
                    continue;
                }
            };

            if !entry.file_type().is_dir() {
                continue;
            }

            if entry.file_name() == self.marker.as_os_str() {
                log::debug!("found {}", entry.path().display());
                report.matches.push(entry.into_path());
                walker.skip_current_dir();
            }
        }

        report
    }
}

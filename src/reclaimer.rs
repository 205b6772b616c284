use std::fs;
use std::io;
use std::path::Path;
use walkdir::WalkDir;

use crate::cleaner::{Measurement, Reclamation};
use crate::error::{self, CleanError};

/// Sum the sizes of every non-directory entry under `path`.
///
/// Symlinks count with their own length and are not traversed. Entries that
/// cannot be read add nothing and are reported in `errors`. A missing path
/// measures as zero.
pub fn directory_size(path: &Path) -> Measurement {
    let mut measurement = Measurement::default();

    let walker = WalkDir::new(path)
        .follow_links(false)
        .follow_root_links(false);

    for next in walker {
        let entry = match next {
            Ok(entry) => entry,
            Err(err) => {
                if !error::is_not_found(&err) {
                    let err = CleanError::from_walk(err, path);
                    err.log();
                    measurement.errors.push(err);
                }
                continue;
            }
        };

        if entry.file_type().is_dir() {
            continue;
        }

        match entry.metadata() {
            Ok(meta) => measurement.bytes += meta.len(),
            Err(err) if error::is_not_found(&err) => {}
            Err(err) => {
                let err = CleanError::from_walk(err, entry.path());
                err.log();
                measurement.errors.push(err);
            }
        }
    }

    measurement
}

/// Remove `path` and everything beneath it. A path that is already gone is
/// not an error.
pub fn remove_tree(path: &Path) -> Result<(), CleanError> {
    let removed = match fs::symlink_metadata(path) {
        Ok(meta) if meta.is_dir() => fs::remove_dir_all(path),
        Ok(_) => fs::remove_file(path),
        Err(err) => Err(err),
    };

    match removed {
        Ok(()) => Ok(()),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(source) => Err(CleanError::Deletion {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Measure `path`, then delete it. A deletion failure is returned in the
/// outcome, not logged; the caller decides how to surface it.
pub fn reclaim(path: &Path) -> Reclamation {
    let measurement = directory_size(path);
    let deletion = remove_tree(path);
    if deletion.is_ok() {
        log::debug!("removed {} ({} bytes)", path.display(), measurement.bytes);
    }

    Reclamation {
        path: path.to_path_buf(),
        size_bytes: measurement.bytes,
        measure_errors: measurement.errors,
        deletion: Some(deletion),
    }
}

/// Measure `path` without touching it.
pub fn measure_only(path: &Path) -> Reclamation {
    let measurement = directory_size(path);
    Reclamation {
        path: path.to_path_buf(),
        size_bytes: measurement.bytes,
        measure_errors: measurement.errors,
        deletion: None,
    }
}

use std::path::PathBuf;

use crate::error::CleanError;

/// Matches found by one scan, in discovery order.
#[derive(Debug, Default)]
pub struct ScanReport {
    pub matches: Vec<PathBuf>,
    /// Subtrees that could not be listed and were left out of the walk.
    pub skipped: Vec<CleanError>,
}

impl ScanReport {
    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }
}

/// Recursive size of a directory, plus whatever could not be stat'ed.
#[derive(Debug, Default)]
pub struct Measurement {
    pub bytes: u64,
    pub errors: Vec<CleanError>,
}

impl Measurement {
    pub fn is_complete(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Outcome of measuring and then deleting one matched directory.
#[derive(Debug)]
pub struct Reclamation {
    pub path: PathBuf,
    /// Size measured before deletion. Best-effort, not re-verified afterwards.
    pub size_bytes: u64,
    pub measure_errors: Vec<CleanError>,
    /// `None` when nothing was deleted on purpose (dry run).
    pub deletion: Option<Result<(), CleanError>>,
}

impl Reclamation {
    pub fn deleted(&self) -> bool {
        matches!(self.deletion, Some(Ok(())))
    }

    pub fn deletion_error(&self) -> Option<&CleanError> {
        match &self.deletion {
            Some(Err(e)) => Some(e),
            _ => None,
        }
    }

    /// Bytes this reclamation contributes to the running total.
    pub fn freed_bytes(&self) -> u64 {
        if self.deleted() {
            self.size_bytes
        } else {
            0
        }
    }

    pub fn is_complete(&self) -> bool {
        self.measure_errors.is_empty() && self.deletion_error().is_none()
    }
}

/// Running totals across every reclaimed directory of one run.
#[derive(Debug, Default)]
pub struct CleanSummary {
    pub cleaned: usize,
    pub failed: usize,
    pub freed_bytes: u64,
    /// Measured size of what a dry run would have removed.
    pub reclaimable_bytes: u64,
}

impl CleanSummary {
    pub fn record(&mut self, outcome: &Reclamation) {
        self.reclaimable_bytes += outcome.size_bytes;
        if outcome.deleted() {
            self.cleaned += 1;
            self.freed_bytes += outcome.freed_bytes();
        } else if outcome.deletion_error().is_some() {
            self.failed += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    fn outcome(size: u64, deletion: Option<Result<(), CleanError>>) -> Reclamation {
        Reclamation {
            path: PathBuf::from("p/node_modules"),
            size_bytes: size,
            measure_errors: Vec::new(),
            deletion,
        }
    }

    #[test]
    fn failed_deletion_is_not_counted_as_freed() {
        let mut summary = CleanSummary::default();
        summary.record(&outcome(100, Some(Ok(()))));
        summary.record(&outcome(
            50,
            Some(Err(CleanError::Deletion {
                path: PathBuf::from("q/node_modules"),
                source: io::Error::new(io::ErrorKind::Other, "locked"),
            })),
        ));

        assert_eq!(summary.cleaned, 1);
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.freed_bytes, 100);
        assert_eq!(summary.reclaimable_bytes, 150);
    }

    #[test]
    fn dry_run_outcome_frees_nothing() {
        let mut summary = CleanSummary::default();
        let dry = outcome(42, None);
        assert!(!dry.deleted());
        assert!(dry.is_complete());
        summary.record(&dry);

        assert_eq!(summary.cleaned, 0);
        assert_eq!(summary.failed, 0);
        assert_eq!(summary.freed_bytes, 0);
        assert_eq!(summary.reclaimable_bytes, 42);
    }
}

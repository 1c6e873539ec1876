use crate::error::CopyError;
use chrono::{DateTime, Local};
use serde::Serialize;
use std::fmt;

/// Outcome counts accumulated across every source directory of a run.
#[derive(Debug, Default)]
pub struct Summary {
    pub copied: usize,
    pub skipped: usize,
    pub failed: usize,
    pub errors: Vec<CopyError>,
}

impl Summary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_failure(&mut self, error: CopyError) {
        self.failed += 1;
        self.errors.push(error);
    }

    /// Serializable snapshot for machine-readable output.
    pub fn report(&self, dry_run: bool) -> SummaryReport {
        SummaryReport {
            copied: self.copied,
            skipped: self.skipped,
            failed: self.failed,
            errors: self.errors.iter().map(|e| e.to_string()).collect(),
            dry_run,
            finished_at: Local::now(),
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "copied={} skipped={} failed={}",
            self.copied, self.skipped, self.failed
        )
    }
}

#[derive(Debug, Serialize)]
pub struct SummaryReport {
    pub copied: usize,
    pub skipped: usize,
    pub failed: usize,
    pub errors: Vec<String>,
    pub dry_run: bool,
    pub finished_at: DateTime<Local>,
}

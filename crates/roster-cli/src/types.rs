use std::path::PathBuf;

use roster_model::ErrorEntry;
use roster_report::WrittenReports;

/// Outcome of one pipeline run, for the summary and the exit code.
#[derive(Debug)]
pub struct RunResult {
    pub roster_csv: PathBuf,
    pub output_dir: PathBuf,
    pub store_path: PathBuf,
    pub dry_run: bool,
    /// Records read from the source, clean or not.
    pub total_records: usize,
    /// Records that passed every check and were routed to the store.
    pub clean_records: usize,
    /// Rows with at least one failing field, counted once per row.
    pub failed_rows: usize,
    /// Every error entry, in input order (a row can contribute several).
    pub entries: Vec<ErrorEntry>,
    /// Report files written for the entries.
    pub reports: WrittenReports,
    /// Non-fatal run errors (store or report write failures).
    pub errors: Vec<String>,
}

impl RunResult {
    pub fn error_entry_count(&self) -> usize {
        self.entries.len()
    }

    pub fn has_failures(&self) -> bool {
        self.failed_rows > 0 || !self.errors.is_empty()
    }
}

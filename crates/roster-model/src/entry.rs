use std::collections::BTreeSet;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::record::{Field, RawRecord};

/// Sentinel reported as the employee id when the record's own id is blank.
pub const MISSING_ID: &str = "N/A";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One diagnostic unit per failing field per row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorEntry {
    /// UTC time the failure was recorded.
    pub timestamp: String,
    /// 1-based position of the record in the input.
    pub record_index: usize,
    /// The record's id, or [`MISSING_ID`] when blank.
    pub employee_id: String,
    /// The failing field.
    pub field: Field,
    /// The offending raw value.
    pub value: String,
    /// Human-readable diagnostic.
    #[serde(rename = "error_message")]
    pub message: String,
}

/// Accumulates validation failures for one pipeline run.
///
/// Entries are append-only and keep input order, so reruns over identical
/// input produce identical reports.
#[derive(Debug, Clone, Default)]
pub struct ErrorLog {
    entries: Vec<ErrorEntry>,
}

impl ErrorLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one field-check failure. `index` is the 0-based input position.
    pub fn record(
        &mut self,
        index: usize,
        record: &RawRecord,
        field: Field,
        message: impl Into<String>,
    ) {
        let employee_id = if record.id.trim().is_empty() {
            MISSING_ID.to_string()
        } else {
            record.id.clone()
        };
        self.entries.push(ErrorEntry {
            timestamp: Utc::now().format(TIMESTAMP_FORMAT).to_string(),
            record_index: index + 1,
            employee_id,
            field,
            value: record.get(field).to_string(),
            message: message.into(),
        });
    }

    /// Total error entries (a row can contribute several).
    pub fn count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Rows with at least one failure, counted once per row.
    pub fn failed_row_count(&self) -> usize {
        self.entries
            .iter()
            .map(|entry| entry.record_index)
            .collect::<BTreeSet<_>>()
            .len()
    }

    pub fn entries(&self) -> &[ErrorEntry] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<ErrorEntry> {
        self.entries
    }
}

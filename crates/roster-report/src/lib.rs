//! Validation error report writers.
//!
//! Entries accumulate in the error log during a run and are written out at
//! the end in up to three formats: CSV, JSON, and (behind the `parquet`
//! feature) a columnar Parquet file. A format that fails to write is logged
//! and skipped; the others still land.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Utc;
use serde::Serialize;
use tracing::{error, info};

use roster_model::ErrorEntry;

const REPORT_SCHEMA: &str = "roster-validator.error-report";
const REPORT_SCHEMA_VERSION: u32 = 1;
const REPORT_STEM: &str = "validation_errors";

/// Paths of the report files a run produced.
#[derive(Debug, Default)]
pub struct WrittenReports {
    pub csv: Option<PathBuf>,
    pub json: Option<PathBuf>,
    pub parquet: Option<PathBuf>,
}

impl WrittenReports {
    pub fn is_empty(&self) -> bool {
        self.csv.is_none() && self.json.is_none() && self.parquet.is_none()
    }

    /// All written paths, for the run summary.
    pub fn paths(&self) -> Vec<&PathBuf> {
        [&self.csv, &self.json, &self.parquet]
            .into_iter()
            .flatten()
            .collect()
    }
}

#[derive(Debug, Serialize)]
struct ErrorReportPayload<'a> {
    schema: &'static str,
    schema_version: u32,
    generated_at: String,
    entries: &'a [ErrorEntry],
}

/// Write the error report in every available format.
///
/// With zero entries nothing is written (clean data needs no report). Each
/// format failure is logged and collected; none aborts the others.
pub fn write_error_reports(output_dir: &Path, entries: &[ErrorEntry]) -> (WrittenReports, Vec<String>) {
    let mut written = WrittenReports::default();
    let mut errors = Vec::new();

    if entries.is_empty() {
        info!("no validation errors recorded; skipping error reports");
        return (written, errors);
    }

    match write_csv_report(output_dir, entries) {
        Ok(path) => written.csv = Some(path),
        Err(source) => {
            error!("failed to write CSV error report: {source:#}");
            errors.push(format!("csv report: {source}"));
        }
    }
    match write_json_report(output_dir, entries) {
        Ok(path) => written.json = Some(path),
        Err(source) => {
            error!("failed to write JSON error report: {source:#}");
            errors.push(format!("json report: {source}"));
        }
    }
    #[cfg(feature = "parquet")]
    match write_parquet_report(output_dir, entries) {
        Ok(path) => written.parquet = Some(path),
        Err(source) => {
            error!("failed to write Parquet error report: {source:#}");
            errors.push(format!("parquet report: {source}"));
        }
    }
    #[cfg(not(feature = "parquet"))]
    tracing::debug!("parquet report skipped (feature disabled)");

    info!(
        entry_count = entries.len(),
        report_count = written.paths().len(),
        "error reports written"
    );
    (written, errors)
}

/// Write entries as CSV with one row per entry.
pub fn write_csv_report(output_dir: &Path, entries: &[ErrorEntry]) -> Result<PathBuf> {
    fs::create_dir_all(output_dir).context("create output directory")?;
    let path = output_dir.join(format!("{REPORT_STEM}.csv"));
    let mut writer = csv::Writer::from_path(&path)
        .with_context(|| format!("create {}", path.display()))?;
    for entry in entries {
        writer.serialize(entry).context("write error entry")?;
    }
    writer.flush().context("flush csv report")?;
    Ok(path)
}

/// Write entries as a pretty-printed JSON payload with schema metadata.
pub fn write_json_report(output_dir: &Path, entries: &[ErrorEntry]) -> Result<PathBuf> {
    fs::create_dir_all(output_dir).context("create output directory")?;
    let path = output_dir.join(format!("{REPORT_STEM}.json"));
    let payload = ErrorReportPayload {
        schema: REPORT_SCHEMA,
        schema_version: REPORT_SCHEMA_VERSION,
        generated_at: Utc::now().to_rfc3339(),
        entries,
    };
    let json = serde_json::to_string_pretty(&payload).context("serialize error report")?;
    fs::write(&path, format!("{json}\n")).with_context(|| format!("write {}", path.display()))?;
    Ok(path)
}

/// Write entries as a columnar Parquet file, one column per entry field.
#[cfg(feature = "parquet")]
pub fn write_parquet_report(output_dir: &Path, entries: &[ErrorEntry]) -> Result<PathBuf> {
    use polars::prelude::{Column, DataFrame, IntoColumn, NamedFrom, ParquetWriter, Series};

    fs::create_dir_all(output_dir).context("create output directory")?;
    let path = output_dir.join(format!("{REPORT_STEM}.parquet"));

    let column = |name: &str, values: Vec<String>| -> Column {
        Series::new(name.into(), values).into_column()
    };
    let mut frame = DataFrame::new(vec![
        column(
            "timestamp",
            entries.iter().map(|entry| entry.timestamp.clone()).collect(),
        ),
        Series::new(
            "record_index".into(),
            entries
                .iter()
                .map(|entry| entry.record_index as u64)
                .collect::<Vec<_>>(),
        )
        .into_column(),
        column(
            "employee_id",
            entries
                .iter()
                .map(|entry| entry.employee_id.clone())
                .collect(),
        ),
        column(
            "field",
            entries
                .iter()
                .map(|entry| entry.field.name().to_string())
                .collect(),
        ),
        column(
            "value",
            entries.iter().map(|entry| entry.value.clone()).collect(),
        ),
        column(
            "error_message",
            entries.iter().map(|entry| entry.message.clone()).collect(),
        ),
    ])
    .context("build report frame")?;

    let file = fs::File::create(&path).with_context(|| format!("create {}", path.display()))?;
    ParquetWriter::new(file)
        .finish(&mut frame)
        .context("write parquet report")?;
    Ok(path)
}

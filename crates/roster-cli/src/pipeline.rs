//! Roster processing pipeline with explicit stages.
//!
//! The pipeline follows these stages in order:
//! 1. **Rules**: resolve the rule set from configuration or defaults
//! 2. **Ingest**: read the roster CSV into raw records
//! 3. **Validate**: run every field check per record, in input order
//! 4. **Persist**: write accepted records to the store
//! 5. **Report**: write the error report in every available format
//!
//! Stages 4 and 5 degrade to run errors on failure; only ingest is fatal.
//! The run always completes and always yields a summary, including for an
//! empty input.

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span, warn};

use roster_ingest::read_roster;
use roster_model::ErrorLog;
use roster_report::{WrittenReports, write_error_reports};
use roster_store::RosterStore;
use roster_validate::{load_rule_set, validate_record};

use crate::types::RunResult;

/// Input for one pipeline run.
#[derive(Debug)]
pub struct RunOptions<'a> {
    pub roster_csv: &'a Path,
    pub config: Option<&'a Path>,
    pub output_dir: &'a Path,
    pub store_path: &'a Path,
    /// Validate and summarize without writing the store or reports.
    pub dry_run: bool,
}

/// Run the full pipeline.
pub fn run_pipeline(options: &RunOptions<'_>) -> Result<RunResult> {
    let run_span = info_span!("run", roster = %options.roster_csv.display());
    let _run_guard = run_span.enter();
    let mut errors = Vec::new();

    // =========================================================================
    // Stage 1: Rules - resolve thresholds from configuration or defaults
    // =========================================================================
    let loaded = info_span!("rules").in_scope(|| load_rule_set(options.config));
    if let Some(reason) = &loaded.fallback {
        warn!(%reason, "configuration fallback; using default rules");
    }
    let rules = loaded.rules;
    info!(
        min_salary = rules.min_salary,
        max_salary = rules.max_salary,
        id_length = rules.id_length,
        phone_length = rules.phone_length,
        date_format = rules.date_format.pattern(),
        email_symbol = %rules.email_symbol,
        "rules resolved"
    );

    // =========================================================================
    // Stage 2: Ingest - read the roster file
    // =========================================================================
    let ingest_start = Instant::now();
    let records = info_span!("ingest")
        .in_scope(|| read_roster(options.roster_csv))
        .context("read roster")?;
    info!(
        record_count = records.len(),
        duration_ms = ingest_start.elapsed().as_millis(),
        "ingest complete"
    );

    // The store is a collaborator: if it cannot be opened the run still
    // validates and reports, it just cannot persist.
    let mut store = match RosterStore::open(options.store_path) {
        Ok(store) => Some(store),
        Err(error) => {
            warn!("store unavailable: {error}");
            errors.push(format!("store: {error}"));
            None
        }
    };

    // =========================================================================
    // Stage 3: Validate - every record, strictly in input order
    // =========================================================================
    let validate_span = info_span!("validate");
    let validate_guard = validate_span.enter();
    let validate_start = Instant::now();
    let mut log = ErrorLog::new();
    let mut clean_records = 0usize;
    let mut failed_rows = 0usize;
    for (index, record) in records.iter().enumerate() {
        match validate_record(index, record, &rules, &mut log) {
            Some(clean) => {
                clean_records += 1;
                if let Some(store) = store.as_mut() {
                    store.save(clean);
                }
            }
            None => failed_rows += 1,
        }
    }
    info!(
        record_count = records.len(),
        clean_records,
        failed_rows,
        error_entries = log.count(),
        duration_ms = validate_start.elapsed().as_millis(),
        "validation complete"
    );
    drop(validate_guard);

    // =========================================================================
    // Stage 4: Persist - write the store
    // =========================================================================
    if options.dry_run {
        info!("persist skipped (dry run)");
    } else if let Some(store) = &store {
        if let Err(error) = info_span!("persist").in_scope(|| store.persist()) {
            warn!("store write failed: {error}");
            errors.push(format!("store: {error}"));
        }
    }

    // =========================================================================
    // Stage 5: Report - write error reports in every available format
    // =========================================================================
    let reports = if options.dry_run {
        info!("reports skipped (dry run)");
        WrittenReports::default()
    } else {
        let (reports, report_errors) =
            info_span!("report").in_scope(|| write_error_reports(options.output_dir, log.entries()));
        errors.extend(report_errors);
        reports
    };

    Ok(RunResult {
        roster_csv: options.roster_csv.to_path_buf(),
        output_dir: options.output_dir.to_path_buf(),
        store_path: options.store_path.to_path_buf(),
        dry_run: options.dry_run,
        total_records: records.len(),
        clean_records,
        failed_rows,
        entries: log.into_entries(),
        reports,
        errors,
    })
}

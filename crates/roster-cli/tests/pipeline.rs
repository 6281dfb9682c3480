//! Integration tests for the pipeline module.

use std::fs;
use std::path::{Path, PathBuf};

use roster_cli::pipeline::{RunOptions, run_pipeline};
use roster_model::Field;
use roster_store::RosterStore;
use tempfile::tempdir;

fn write_roster(dir: &Path, contents: &str) -> PathBuf {
    let path = dir.join("employees.csv");
    fs::write(&path, contents).unwrap();
    path
}

const TWO_RECORD_ROSTER: &str = "id,salary,hire_date,email,phone\n\
    EMP1234,75000.00,2023-10-25,a@b.com,5551234\n\
    SHORT,90000,2022-01-15,p@t.com,5559876\n";

#[test]
fn test_two_record_run_end_to_end() {
    let dir = tempdir().unwrap();
    let roster_csv = write_roster(dir.path(), TWO_RECORD_ROSTER);
    let output_dir = dir.path().join("output");
    let store_path = output_dir.join("roster_store.json");

    let result = run_pipeline(&RunOptions {
        roster_csv: &roster_csv,
        config: None,
        output_dir: &output_dir,
        store_path: &store_path,
        dry_run: false,
    })
    .unwrap();

    assert_eq!(result.total_records, 2);
    assert_eq!(result.clean_records, 1);
    assert_eq!(result.failed_rows, 1);
    assert_eq!(result.error_entry_count(), 1);
    assert_eq!(result.entries[0].field, Field::Id);
    assert_eq!(result.entries[0].record_index, 2);
    assert!(result.errors.is_empty());
    assert!(result.has_failures());

    // The clean record landed in the store with its normalized salary.
    let store = RosterStore::open(&store_path).unwrap();
    assert_eq!(store.len(), 1);
    assert_eq!(store.get("EMP1234").unwrap().salary, 75000.0);

    // Reports were written for the one failing row.
    assert!(result.reports.csv.as_ref().unwrap().exists());
    assert!(result.reports.json.as_ref().unwrap().exists());
}

#[test]
fn test_dry_run_writes_nothing() {
    let dir = tempdir().unwrap();
    let roster_csv = write_roster(dir.path(), TWO_RECORD_ROSTER);
    let output_dir = dir.path().join("output");
    let store_path = output_dir.join("roster_store.json");

    let result = run_pipeline(&RunOptions {
        roster_csv: &roster_csv,
        config: None,
        output_dir: &output_dir,
        store_path: &store_path,
        dry_run: true,
    })
    .unwrap();

    assert_eq!(result.clean_records, 1);
    assert_eq!(result.failed_rows, 1);
    assert!(result.reports.is_empty());
    assert!(!output_dir.exists());
    assert!(!store_path.exists());
}

#[test]
fn test_empty_roster_is_a_zero_work_run() {
    let dir = tempdir().unwrap();
    let roster_csv = write_roster(dir.path(), "id,salary,hire_date,email,phone\n");
    let output_dir = dir.path().join("output");

    let result = run_pipeline(&RunOptions {
        roster_csv: &roster_csv,
        config: None,
        output_dir: &output_dir,
        store_path: &output_dir.join("roster_store.json"),
        dry_run: false,
    })
    .unwrap();

    assert_eq!(result.total_records, 0);
    assert_eq!(result.clean_records, 0);
    assert_eq!(result.failed_rows, 0);
    assert!(result.entries.is_empty());
    assert!(result.reports.is_empty());
    assert!(!result.has_failures());
}

#[test]
fn test_row_failing_many_fields_counts_once() {
    let dir = tempdir().unwrap();
    let roster_csv = write_roster(
        dir.path(),
        "id,salary,hire_date,email,phone\nBAD,1,2024-02-30,nope,12\n",
    );
    let output_dir = dir.path().join("output");

    let result = run_pipeline(&RunOptions {
        roster_csv: &roster_csv,
        config: None,
        output_dir: &output_dir,
        store_path: &output_dir.join("roster_store.json"),
        dry_run: false,
    })
    .unwrap();

    assert_eq!(result.failed_rows, 1);
    assert_eq!(result.error_entry_count(), 5);
    assert_eq!(result.clean_records, 0);
}

#[test]
fn test_config_overrides_rules() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("config.json");
    fs::write(
        &config_path,
        r#"{
            "salary_rules": {"min": 1000.0, "max": 2000.0},
            "id_rules": {"required_length": 5},
            "date_rules": {"format": "YYYY-MM-DD"},
            "phone_rules": {"required_length": 7},
            "email_rules": {"required_symbol": "@"}
        }"#,
    )
    .unwrap();
    let roster_csv = write_roster(
        dir.path(),
        "id,salary,hire_date,email,phone\nSHORT,1500,2022-01-15,p@t.com,5559876\n",
    );
    let output_dir = dir.path().join("output");

    let result = run_pipeline(&RunOptions {
        roster_csv: &roster_csv,
        config: Some(&config_path),
        output_dir: &output_dir,
        store_path: &output_dir.join("roster_store.json"),
        dry_run: false,
    })
    .unwrap();

    // Under the override, a 5-character id and a 1500 salary are clean.
    assert_eq!(result.clean_records, 1);
    assert_eq!(result.failed_rows, 0);
}

#[test]
fn test_reruns_are_deterministic() {
    let dir = tempdir().unwrap();
    let roster_csv = write_roster(
        dir.path(),
        "id,salary,hire_date,email,phone\n\
         BAD,1,2024-02-30,nope,12\n\
         EMP1234,75000.00,2023-10-25,a@b.com,5551234\n\
         SHORT,90000,2022-01-15,p@t.com,5559876\n",
    );

    let run = |output_dir: &Path| {
        let result = run_pipeline(&RunOptions {
            roster_csv: &roster_csv,
            config: None,
            output_dir,
            store_path: &output_dir.join("roster_store.json"),
            dry_run: false,
        })
        .unwrap();
        (
            result.total_records,
            result.clean_records,
            result.failed_rows,
            result
                .entries
                .iter()
                .map(|entry| (entry.record_index, entry.field, entry.message.clone()))
                .collect::<Vec<_>>(),
        )
    };

    let first = run(&dir.path().join("out1"));
    let second = run(&dir.path().join("out2"));
    assert_eq!(first, second);
}

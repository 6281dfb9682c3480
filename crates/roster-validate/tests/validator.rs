//! Tests for record-level validation.

use roster_model::{ErrorLog, Field, MISSING_ID, RawRecord};
use roster_validate::{RuleSet, validate_record};

fn valid_record() -> RawRecord {
    RawRecord {
        id: "EMP1234".to_string(),
        salary: "75000.00".to_string(),
        hire_date: "2023-10-25".to_string(),
        email: "a@b.com".to_string(),
        phone: "5551234".to_string(),
    }
}

#[test]
fn test_clean_record_commits_normalized_salary_only() {
    let rules = RuleSet::default();
    let mut log = ErrorLog::new();
    let mut record = valid_record();
    record.salary = "$90,000".to_string();

    let clean = validate_record(0, &record, &rules, &mut log).expect("record should pass");

    assert!(log.is_empty());
    assert_eq!(clean.salary, 90000.0);
    // Every other field is kept exactly as received.
    assert_eq!(clean.id, "EMP1234");
    assert_eq!(clean.hire_date, "2023-10-25");
    assert_eq!(clean.email, "a@b.com");
    assert_eq!(clean.phone, "5551234");
}

#[test]
fn test_all_checks_run_without_short_circuit() {
    let rules = RuleSet::default();
    let mut log = ErrorLog::new();
    let mut record = valid_record();
    record.id = "SHORT".to_string();
    record.salary = "ABC".to_string();

    let outcome = validate_record(0, &record, &rules, &mut log);

    // Both failing fields are reported, not just the first.
    assert!(outcome.is_none());
    assert_eq!(log.count(), 2);
    assert_eq!(log.entries()[0].field, Field::Id);
    assert_eq!(log.entries()[1].field, Field::Salary);
    assert_eq!(log.failed_row_count(), 1);
}

#[test]
fn test_rejected_record_reports_raw_salary() {
    let rules = RuleSet::default();
    let mut log = ErrorLog::new();
    let mut record = valid_record();
    record.salary = "10k".to_string(); // normalizes to 10000, below minimum

    assert!(validate_record(0, &record, &rules, &mut log).is_none());
    let entry = &log.entries()[0];
    assert_eq!(entry.field, Field::Salary);
    assert_eq!(entry.value, "10k");
}

#[test]
fn test_fully_invalid_record_reports_every_field() {
    let rules = RuleSet::default();
    let mut log = ErrorLog::new();
    let record = RawRecord::default();

    assert!(validate_record(0, &record, &rules, &mut log).is_none());
    assert_eq!(log.count(), 5);
    let fields: Vec<Field> = log.entries().iter().map(|entry| entry.field).collect();
    assert_eq!(
        fields,
        vec![
            Field::Id,
            Field::Salary,
            Field::HireDate,
            Field::Email,
            Field::Phone
        ]
    );
    assert!(
        log.entries()
            .iter()
            .all(|entry| entry.employee_id == MISSING_ID)
    );
}

#[test]
fn test_two_record_scenario() {
    // The documented end-to-end case: one clean record, one id-length
    // failure, against the default rules.
    let rules = RuleSet::default();
    let mut log = ErrorLog::new();
    let records = vec![
        valid_record(),
        RawRecord {
            id: "SHORT".to_string(),
            salary: "90000".to_string(),
            hire_date: "2022-01-15".to_string(),
            email: "p@t.com".to_string(),
            phone: "5559876".to_string(),
        },
    ];

    let mut clean = Vec::new();
    let mut failed_rows = 0usize;
    for (index, record) in records.iter().enumerate() {
        match validate_record(index, record, &rules, &mut log) {
            Some(record) => clean.push(record),
            None => failed_rows += 1,
        }
    }

    assert_eq!(clean.len(), 1);
    assert_eq!(failed_rows, 1);
    assert_eq!(log.count(), 1);
    assert_eq!(log.entries()[0].field, Field::Id);
    assert_eq!(log.entries()[0].record_index, 2);
    assert_eq!(log.entries()[0].employee_id, "SHORT");
}

#[test]
fn test_revalidation_is_deterministic() {
    let rules = RuleSet::default();
    let records = vec![
        RawRecord {
            id: "BAD".to_string(),
            salary: "1".to_string(),
            hire_date: "2024-02-30".to_string(),
            email: "nope".to_string(),
            phone: "12".to_string(),
        },
        valid_record(),
        RawRecord {
            id: "EMP9999".to_string(),
            salary: "seventy-k".to_string(),
            hire_date: "2020-06-01".to_string(),
            email: "x@y.org".to_string(),
            phone: "5550000".to_string(),
        },
    ];

    let run = |records: &[RawRecord]| {
        let mut log = ErrorLog::new();
        for (index, record) in records.iter().enumerate() {
            validate_record(index, record, &rules, &mut log);
        }
        log.into_entries()
            .into_iter()
            .map(|entry| (entry.record_index, entry.field, entry.value, entry.message))
            .collect::<Vec<_>>()
    };

    assert_eq!(run(&records), run(&records));
}

//! Unit tests for the per-field checks.

use roster_model::{ErrorLog, RawRecord};
use roster_validate::{RuleSet, checks};

fn record(id: &str, salary: &str, hire_date: &str, email: &str, phone: &str) -> RawRecord {
    RawRecord {
        id: id.to_string(),
        salary: salary.to_string(),
        hire_date: hire_date.to_string(),
        email: email.to_string(),
        phone: phone.to_string(),
    }
}

#[test]
fn test_id_length() {
    let rules = RuleSet::default();
    let mut log = ErrorLog::new();

    assert!(checks::id::check(
        0,
        &record("EMP1234", "", "", "", ""),
        &rules,
        &mut log
    ));
    assert!(log.is_empty());

    assert!(!checks::id::check(
        0,
        &record("SHORT", "", "", "", ""),
        &rules,
        &mut log
    ));
    assert_eq!(log.count(), 1);
    assert!(log.entries()[0].message.contains("exactly 7 characters"));

    assert!(!checks::id::check(
        1,
        &record("", "", "", "", ""),
        &rules,
        &mut log
    ));
    assert_eq!(log.count(), 2);
    assert!(log.entries()[1].message.contains("blank"));
}

#[test]
fn test_id_surrounding_whitespace_is_ignored() {
    let rules = RuleSet::default();
    let mut log = ErrorLog::new();
    assert!(checks::id::check(
        0,
        &record("  EMP1234  ", "", "", "", ""),
        &rules,
        &mut log
    ));
    assert!(log.is_empty());
}

#[test]
fn test_salary_bounds() {
    let rules = RuleSet::default();
    let mut log = ErrorLog::new();

    assert_eq!(
        checks::salary::check(0, &record("EMP1234", "75000.00", "", "", ""), &rules, &mut log),
        Some(75000.0)
    );
    assert_eq!(
        checks::salary::check(0, &record("EMP1234", "$90,000", "", "", ""), &rules, &mut log),
        Some(90000.0)
    );
    assert_eq!(
        checks::salary::check(0, &record("EMP1234", "45k", "", "", ""), &rules, &mut log),
        Some(45000.0)
    );
    assert_eq!(
        checks::salary::check(0, &record("EMP1234", "seventy-k", "", "", ""), &rules, &mut log),
        Some(70000.0)
    );
    assert!(log.is_empty());

    // Below minimum, above maximum, and unparseable all reject through the
    // same range comparison.
    assert_eq!(
        checks::salary::check(0, &record("EMP1234", "25000", "", "", ""), &rules, &mut log),
        None
    );
    assert_eq!(
        checks::salary::check(0, &record("EMP1234", "200000", "", "", ""), &rules, &mut log),
        None
    );
    assert_eq!(
        checks::salary::check(0, &record("EMP1234", "notanumber", "", "", ""), &rules, &mut log),
        None
    );
    assert_eq!(log.count(), 3);
    assert!(log.entries()[2].message.contains("outside bounds"));
    assert_eq!(log.entries()[2].value, "notanumber");
}

#[test]
fn test_salary_bounds_are_inclusive() {
    let rules = RuleSet::default();
    let mut log = ErrorLog::new();
    assert_eq!(
        checks::salary::check(0, &record("EMP1234", "30000", "", "", ""), &rules, &mut log),
        Some(30000.0)
    );
    assert_eq!(
        checks::salary::check(0, &record("EMP1234", "150000", "", "", ""), &rules, &mut log),
        Some(150000.0)
    );
    assert!(log.is_empty());
}

#[test]
fn test_hire_date_distinguishes_failure_causes() {
    let rules = RuleSet::default();
    let mut log = ErrorLog::new();

    assert!(checks::hire_date::check(
        0,
        &record("EMP1234", "", "2023-10-25", "", ""),
        &rules,
        &mut log
    ));
    assert!(log.is_empty());

    assert!(!checks::hire_date::check(
        0,
        &record("EMP1234", "", "10/25/2023", "", ""),
        &rules,
        &mut log
    ));
    assert!(!checks::hire_date::check(
        1,
        &record("EMP1234", "", "2024-02-30", "", ""),
        &rules,
        &mut log
    ));
    assert!(!checks::hire_date::check(
        2,
        &record("EMP1234", "", "", "", ""),
        &rules,
        &mut log
    ));

    assert_eq!(log.count(), 3);
    let format_mismatch = &log.entries()[0].message;
    let bad_calendar = &log.entries()[1].message;
    assert!(format_mismatch.contains("does not match format YYYY-MM-DD"));
    assert!(bad_calendar.contains("not a real calendar date"));
    assert_ne!(format_mismatch, bad_calendar);
    assert!(log.entries()[2].message.contains("empty"));
}

#[test]
fn test_email_symbol_count() {
    let rules = RuleSet::default();
    let mut log = ErrorLog::new();

    assert!(checks::email::check(
        0,
        &record("EMP1234", "", "", "a@b.com", ""),
        &rules,
        &mut log
    ));
    assert!(log.is_empty());

    for email in ["a.b.com", "a@@b.com", ""] {
        assert!(!checks::email::check(
            0,
            &record("EMP1234", "", "", email, ""),
            &rules,
            &mut log
        ));
    }
    assert_eq!(log.count(), 3);
    assert!(log.entries()[0].message.contains("exactly one '@'"));
}

#[test]
fn test_phone_length() {
    let rules = RuleSet::default();
    let mut log = ErrorLog::new();

    assert!(checks::phone::check(
        0,
        &record("EMP1234", "", "", "", "5551234"),
        &rules,
        &mut log
    ));
    assert!(log.is_empty());

    assert!(!checks::phone::check(
        0,
        &record("EMP1234", "", "", "", "123"),
        &rules,
        &mut log
    ));
    assert!(!checks::phone::check(
        0,
        &record("EMP1234", "", "", "", "1234567890"),
        &rules,
        &mut log
    ));
    assert_eq!(log.count(), 2);
    assert!(log.entries()[0].message.contains("exactly 7 digits"));
}

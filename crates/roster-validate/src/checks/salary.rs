//! Salary normalization and bounds check.

use roster_model::{ErrorLog, Field, RawRecord, redact_value};
use tracing::error;

use crate::normalize::normalize_salary;
use crate::rules::RuleSet;

/// Normalize the salary, then check it against the configured bounds.
///
/// Returns the normalized value on pass so the caller can commit it into the
/// accepted record. Unparseable text normalizes to a sentinel below any
/// valid minimum, so it is rejected here by the same range comparison rather
/// than through a separate "not numeric" path.
pub fn check(index: usize, record: &RawRecord, rules: &RuleSet, log: &mut ErrorLog) -> Option<f64> {
    let normalized = normalize_salary(&record.salary);
    if normalized < rules.min_salary || normalized > rules.max_salary {
        let message = format!(
            "Salary check failed: '{}' resolves to {normalized}, outside bounds {}-{}.",
            record.salary, rules.min_salary, rules.max_salary
        );
        error!(
            record_index = index + 1,
            field = %Field::Salary,
            value = %redact_value(&record.salary),
            normalized,
            "salary out of bounds ({}-{})",
            rules.min_salary,
            rules.max_salary
        );
        log.record(index, record, Field::Salary, message);
        return None;
    }
    Some(normalized)
}

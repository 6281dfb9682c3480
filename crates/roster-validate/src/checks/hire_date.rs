//! Hire-date format and calendar validity check.

use roster_model::{ErrorLog, Field, RawRecord, redact_value};
use tracing::error;

use crate::dates::DateError;
use crate::rules::RuleSet;

/// Check the hire date against the configured pattern.
///
/// The three failure causes carry distinct messages: an empty value, a value
/// that does not match the pattern shape, and a value that matches the shape
/// but names a day that does not exist on the calendar.
pub fn check(index: usize, record: &RawRecord, rules: &RuleSet, log: &mut ErrorLog) -> bool {
    let value = record.hire_date.trim();
    if value.is_empty() {
        let message = "Hire date check failed: value is empty.".to_string();
        error!(record_index = index + 1, field = %Field::HireDate, "{message}");
        log.record(index, record, Field::HireDate, message);
        return false;
    }
    match rules.date_format.parse(value) {
        Ok(_) => true,
        Err(DateError::Shape) => {
            let message = format!(
                "Hire date check failed: '{value}' does not match format {}.",
                rules.date_format.pattern()
            );
            error!(
                record_index = index + 1,
                field = %Field::HireDate,
                value = %redact_value(value),
                "hire date format mismatch (expected {})",
                rules.date_format.pattern()
            );
            log.record(index, record, Field::HireDate, message);
            false
        }
        Err(DateError::Calendar) => {
            let message =
                format!("Hire date check failed: '{value}' is not a real calendar date.");
            error!(
                record_index = index + 1,
                field = %Field::HireDate,
                value = %redact_value(value),
                "hire date is not a real calendar date"
            );
            log.record(index, record, Field::HireDate, message);
            false
        }
    }
}

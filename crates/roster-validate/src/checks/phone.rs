//! Phone length check.

use roster_model::{ErrorLog, Field, RawRecord, redact_value};
use tracing::error;

use crate::rules::RuleSet;

/// Check that the phone value is exactly `phone_length` characters.
pub fn check(index: usize, record: &RawRecord, rules: &RuleSet, log: &mut ErrorLog) -> bool {
    let phone = record.phone.as_str();
    if phone.chars().count() != rules.phone_length {
        let message = format!(
            "Phone check failed: '{phone}' must be exactly {} digits.",
            rules.phone_length
        );
        error!(
            record_index = index + 1,
            field = %Field::Phone,
            value = %redact_value(phone),
            "phone length mismatch (expected {})",
            rules.phone_length
        );
        log.record(index, record, Field::Phone, message);
        return false;
    }
    true
}

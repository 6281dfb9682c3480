//! Identifier length check.

use roster_model::{ErrorLog, Field, RawRecord, redact_value};
use tracing::error;

use crate::rules::RuleSet;

/// Check that the id is non-blank and exactly `id_length` characters.
pub fn check(index: usize, record: &RawRecord, rules: &RuleSet, log: &mut ErrorLog) -> bool {
    let trimmed = record.id.trim();
    if trimmed.is_empty() {
        let message = "ID check failed: value is blank.".to_string();
        error!(record_index = index + 1, field = %Field::Id, "{message}");
        log.record(index, record, Field::Id, message);
        return false;
    }
    if trimmed.chars().count() != rules.id_length {
        let message = format!(
            "ID check failed: '{trimmed}' must be exactly {} characters.",
            rules.id_length
        );
        error!(
            record_index = index + 1,
            field = %Field::Id,
            value = %redact_value(trimmed),
            "id length mismatch (expected {})",
            rules.id_length
        );
        log.record(index, record, Field::Id, message);
        return false;
    }
    true
}

//! Email separator check.

use roster_model::{ErrorLog, Field, RawRecord, redact_value};
use tracing::error;

use crate::rules::RuleSet;

/// Check that the email contains the required symbol exactly once.
pub fn check(index: usize, record: &RawRecord, rules: &RuleSet, log: &mut ErrorLog) -> bool {
    let email = record.email.as_str();
    let occurrences = email.matches(rules.email_symbol.as_str()).count();
    if email.is_empty() || occurrences != 1 {
        let message = format!(
            "Email check failed: '{email}' must contain exactly one '{}'.",
            rules.email_symbol
        );
        error!(
            record_index = index + 1,
            field = %Field::Email,
            value = %redact_value(email),
            occurrences,
            "email must contain exactly one '{}'",
            rules.email_symbol
        );
        log.record(index, record, Field::Email, message);
        return false;
    }
    true
}

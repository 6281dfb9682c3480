//! Record-level validation orchestration.

use roster_model::{CleanRecord, ErrorLog, RawRecord};

use crate::checks;
use crate::rules::RuleSet;

/// Run every field check against one record.
///
/// All five checks always run, in the fixed order id, salary, hire date,
/// email, phone, so that each failing field is reported individually; there
/// is no short-circuit on the first failure. The record is accepted only
/// when every check passes, in which case the returned record carries the
/// normalized salary and every other field exactly as received. A rejected
/// record returns `None` and counts as one failed row however many entries
/// it produced.
pub fn validate_record(
    index: usize,
    record: &RawRecord,
    rules: &RuleSet,
    log: &mut ErrorLog,
) -> Option<CleanRecord> {
    // 1. Identifier length
    let id_ok = checks::id::check(index, record, rules, log);
    // 2. Salary normalization + bounds
    let salary = checks::salary::check(index, record, rules, log);
    // 3. Hire date shape + calendar validity
    let date_ok = checks::hire_date::check(index, record, rules, log);
    // 4. Email separator
    let email_ok = checks::email::check(index, record, rules, log);
    // 5. Phone length
    let phone_ok = checks::phone::check(index, record, rules, log);

    if !(id_ok && date_ok && email_ok && phone_ok) {
        return None;
    }
    let salary = salary?;
    Some(CleanRecord {
        id: record.id.clone(),
        salary,
        hire_date: record.hire_date.clone(),
        email: record.email.clone(),
        phone: record.phone.clone(),
    })
}

//! Per-field validation checks.
//!
//! Each module checks one field. A check receives the record's 0-based input
//! position, the raw record, the resolved rules, and the error log; on
//! failure it records exactly one entry and emits one `error`-level log line
//! (with the offending value behind the redaction gate). Checks never panic
//! and never abort the row.

pub mod email;
pub mod hire_date;
pub mod id;
pub mod phone;
pub mod salary;

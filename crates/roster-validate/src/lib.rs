//! Rule-driven validation for roster records.
//!
//! The entrypoint is [`validate_record`], which runs every per-field check
//! against one raw record and yields a [`roster_model::CleanRecord`] only
//! when all of them pass. Thresholds come from a [`RuleSet`] resolved once
//! per run by [`load_rule_set`].

pub mod checks;
mod dates;
mod normalize;
mod rules;
mod validator;

pub use dates::{DateError, DateFormat, PatternError};
pub use normalize::normalize_salary;
pub use rules::{
    DEFAULT_DATE_FORMAT, DEFAULT_EMAIL_SYMBOL, DEFAULT_ID_LENGTH, DEFAULT_MAX_SALARY,
    DEFAULT_MIN_SALARY, DEFAULT_PHONE_LENGTH, FallbackReason, LoadedRules, RuleSet, load_rule_set,
};
pub use validator::validate_record;

//! Rule set resolution.
//!
//! Thresholds are read from an optional JSON configuration file. The load is
//! all-or-nothing: if the file is absent, malformed, missing any recognized
//! key, or carries values that violate a rule invariant, the whole read is
//! discarded and the full default table is used instead. The caller receives
//! the reason and logs it once; resolution itself never fails.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::dates::DateFormat;

pub const DEFAULT_MIN_SALARY: f64 = 30_000.0;
pub const DEFAULT_MAX_SALARY: f64 = 150_000.0;
pub const DEFAULT_ID_LENGTH: usize = 7;
pub const DEFAULT_PHONE_LENGTH: usize = 7;
pub const DEFAULT_DATE_FORMAT: &str = "YYYY-MM-DD";
pub const DEFAULT_EMAIL_SYMBOL: &str = "@";

/// The resolved validation thresholds for one pipeline run.
///
/// Invariants: `min_salary <= max_salary`, lengths are positive, the email
/// symbol is non-empty, and the date format compiles. Construction enforces
/// them by rejecting any configuration that does not.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleSet {
    /// Inclusive salary bounds.
    pub min_salary: f64,
    pub max_salary: f64,
    /// Exact required identifier length, in characters.
    pub id_length: usize,
    /// Exact required phone length, in characters.
    pub phone_length: usize,
    /// Compiled hire-date pattern.
    pub date_format: DateFormat,
    /// Separator that must appear exactly once in an email.
    pub email_symbol: String,
}

impl Default for RuleSet {
    fn default() -> Self {
        Self {
            min_salary: DEFAULT_MIN_SALARY,
            max_salary: DEFAULT_MAX_SALARY,
            id_length: DEFAULT_ID_LENGTH,
            phone_length: DEFAULT_PHONE_LENGTH,
            date_format: DateFormat::default(),
            email_symbol: DEFAULT_EMAIL_SYMBOL.to_string(),
        }
    }
}

/// Why a configuration read was discarded in favor of the defaults.
#[derive(Debug, Error)]
pub enum FallbackReason {
    #[error("config file not found: {path}")]
    Missing { path: PathBuf },

    #[error("failed to read config {path}: {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed config {path}: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid rule values in {path}: {reason}")]
    Invalid { path: PathBuf, reason: String },
}

/// Outcome of rule resolution: the rules to run with, plus the fallback
/// reason when the configured source could not be used.
#[derive(Debug)]
pub struct LoadedRules {
    pub rules: RuleSet,
    pub fallback: Option<FallbackReason>,
}

impl LoadedRules {
    pub fn is_fallback(&self) -> bool {
        self.fallback.is_some()
    }
}

#[derive(Debug, Deserialize)]
struct ConfigFile {
    salary_rules: SalaryRules,
    id_rules: IdRules,
    date_rules: DateRules,
    phone_rules: PhoneRules,
    email_rules: EmailRules,
}

#[derive(Debug, Deserialize)]
struct SalaryRules {
    min: f64,
    max: f64,
}

#[derive(Debug, Deserialize)]
struct IdRules {
    required_length: usize,
}

#[derive(Debug, Deserialize)]
struct DateRules {
    format: String,
}

#[derive(Debug, Deserialize)]
struct PhoneRules {
    required_length: usize,
}

#[derive(Debug, Deserialize)]
struct EmailRules {
    required_symbol: String,
}

/// Resolve the rule set for a run.
///
/// With no path, the defaults apply silently. With a path, the file is read
/// whole; any failure falls back to the complete default table and reports
/// the reason. Never returns an error.
pub fn load_rule_set(path: Option<&Path>) -> LoadedRules {
    let Some(path) = path else {
        return LoadedRules {
            rules: RuleSet::default(),
            fallback: None,
        };
    };
    match read_config(path) {
        Ok(rules) => LoadedRules {
            rules,
            fallback: None,
        },
        Err(reason) => LoadedRules {
            rules: RuleSet::default(),
            fallback: Some(reason),
        },
    }
}

fn read_config(path: &Path) -> Result<RuleSet, FallbackReason> {
    let text = fs::read_to_string(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            FallbackReason::Missing {
                path: path.to_path_buf(),
            }
        } else {
            FallbackReason::Unreadable {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;
    let config: ConfigFile =
        serde_json::from_str(&text).map_err(|source| FallbackReason::Malformed {
            path: path.to_path_buf(),
            source,
        })?;
    resolve(config, path)
}

fn resolve(config: ConfigFile, path: &Path) -> Result<RuleSet, FallbackReason> {
    let invalid = |reason: String| FallbackReason::Invalid {
        path: path.to_path_buf(),
        reason,
    };

    if config.salary_rules.min.is_nan() || config.salary_rules.max.is_nan() {
        return Err(invalid("salary bounds must be numbers".to_string()));
    }
    if config.salary_rules.min > config.salary_rules.max {
        return Err(invalid(format!(
            "min salary {} exceeds max salary {}",
            config.salary_rules.min, config.salary_rules.max
        )));
    }
    if config.id_rules.required_length == 0 {
        return Err(invalid("id length must be positive".to_string()));
    }
    if config.phone_rules.required_length == 0 {
        return Err(invalid("phone length must be positive".to_string()));
    }
    if config.email_rules.required_symbol.is_empty() {
        return Err(invalid("email symbol must not be empty".to_string()));
    }
    let date_format = DateFormat::compile(&config.date_rules.format)
        .map_err(|error| invalid(error.to_string()))?;

    Ok(RuleSet {
        min_salary: config.salary_rules.min,
        max_salary: config.salary_rules.max,
        id_length: config.id_rules.required_length,
        phone_length: config.phone_rules.required_length,
        date_format,
        email_symbol: config.email_rules.required_symbol,
    })
}

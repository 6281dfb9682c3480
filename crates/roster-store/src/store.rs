//! The roster store: load, upsert, atomic persist.

use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use roster_model::{CleanRecord, redact_value};

use crate::error::{Result, StoreError};

const STORE_SCHEMA: &str = "roster-validator.store";

/// Highest store file version this build can read.
pub const CURRENT_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Serialize, Deserialize)]
struct StoreFile {
    schema: String,
    schema_version: u32,
    saved_at: String,
    employees: BTreeMap<String, CleanRecord>,
}

/// Id-keyed store of accepted roster records.
///
/// Upserts accumulate in memory; [`RosterStore::persist`] writes the whole
/// store atomically (temp file + rename) so a crash mid-write never leaves
/// a truncated file behind.
#[derive(Debug)]
pub struct RosterStore {
    path: PathBuf,
    employees: BTreeMap<String, CleanRecord>,
}

impl RosterStore {
    /// Open a store at `path`, loading existing contents when present.
    ///
    /// A missing file is not an error: it starts an empty store that will be
    /// created on the first persist.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if !path.exists() {
            debug!(path = %path.display(), "store file absent; starting empty");
            return Ok(Self {
                path,
                employees: BTreeMap::new(),
            });
        }

        let text = fs::read_to_string(&path).map_err(|source| StoreError::Io {
            operation: "read",
            path: path.clone(),
            source,
        })?;
        let file: StoreFile =
            serde_json::from_str(&text).map_err(|source| StoreError::InvalidFormat {
                path: path.clone(),
                reason: source.to_string(),
            })?;
        if file.schema != STORE_SCHEMA {
            return Err(StoreError::InvalidFormat {
                path,
                reason: format!("unrecognized schema identifier '{}'", file.schema),
            });
        }
        if file.schema_version > CURRENT_SCHEMA_VERSION {
            return Err(StoreError::UnsupportedVersion {
                found: file.schema_version,
                max_supported: CURRENT_SCHEMA_VERSION,
                path,
            });
        }

        info!(
            path = %path.display(),
            record_count = file.employees.len(),
            "store loaded"
        );
        Ok(Self {
            path,
            employees: file.employees,
        })
    }

    /// Upsert one accepted record. A duplicate id replaces the stored record.
    pub fn save(&mut self, record: CleanRecord) {
        let id = record.id.clone();
        if self.employees.insert(id.clone(), record).is_some() {
            debug!(employee_id = %redact_value(&id), "replaced existing store record");
        }
    }

    pub fn get(&self, id: &str) -> Option<&CleanRecord> {
        self.employees.get(id)
    }

    pub fn len(&self) -> usize {
        self.employees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write the store to disk atomically.
    pub fn persist(&self) -> Result<()> {
        let file = StoreFile {
            schema: STORE_SCHEMA.to_string(),
            schema_version: CURRENT_SCHEMA_VERSION,
            saved_at: Utc::now().to_rfc3339(),
            employees: self.employees.clone(),
        };
        let json = serde_json::to_string_pretty(&file)
            .map_err(|source| StoreError::Serialization { source })?;

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|source| StoreError::Io {
                operation: "create directory for",
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let temp_path = self.path.with_extension("json.tmp");
        let mut handle = File::create(&temp_path).map_err(|source| StoreError::Io {
            operation: "create",
            path: temp_path.clone(),
            source,
        })?;
        handle
            .write_all(json.as_bytes())
            .map_err(|source| StoreError::Io {
                operation: "write",
                path: temp_path.clone(),
                source,
            })?;
        handle.sync_all().map_err(|source| StoreError::Io {
            operation: "sync",
            path: temp_path.clone(),
            source,
        })?;
        fs::rename(&temp_path, &self.path).map_err(|source| StoreError::AtomicWriteFailed {
            temp_path,
            target_path: self.path.clone(),
            source,
        })?;

        info!(
            path = %self.path.display(),
            record_count = self.employees.len(),
            "store persisted"
        );
        Ok(())
    }
}

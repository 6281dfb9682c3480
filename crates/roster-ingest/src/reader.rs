use std::fs::File;
use std::io;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use tracing::{info, warn};

use roster_model::{Field, RawRecord};

use crate::error::{IngestError, Result};

/// Read a roster CSV into raw records, preserving input order.
///
/// Cell values are passed through untrimmed; validation owns all judgement
/// about their content.
pub fn read_roster(path: &Path) -> Result<Vec<RawRecord>> {
    let file = File::open(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;
    let mut reader = ReaderBuilder::new().flexible(true).from_reader(file);

    let headers = reader
        .headers()
        .map_err(|source| IngestError::CsvParse {
            path: path.to_path_buf(),
            source,
        })?
        .clone();
    let columns = ColumnMap::from_headers(&headers);
    for field in Field::ALL {
        if columns.index_of(field).is_none() {
            warn!(
                path = %path.display(),
                column = field.name(),
                "column not found in roster header; its values will be empty"
            );
        }
    }

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row.map_err(|source| IngestError::CsvParse {
            path: path.to_path_buf(),
            source,
        })?;
        records.push(columns.record(&row));
    }

    info!(
        path = %path.display(),
        record_count = records.len(),
        "roster loaded"
    );
    Ok(records)
}

/// Header positions of the five roster fields, matched case-insensitively.
#[derive(Debug, Default)]
struct ColumnMap {
    indices: [Option<usize>; 5],
}

impl ColumnMap {
    fn from_headers(headers: &StringRecord) -> Self {
        let mut map = Self::default();
        for (position, header) in headers.iter().enumerate() {
            let normalized = header.trim().trim_matches('\u{feff}');
            for (slot, field) in Field::ALL.iter().enumerate() {
                if normalized.eq_ignore_ascii_case(field.name()) && map.indices[slot].is_none() {
                    map.indices[slot] = Some(position);
                }
            }
        }
        map
    }

    fn index_of(&self, field: Field) -> Option<usize> {
        let slot = Field::ALL.iter().position(|candidate| *candidate == field)?;
        self.indices[slot]
    }

    fn cell(&self, row: &StringRecord, field: Field) -> String {
        self.index_of(field)
            .and_then(|index| row.get(index))
            .unwrap_or("")
            .to_string()
    }

    fn record(&self, row: &StringRecord) -> RawRecord {
        RawRecord {
            id: self.cell(row, Field::Id),
            salary: self.cell(row, Field::Salary),
            hire_date: self.cell(row, Field::HireDate),
            email: self.cell(row, Field::Email),
            phone: self.cell(row, Field::Phone),
        }
    }
}

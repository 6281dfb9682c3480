//! Roster CSV ingestion.
//!
//! Reads a delimited roster file into raw records for validation. Columns
//! are located by case-insensitive header match; a column missing from the
//! header is tolerated (its values come back empty, and validation rejects
//! them with a precise reason rather than the reader guessing).

mod error;
mod reader;

pub use error::IngestError;
pub use reader::read_roster;

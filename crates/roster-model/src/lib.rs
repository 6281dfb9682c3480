pub mod entry;
pub mod record;
pub mod redact;

pub use entry::{ErrorEntry, ErrorLog, MISSING_ID};
pub use record::{CleanRecord, Field, RawRecord};
pub use redact::{REDACTED_VALUE, log_data_enabled, redact_value, set_log_data};

//! CLI library components for the Roster Validator.

pub mod logging;
pub mod pipeline;
pub mod types;

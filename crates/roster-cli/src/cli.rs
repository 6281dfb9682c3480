//! CLI argument definitions for the roster validator.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "roster-validator",
    version,
    about = "Roster Validator - validate and clean employee roster data",
    long_about = "Validate employee roster CSV files against a configurable rule set.\n\n\
                  Clean records are persisted to an id-keyed store; invalid records\n\
                  are reported with per-field diagnostics in CSV and JSON (and\n\
                  Parquet when built with the parquet feature)."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Allow raw row values (PII) in log output.
    ///
    /// By default the offending values in log lines are replaced with a
    /// redaction token; error report files always carry the real values.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Validate a roster CSV, persist clean records, and report errors.
    Run(RunArgs),

    /// Print the resolved validation rule set.
    Rules(RulesArgs),
}

#[derive(Parser)]
pub struct RunArgs {
    /// Path to the roster CSV file.
    #[arg(value_name = "ROSTER_CSV")]
    pub roster_csv: PathBuf,

    /// Path to the rules configuration JSON (defaults apply without it).
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Output directory for reports and the store (default: <CSV dir>/output).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Store file for clean records (default: <OUTPUT_DIR>/roster_store.json).
    #[arg(long = "store", value_name = "PATH")]
    pub store: Option<PathBuf>,

    /// Validate and report without writing the store or report files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Parser)]
pub struct RulesArgs {
    /// Path to the rules configuration JSON (defaults apply without it).
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

use std::path::{Path, PathBuf};

use anyhow::Result;
use comfy_table::Table;
use tracing::warn;

use roster_cli::pipeline::{RunOptions, run_pipeline};
use roster_cli::types::RunResult;
use roster_validate::load_rule_set;

use crate::cli::{RulesArgs, RunArgs};
use crate::summary::{apply_table_style, header_cell};

pub fn run_roster(args: &RunArgs) -> Result<RunResult> {
    let output_dir = args
        .output_dir
        .clone()
        .unwrap_or_else(|| default_output_dir(&args.roster_csv));
    let store_path = args
        .store
        .clone()
        .unwrap_or_else(|| output_dir.join("roster_store.json"));

    run_pipeline(&RunOptions {
        roster_csv: &args.roster_csv,
        config: args.config.as_deref(),
        output_dir: &output_dir,
        store_path: &store_path,
        dry_run: args.dry_run,
    })
}

pub fn run_rules(args: &RulesArgs) -> Result<()> {
    let loaded = load_rule_set(args.config.as_deref());
    if let Some(reason) = &loaded.fallback {
        warn!(%reason, "configuration fallback; showing default rules");
    }
    let rules = loaded.rules;

    let mut table = Table::new();
    table.set_header(vec![header_cell("Rule"), header_cell("Value")]);
    apply_table_style(&mut table);
    table.add_row(vec!["min_salary".to_string(), rules.min_salary.to_string()]);
    table.add_row(vec!["max_salary".to_string(), rules.max_salary.to_string()]);
    table.add_row(vec!["id_length".to_string(), rules.id_length.to_string()]);
    table.add_row(vec![
        "phone_length".to_string(),
        rules.phone_length.to_string(),
    ]);
    table.add_row(vec![
        "date_format".to_string(),
        rules.date_format.pattern().to_string(),
    ]);
    table.add_row(vec!["email_symbol".to_string(), rules.email_symbol]);
    println!("{table}");
    Ok(())
}

fn default_output_dir(roster_csv: &Path) -> PathBuf {
    roster_csv
        .parent()
        .unwrap_or_else(|| Path::new("."))
        .join("output")
}

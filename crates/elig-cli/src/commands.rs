//! Command implementations.

use std::path::PathBuf;

use anyhow::{Context, Result};
use comfy_table::Table;
use tracing::{info, info_span};

use elig_core::{CsvStore, RunContext, RunReport, run_pipeline};
use elig_model::load_partners_config;

use crate::cli::{PartnersArgs, RunArgs};
use crate::summary::apply_table_style;

/// List configured partners without running the pipeline.
pub fn run_partners(args: &PartnersArgs) -> Result<()> {
    let config = load_partners_config(&args.config)
        .with_context(|| format!("load config {}", args.config.display()))?;
    let mut table = Table::new();
    table.set_header(vec!["Partner", "Code", "File", "Delimiter", "Mapped columns"]);
    apply_table_style(&mut table);
    for partner in &config.partners {
        table.add_row(vec![
            partner.name.clone(),
            partner.partner_code.clone(),
            partner.file_path.display().to_string(),
            partner.delimiter.to_string(),
            partner.column_mapping.len().to_string(),
        ]);
    }
    println!("{table}");
    Ok(())
}

/// Run the full pipeline from a configuration file.
pub fn run(args: &RunArgs) -> Result<RunReport> {
    let config = load_partners_config(&args.config)
        .with_context(|| format!("load config {}", args.config.display()))?;
    let data_dir = args
        .data_dir
        .clone()
        .unwrap_or_else(|| PathBuf::from("data"));
    let store = CsvStore::new(&data_dir);
    let ctx = RunContext::now();

    let run_span = info_span!(
        "run",
        partners = config.len(),
        data_dir = %data_dir.display(),
        ingest_ts = %ctx.ingest_ts
    );
    let report = run_span.in_scope(|| run_pipeline(&config, &store, &ctx))?;
    info!(
        partners = report.partners.len(),
        gold_rows = report.gold_rows,
        "pipeline complete"
    );
    Ok(report)
}

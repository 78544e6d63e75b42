//! The pipeline driver.
//!
//! Per partner, in config-declared order: ingest the raw file to bronze,
//! persist bronze, transform to silver, persist silver. After every partner
//! has completed, run the unification stage once and persist gold. Any
//! partner failure aborts the run before unification; a partial gold
//! dataset is never produced.

use chrono::{SecondsFormat, Utc};
use tracing::{info, info_span};

use elig_ingest::ingest_partner;
use elig_model::{PartnerConfig, PartnersConfig};
use elig_transform::build_silver_frame;

use crate::error::PipelineError;
use crate::store::{DatasetStore, bronze_path, gold_path, silver_path};
use crate::unify::unify_partners;

/// Explicitly passed execution context for one pipeline run.
///
/// Carries the run-constant ingestion timestamp; there is no process-wide
/// mutable state, so partner stages stay independently testable.
#[derive(Debug, Clone)]
pub struct RunContext {
    /// Wall-clock capture time of this run, RFC 3339 UTC.
    pub ingest_ts: String,
}

impl RunContext {
    /// Capture the current wall-clock time for a new run.
    pub fn now() -> Self {
        Self {
            ingest_ts: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
        }
    }

    pub fn new(ingest_ts: impl Into<String>) -> Self {
        Self {
            ingest_ts: ingest_ts.into(),
        }
    }
}

/// Row counts for one partner's bronze and silver stages.
#[derive(Debug, Clone)]
pub struct PartnerOutcome {
    pub name: String,
    pub partner_code: String,
    pub bronze_rows: usize,
    pub silver_rows: usize,
}

/// Result of a full pipeline run.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub ingest_ts: String,
    pub partners: Vec<PartnerOutcome>,
    pub gold_rows: usize,
    pub gold_path: String,
}

/// Run the per-partner stages for a single partner.
pub fn run_partner(
    config: &PartnerConfig,
    store: &dyn DatasetStore,
    ctx: &RunContext,
) -> Result<PartnerOutcome, PipelineError> {
    let span = info_span!("partner", name = %config.name, partner_code = %config.partner_code);
    let _guard = span.enter();

    let bronze = ingest_partner(config, &ctx.ingest_ts).map_err(|source| {
        PipelineError::SourceRead {
            partner: config.name.clone(),
            source,
        }
    })?;
    let path = bronze_path(&config.name);
    store
        .write(&path, &bronze)
        .map_err(|source| PipelineError::Store { path, source })?;
    info!(rows = bronze.height(), "bronze written");

    let silver = build_silver_frame(&bronze, config).map_err(|cause| {
        PipelineError::Transform {
            partner: config.name.clone(),
            cause,
        }
    })?;
    let path = silver_path(&config.name);
    store
        .write(&path, &silver)
        .map_err(|source| PipelineError::Store { path, source })?;
    info!(rows = silver.height(), "silver written");

    Ok(PartnerOutcome {
        name: config.name.clone(),
        partner_code: config.partner_code.clone(),
        bronze_rows: bronze.height(),
        silver_rows: silver.height(),
    })
}

/// Run the full pipeline: every partner's stages, then unification.
pub fn run_pipeline(
    config: &PartnersConfig,
    store: &dyn DatasetStore,
    ctx: &RunContext,
) -> Result<RunReport, PipelineError> {
    if config.is_empty() {
        return Err(PipelineError::NoPartners);
    }

    let mut partners = Vec::with_capacity(config.len());
    for partner in &config.partners {
        partners.push(run_partner(partner, store, ctx)?);
    }

    let unify_span = info_span!("unify", partners = config.len());
    let gold = unify_span.in_scope(|| unify_partners(config, store))?;
    let path = gold_path();
    store
        .write(&path, &gold)
        .map_err(|source| PipelineError::Store {
            path: path.clone(),
            source,
        })?;
    info!(rows = gold.height(), path = %path, "gold written");

    Ok(RunReport {
        ingest_ts: ctx.ingest_ts.clone(),
        partners,
        gold_rows: gold.height(),
        gold_path: path,
    })
}

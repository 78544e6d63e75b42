//! The silver-to-gold unification stage.

use std::collections::BTreeSet;

use polars::prelude::DataFrame;
use tracing::debug;

use elig_model::{PartnersConfig, SILVER_COLUMNS};

use crate::error::PipelineError;
use crate::store::{DatasetStore, silver_path};

/// Merge every partner's persisted silver frame into the gold frame.
///
/// Partners are visited in declared config order, which fixes gold row
/// order. Columns are aligned by name, not position: each silver frame is
/// reordered to the canonical schema before stacking. A silver frame whose
/// column set deviates from the canonical schema fails the stage outright;
/// columns are never dropped or null-filled here.
pub fn unify_partners(
    config: &PartnersConfig,
    store: &dyn DatasetStore,
) -> Result<DataFrame, PipelineError> {
    if config.is_empty() {
        return Err(PipelineError::NoPartners);
    }

    let expected: BTreeSet<&str> = SILVER_COLUMNS.into_iter().collect();
    let mut gold: Option<DataFrame> = None;
    for partner in &config.partners {
        let path = silver_path(&partner.name);
        let silver = store
            .read(&path)
            .map_err(|source| PipelineError::Store { path, source })?;

        let found: Vec<String> = silver
            .get_column_names()
            .iter()
            .map(|name| name.to_string())
            .collect();
        let found_set: BTreeSet<&str> = found.iter().map(String::as_str).collect();
        if found_set != expected {
            return Err(PipelineError::SchemaMismatch {
                partner: partner.name.clone(),
                expected: SILVER_COLUMNS.iter().map(|name| name.to_string()).collect(),
                found,
            });
        }

        // Name-aligned union: reorder to canonical order before stacking.
        let aligned = silver
            .select(SILVER_COLUMNS)
            .map_err(|error| PipelineError::Frame {
                partner: partner.name.clone(),
                message: error.to_string(),
            })?;
        debug!(partner = %partner.name, rows = aligned.height(), "unified silver frame");
        match gold.as_mut() {
            None => gold = Some(aligned),
            Some(accumulator) => {
                accumulator
                    .vstack_mut(&aligned)
                    .map_err(|error| PipelineError::Frame {
                        partner: partner.name.clone(),
                        message: error.to_string(),
                    })?;
            }
        }
    }

    // Non-empty config always seeds the accumulator above.
    gold.ok_or(PipelineError::NoPartners)
}

//! The bronze-to-silver stage transformer.
//!
//! Applies the partner's column mapping, normalizes each canonical field,
//! drops rows without a usable `external_id`, and projects to the fixed
//! seven-column silver schema.

use anyhow::{Context, Result};
use polars::prelude::{Column, DataFrame, NamedFrom, Series};
use tracing::debug;

use elig_model::{
    DOB, EMAIL, EXTERNAL_ID, FIRST_NAME, LAST_NAME, PARTNER_CODE, PHONE, PartnerConfig,
    SILVER_COLUMNS,
};

use crate::normalize::{normalize_dob, normalize_phone, title_case};

/// Rename mapped source columns to their canonical names.
///
/// Source columns absent from the frame are silently skipped, so a partner
/// config stays forward-compatible with files lacking optional columns.
/// Unmapped columns pass through unrenamed and fall away at projection.
pub fn apply_column_mapping(frame: &mut DataFrame, config: &PartnerConfig) -> Result<()> {
    for (source, canonical) in &config.column_mapping {
        if frame.column(source).is_err() {
            continue;
        }
        frame
            .rename(source, canonical.as_str().into())
            .with_context(|| format!("rename column '{source}' to '{canonical}'"))?;
    }
    Ok(())
}

/// Transform one partner's bronze frame into its silver frame.
///
/// A row with an unparsable `dob` or malformed `phone` survives with that
/// field null; only an absent or blank `external_id` rejects a row.
pub fn build_silver_frame(bronze: &DataFrame, config: &PartnerConfig) -> Result<DataFrame> {
    let mut mapped = bronze.clone();
    apply_column_mapping(&mut mapped, config)?;
    let height = mapped.height();

    let external_id = normalized_column(&mapped, EXTERNAL_ID, height, |raw| {
        non_blank(raw.trim())
    })?;
    let first_name = normalized_column(&mapped, FIRST_NAME, height, |raw| {
        non_blank(&title_case(raw.trim()))
    })?;
    let last_name = normalized_column(&mapped, LAST_NAME, height, |raw| {
        non_blank(&title_case(raw.trim()))
    })?;
    let dob = normalized_column(&mapped, DOB, height, normalize_dob)?;
    let email = normalized_column(&mapped, EMAIL, height, |raw| {
        non_blank(&raw.trim().to_lowercase())
    })?;
    let phone = normalized_column(&mapped, PHONE, height, normalize_phone)?;
    let partner_code = normalized_column(&mapped, PARTNER_CODE, height, |raw| {
        Some(raw.to_string())
    })?;

    // Sole validation rule: a row must carry a non-blank external_id.
    let keep: Vec<bool> = external_id.iter().map(Option::is_some).collect();
    let kept = keep.iter().filter(|flag| **flag).count();
    debug!(
        partner = %config.name,
        input_rows = height,
        output_rows = kept,
        dropped = height - kept,
        "validated bronze rows"
    );

    let fields = [
        external_id,
        first_name,
        last_name,
        dob,
        email,
        phone,
        partner_code,
    ];
    let columns: Vec<Column> = SILVER_COLUMNS
        .iter()
        .zip(fields)
        .map(|(name, values)| {
            let filtered: Vec<Option<String>> = values
                .into_iter()
                .zip(&keep)
                .filter(|(_, flag)| **flag)
                .map(|(value, _)| value)
                .collect();
            Series::new((*name).into(), filtered).into()
        })
        .collect();

    DataFrame::new(columns).context("build silver frame")
}

fn non_blank(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Extract a canonical column as normalized values, or all-null when the
/// column does not exist post-mapping.
fn normalized_column(
    frame: &DataFrame,
    name: &str,
    height: usize,
    normalize: impl Fn(&str) -> Option<String>,
) -> Result<Vec<Option<String>>> {
    let Ok(column) = frame.column(name) else {
        return Ok(vec![None; height]);
    };
    let chunked = column
        .str()
        .with_context(|| format!("column '{name}' is not a string column"))?;
    Ok(chunked
        .iter()
        .map(|cell| cell.and_then(&normalize))
        .collect())
}

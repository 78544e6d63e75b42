//! Bronze frame construction.

use polars::prelude::{Column, DataFrame, NamedFrom, Series};
use tracing::debug;

use elig_model::{INGEST_TS, PARTNER_CODE, PartnerConfig};

use crate::error::{IngestError, Result};
use crate::table::{RawTable, read_delimited_table};

/// Build the bronze frame from a raw table.
///
/// One string column per source header, in source order, plus the two
/// metadata columns: `partner_code` from the configuration and `ingest_ts`,
/// constant across the whole run.
pub fn build_bronze_frame(
    table: &RawTable,
    partner_code: &str,
    ingest_ts: &str,
) -> Result<DataFrame> {
    let height = table.rows.len();
    let mut columns: Vec<Column> = Vec::with_capacity(table.headers.len() + 2);
    for (idx, header) in table.headers.iter().enumerate() {
        let values: Vec<String> = table
            .rows
            .iter()
            .map(|row| row.get(idx).cloned().unwrap_or_default())
            .collect();
        columns.push(Series::new(header.as_str().into(), values).into());
    }
    columns.push(Series::new(PARTNER_CODE.into(), vec![partner_code.to_string(); height]).into());
    columns.push(Series::new(INGEST_TS.into(), vec![ingest_ts.to_string(); height]).into());

    Ok(DataFrame::new(columns)?)
}

/// Ingest one partner's raw file into its bronze frame.
pub fn ingest_partner(config: &PartnerConfig, ingest_ts: &str) -> Result<DataFrame> {
    // Non-ASCII delimiters are multi-byte in UTF-8 and cannot act as a
    // single-byte field separator.
    if !config.delimiter.is_ascii() {
        return Err(IngestError::InvalidDelimiter {
            partner: config.name.clone(),
            value: config.delimiter,
        });
    }
    let table = read_delimited_table(&config.file_path, config.delimiter as u8)?;
    debug!(
        partner = %config.name,
        rows = table.rows.len(),
        columns = table.headers.len(),
        "read source file"
    );
    build_bronze_frame(&table, &config.partner_code, ingest_ts)
}

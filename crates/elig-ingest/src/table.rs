//! Delimited text file reading.
//!
//! Partner files use an arbitrary single-character delimiter with a required
//! header row. Cell values are carried verbatim; only headers are trimmed
//! (and stripped of a UTF-8 BOM), since the transform stage owns all value
//! normalization.

use std::path::Path;

use csv::ReaderBuilder;

use crate::error::{IngestError, Result};

/// A raw partner file: header names plus untyped text rows.
#[derive(Debug, Clone)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

fn normalize_header(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Read a delimited file, treating the first record as the header row.
///
/// Short rows are padded with empty cells and long rows truncated, so every
/// row has exactly the header width.
pub fn read_delimited_table(path: &Path, delimiter: u8) -> Result<RawTable> {
    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|error| match error.kind() {
            csv::ErrorKind::Io(io) if io.kind() == std::io::ErrorKind::NotFound => {
                IngestError::FileNotFound {
                    path: path.to_path_buf(),
                }
            }
            _ => IngestError::Parse {
                path: path.to_path_buf(),
                message: error.to_string(),
            },
        })?;

    let mut records = reader.records();
    let headers: Vec<String> = match records.next() {
        Some(record) => {
            let record = record.map_err(|error| IngestError::Parse {
                path: path.to_path_buf(),
                message: error.to_string(),
            })?;
            record.iter().map(normalize_header).collect()
        }
        None => {
            return Err(IngestError::NoHeader {
                path: path.to_path_buf(),
            });
        }
    };
    if headers.iter().all(|name| name.is_empty()) {
        return Err(IngestError::NoHeader {
            path: path.to_path_buf(),
        });
    }

    let mut rows = Vec::new();
    for record in records {
        let record = record.map_err(|error| IngestError::Parse {
            path: path.to_path_buf(),
            message: error.to_string(),
        })?;
        let mut row = Vec::with_capacity(headers.len());
        for idx in 0..headers.len() {
            row.push(record.get(idx).unwrap_or("").to_string());
        }
        rows.push(row);
    }

    Ok(RawTable { headers, rows })
}

//! Error types for source file ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading a partner's raw file.
///
/// Any of these aborts the partner's ingestion; there is no row-level
/// recovery at this stage.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Source file not found.
    #[error("source file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read the source file.
    #[error("failed to read source file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse a delimited record.
    #[error("failed to parse {path}: {message}")]
    Parse { path: PathBuf, message: String },

    /// The file has no parseable header row.
    #[error("no parseable header row in {path}")]
    NoHeader { path: PathBuf },

    /// The configured delimiter is not a single ASCII character.
    #[error("partner {partner}: delimiter {value:?} is not ASCII")]
    InvalidDelimiter { partner: String, value: char },

    /// Failed DataFrame construction.
    #[error("failed to build bronze frame: {message}")]
    Frame { message: String },
}

impl From<polars::prelude::PolarsError> for IngestError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::Frame {
            message: err.to_string(),
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_names_the_file() {
        let err = IngestError::FileNotFound {
            path: PathBuf::from("/data/acme.csv"),
        };
        assert_eq!(err.to_string(), "source file not found: /data/acme.csv");
    }
}

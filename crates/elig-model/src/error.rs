//! Configuration errors.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading or validating partner configuration.
///
/// All of these are fatal at config-load time; the pipeline never starts
/// with an invalid configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file could not be read.
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file is not valid JSON or does not match the schema.
    #[error("failed to parse config {path}: {message}")]
    Parse { path: PathBuf, message: String },

    /// A column mapping targets a field outside the canonical schema.
    #[error(
        "partner '{partner}': column mapping '{source_column}' targets unknown canonical field '{target}'"
    )]
    UnknownCanonicalField {
        partner: String,
        source_column: String,
        target: String,
    },

    /// Delimiter must be a single ASCII character.
    #[error("partner '{partner}': delimiter '{value}' must be a single ASCII character")]
    InvalidDelimiter { partner: String, value: char },

    /// A required identifier is empty.
    #[error("partner at index {index}: '{field}' must not be empty")]
    EmptyField { index: usize, field: &'static str },

    /// Two partners share the same name.
    #[error("duplicate partner name '{name}'")]
    DuplicatePartner { name: String },
}

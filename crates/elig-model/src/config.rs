//! Partner configuration loading and validation.
//!
//! The configuration file is a JSON document with a `partners` array. An
//! array (rather than a map) keeps the declared partner order, which fixes
//! the row order of the unified gold dataset.

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::ConfigError;
use crate::schema::is_canonical_input_field;

/// Ingestion parameters for a single partner.
///
/// Constructed once at startup and never mutated by pipeline stages.
#[derive(Debug, Clone, Deserialize)]
pub struct PartnerConfig {
    /// Dataset namespace key (`bronze/<name>`, `silver/<name>`).
    pub name: String,
    /// Stable identifier stamped on every record.
    pub partner_code: String,
    /// Location of the raw delimited file.
    pub file_path: PathBuf,
    /// Field separator of the raw file.
    pub delimiter: char,
    /// Source column name to canonical field name.
    #[serde(default)]
    pub column_mapping: BTreeMap<String, String>,
}

/// The full set of configured partners, in declared order.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PartnersConfig {
    pub partners: Vec<PartnerConfig>,
}

impl PartnersConfig {
    pub fn is_empty(&self) -> bool {
        self.partners.is_empty()
    }

    pub fn len(&self) -> usize {
        self.partners.len()
    }

    /// Validate the invariants the pipeline relies on.
    ///
    /// Mapping targets must stay inside the canonical field set, delimiters
    /// must be single ASCII characters, and partner names must be unique.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = BTreeSet::new();
        for (index, partner) in self.partners.iter().enumerate() {
            if partner.name.trim().is_empty() {
                return Err(ConfigError::EmptyField {
                    index,
                    field: "name",
                });
            }
            if partner.partner_code.trim().is_empty() {
                return Err(ConfigError::EmptyField {
                    index,
                    field: "partner_code",
                });
            }
            if !seen.insert(partner.name.clone()) {
                return Err(ConfigError::DuplicatePartner {
                    name: partner.name.clone(),
                });
            }
            if !partner.delimiter.is_ascii() {
                return Err(ConfigError::InvalidDelimiter {
                    partner: partner.name.clone(),
                    value: partner.delimiter,
                });
            }
            for (source_column, target) in &partner.column_mapping {
                if !is_canonical_input_field(target) {
                    return Err(ConfigError::UnknownCanonicalField {
                        partner: partner.name.clone(),
                        source_column: source_column.clone(),
                        target: target.clone(),
                    });
                }
            }
        }
        Ok(())
    }
}

/// Load and validate a partners configuration file.
pub fn load_partners_config(path: &Path) -> Result<PartnersConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let config: PartnersConfig =
        serde_json::from_str(&contents).map_err(|error| ConfigError::Parse {
            path: path.to_path_buf(),
            message: error.to_string(),
        })?;
    config.validate()?;
    Ok(config)
}

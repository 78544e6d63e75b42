//! Columnar dataset store.
//!
//! Datasets are addressed by logical path, namespaced by stage:
//! `bronze/<partner>`, `silver/<partner>`, `gold/eligibility_unified`.
//! The filesystem store persists frames as CSV with an all-string schema so
//! values round-trip exactly as the transform stage produced them; the
//! in-memory store backs driver and unification tests.

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

use polars::prelude::{CsvReadOptions, CsvWriter, DataFrame, SerReader, SerWriter};
use thiserror::Error;

/// Logical name of the unified gold dataset.
pub const GOLD_DATASET: &str = "eligibility_unified";

pub fn bronze_path(partner_name: &str) -> String {
    format!("bronze/{partner_name}")
}

pub fn silver_path(partner_name: &str) -> String {
    format!("silver/{partner_name}")
}

pub fn gold_path() -> String {
    format!("gold/{GOLD_DATASET}")
}

/// Errors from dataset persistence.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Dataset does not exist at the logical path.
    #[error("dataset not found: {path}")]
    NotFound { path: String },

    /// Filesystem failure.
    #[error("io error for {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Frame serialization or deserialization failure.
    #[error("dataset {path}: {message}")]
    Frame { path: String, message: String },
}

/// Abstract columnar dataset store.
///
/// `write` always overwrites; partners never share a path, so no
/// cross-partner locking is needed.
pub trait DatasetStore {
    fn read(&self, path: &str) -> Result<DataFrame, StoreError>;
    fn write(&self, path: &str, frame: &DataFrame) -> Result<(), StoreError>;
    fn exists(&self, path: &str) -> bool;
}

/// Filesystem store rooted at a data directory, one CSV file per dataset.
pub struct CsvStore {
    root: PathBuf,
}

impl CsvStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn file_path(&self, path: &str) -> PathBuf {
        self.root.join(format!("{path}.csv"))
    }
}

impl DatasetStore for CsvStore {
    fn read(&self, path: &str) -> Result<DataFrame, StoreError> {
        let file = self.file_path(path);
        if !file.exists() {
            return Err(StoreError::NotFound {
                path: path.to_string(),
            });
        }
        // Zero-length schema inference keeps every column as string, so the
        // silver schema survives the round trip untyped.
        CsvReadOptions::default()
            .with_has_header(true)
            .with_infer_schema_length(Some(0))
            .try_into_reader_with_file_path(Some(file))
            .map_err(|error| StoreError::Frame {
                path: path.to_string(),
                message: error.to_string(),
            })?
            .finish()
            .map_err(|error| StoreError::Frame {
                path: path.to_string(),
                message: error.to_string(),
            })
    }

    fn write(&self, path: &str, frame: &DataFrame) -> Result<(), StoreError> {
        let file = self.file_path(path);
        if let Some(parent) = file.parent() {
            fs::create_dir_all(parent).map_err(|source| StoreError::Io {
                path: path.to_string(),
                source,
            })?;
        }
        let handle = fs::File::create(&file).map_err(|source| StoreError::Io {
            path: path.to_string(),
            source,
        })?;
        let mut output = frame.clone();
        CsvWriter::new(handle)
            .include_header(true)
            .finish(&mut output)
            .map_err(|error| StoreError::Frame {
                path: path.to_string(),
                message: error.to_string(),
            })
    }

    fn exists(&self, path: &str) -> bool {
        self.file_path(path).exists()
    }
}

/// In-memory store for tests.
#[derive(Default)]
pub struct MemoryStore {
    frames: Mutex<BTreeMap<String, DataFrame>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DatasetStore for MemoryStore {
    fn read(&self, path: &str) -> Result<DataFrame, StoreError> {
        let frames = self.frames.lock().unwrap_or_else(|e| e.into_inner());
        frames.get(path).cloned().ok_or_else(|| StoreError::NotFound {
            path: path.to_string(),
        })
    }

    fn write(&self, path: &str, frame: &DataFrame) -> Result<(), StoreError> {
        let mut frames = self.frames.lock().unwrap_or_else(|e| e.into_inner());
        frames.insert(path.to_string(), frame.clone());
        Ok(())
    }

    fn exists(&self, path: &str) -> bool {
        let frames = self.frames.lock().unwrap_or_else(|e| e.into_inner());
        frames.contains_key(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::{NamedFrom, Series};

    #[test]
    fn logical_paths_are_stage_namespaced() {
        assert_eq!(bronze_path("acme"), "bronze/acme");
        assert_eq!(silver_path("acme"), "silver/acme");
        assert_eq!(gold_path(), "gold/eligibility_unified");
    }

    #[test]
    fn memory_store_round_trips_frames() {
        let store = MemoryStore::new();
        let frame = DataFrame::new(vec![
            Series::new("external_id".into(), vec!["1".to_string()]).into(),
        ])
        .expect("frame");
        assert!(!store.exists("silver/acme"));
        store.write("silver/acme", &frame).expect("write");
        assert!(store.exists("silver/acme"));
        let read = store.read("silver/acme").expect("read");
        assert_eq!(read.height(), 1);
        assert!(matches!(
            store.read("silver/umbra"),
            Err(StoreError::NotFound { .. })
        ));
    }
}

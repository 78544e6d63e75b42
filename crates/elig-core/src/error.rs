//! Pipeline error taxonomy.
//!
//! Stage failures are fatal to the run; row-level data issues never appear
//! here (an unparsable dob or phone degrades to a null field, a blank
//! external_id drops the row). Every variant names the offending partner or
//! dataset path.

use thiserror::Error;

use crate::store::StoreError;
use elig_ingest::IngestError;

#[derive(Debug, Error)]
pub enum PipelineError {
    /// A partner's raw file could not be read into bronze.
    #[error("partner '{partner}': {source}")]
    SourceRead {
        partner: String,
        #[source]
        source: IngestError,
    },

    /// A partner's bronze-to-silver transformation failed.
    #[error("partner '{partner}': transform failed: {cause}")]
    Transform {
        partner: String,
        cause: anyhow::Error,
    },

    /// A dataset could not be persisted or read back.
    #[error("dataset '{path}': {source}")]
    Store {
        path: String,
        #[source]
        source: StoreError,
    },

    /// A persisted silver dataset deviates from the canonical schema.
    #[error(
        "partner '{partner}': silver schema mismatch: expected {expected:?}, found {found:?}"
    )]
    SchemaMismatch {
        partner: String,
        expected: Vec<String>,
        found: Vec<String>,
    },

    /// Unification over an empty partner set.
    #[error("no partners configured; nothing to unify")]
    NoPartners,

    /// A frame operation failed during unification.
    #[error("partner '{partner}': {message}")]
    Frame { partner: String, message: String },
}

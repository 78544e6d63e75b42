//! Core of the eligibility unification pipeline.
//!
//! Sequences the per-partner bronze and silver stages, persists each stage
//! through a columnar dataset store, and merges all partners' silver frames
//! into the unified gold dataset.

pub mod error;
pub mod pipeline;
pub mod store;
pub mod unify;

pub use error::PipelineError;
pub use pipeline::{PartnerOutcome, RunContext, RunReport, run_pipeline};
pub use store::{
    CsvStore, DatasetStore, GOLD_DATASET, MemoryStore, StoreError, bronze_path, gold_path,
    silver_path,
};
pub use unify::unify_partners;

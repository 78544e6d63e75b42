//! Data model for the eligibility unification pipeline.
//!
//! Defines the canonical silver schema, the per-partner ingestion
//! configuration, and configuration validation.

pub mod config;
pub mod error;
pub mod schema;

pub use config::{PartnerConfig, PartnersConfig, load_partners_config};
pub use error::ConfigError;
pub use schema::{
    CANONICAL_INPUT_FIELDS, DOB, EMAIL, EXTERNAL_ID, FIRST_NAME, INGEST_TS, LAST_NAME,
    PARTNER_CODE, PHONE, SILVER_COLUMNS, is_canonical_input_field,
};

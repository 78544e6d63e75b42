//! Source file ingestion for the eligibility pipeline.
//!
//! Reads a partner's raw delimited file and produces the bronze frame: the
//! source columns verbatim, plus `partner_code` and `ingest_ts` metadata.

pub mod bronze;
pub mod error;
pub mod table;

pub use bronze::{build_bronze_frame, ingest_partner};
pub use error::{IngestError, Result};
pub use table::{RawTable, read_delimited_table};

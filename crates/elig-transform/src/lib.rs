//! Bronze-to-silver transformation for the eligibility pipeline.
//!
//! Pure field normalizers plus the stage transformer that applies column
//! mapping, normalization, validation, and projection to the canonical
//! silver schema.

pub mod normalize;
pub mod silver;

pub use normalize::{normalize_dob, normalize_phone, title_case};
pub use silver::{apply_column_mapping, build_silver_frame};

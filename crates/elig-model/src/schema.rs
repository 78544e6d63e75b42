//! Canonical column names shared by every pipeline stage.

/// Stable subscriber identifier; the only field whose absence rejects a row.
pub const EXTERNAL_ID: &str = "external_id";
pub const FIRST_NAME: &str = "first_name";
pub const LAST_NAME: &str = "last_name";
pub const DOB: &str = "dob";
pub const EMAIL: &str = "email";
pub const PHONE: &str = "phone";

/// Metadata column stamped from the partner configuration at ingest time.
pub const PARTNER_CODE: &str = "partner_code";
/// Metadata column holding the wall-clock capture time of the ingestion run.
pub const INGEST_TS: &str = "ingest_ts";

/// Fields a partner's column mapping is allowed to target.
pub const CANONICAL_INPUT_FIELDS: [&str; 6] =
    [EXTERNAL_ID, FIRST_NAME, LAST_NAME, DOB, EMAIL, PHONE];

/// The silver (and gold) schema, in its fixed output order.
///
/// `partner_code` is always last.
pub const SILVER_COLUMNS: [&str; 7] = [
    EXTERNAL_ID,
    FIRST_NAME,
    LAST_NAME,
    DOB,
    EMAIL,
    PHONE,
    PARTNER_CODE,
];

/// Whether a column mapping may target the given canonical field name.
pub fn is_canonical_input_field(name: &str) -> bool {
    CANONICAL_INPUT_FIELDS.contains(&name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn silver_schema_order_is_fixed() {
        assert_eq!(SILVER_COLUMNS.len(), 7);
        assert_eq!(SILVER_COLUMNS[0], EXTERNAL_ID);
        assert_eq!(SILVER_COLUMNS[6], PARTNER_CODE);
    }

    #[test]
    fn metadata_columns_are_not_mapping_targets() {
        assert!(is_canonical_input_field(EXTERNAL_ID));
        assert!(is_canonical_input_field(PHONE));
        assert!(!is_canonical_input_field(PARTNER_CODE));
        assert!(!is_canonical_input_field(INGEST_TS));
    }
}

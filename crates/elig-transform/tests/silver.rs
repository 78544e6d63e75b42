//! Tests for the bronze-to-silver stage transformer.

use std::collections::BTreeMap;
use std::path::PathBuf;

use polars::prelude::{Column, DataFrame, NamedFrom, Series};

use elig_model::{PartnerConfig, SILVER_COLUMNS};
use elig_transform::build_silver_frame;

fn partner(mapping: &[(&str, &str)]) -> PartnerConfig {
    PartnerConfig {
        name: "acme".to_string(),
        partner_code: "ACME".to_string(),
        file_path: PathBuf::from("data/acme.csv"),
        delimiter: ',',
        column_mapping: mapping
            .iter()
            .map(|(src, dst)| (src.to_string(), dst.to_string()))
            .collect(),
    }
}

fn bronze(columns: &[(&str, &[&str])]) -> DataFrame {
    let height = columns.first().map(|(_, values)| values.len()).unwrap_or(0);
    let mut cols: Vec<Column> = columns
        .iter()
        .map(|(name, values)| {
            let owned: Vec<String> = values.iter().map(|v| v.to_string()).collect();
            Series::new((*name).into(), owned).into()
        })
        .collect();
    cols.push(Series::new("partner_code".into(), vec!["ACME".to_string(); height]).into());
    cols.push(
        Series::new(
            "ingest_ts".into(),
            vec!["2026-08-26T00:00:00Z".to_string(); height],
        )
        .into(),
    );
    DataFrame::new(cols).expect("bronze frame")
}

fn column_values(frame: &DataFrame, name: &str) -> Vec<Option<String>> {
    frame
        .column(name)
        .expect("column")
        .str()
        .expect("string column")
        .iter()
        .map(|cell| cell.map(str::to_string))
        .collect()
}

#[test]
fn maps_normalizes_and_projects_partner_row() {
    // End-to-end scenario from the reference behavior: mapped id, name, and
    // phone columns; all other canonical fields absent.
    let config = partner(&[
        ("ssn", "external_id"),
        ("fname", "first_name"),
        ("mobile", "phone"),
    ]);
    let frame = bronze(&[
        ("ssn", &["007"]),
        ("fname", &["  bob "]),
        ("mobile", &["(555)111-2222"]),
    ]);
    let silver = build_silver_frame(&frame, &config).expect("silver");

    let names: Vec<String> = silver
        .get_column_names()
        .iter()
        .map(|s| s.to_string())
        .collect();
    assert_eq!(names, SILVER_COLUMNS);
    assert_eq!(silver.height(), 1);
    assert_eq!(
        column_values(&silver, "external_id"),
        vec![Some("007".to_string())]
    );
    assert_eq!(
        column_values(&silver, "first_name"),
        vec![Some("Bob".to_string())]
    );
    assert_eq!(
        column_values(&silver, "phone"),
        vec![Some("555-111-2222".to_string())]
    );
    assert_eq!(column_values(&silver, "last_name"), vec![None]);
    assert_eq!(column_values(&silver, "dob"), vec![None]);
    assert_eq!(column_values(&silver, "email"), vec![None]);
    assert_eq!(
        column_values(&silver, "partner_code"),
        vec![Some("ACME".to_string())]
    );
}

#[test]
fn drops_rows_with_blank_external_id() {
    let config = partner(&[("ssn", "external_id")]);
    let frame = bronze(&[("ssn", &["007", "   ", "", "008"])]);
    let silver = build_silver_frame(&frame, &config).expect("silver");
    assert_eq!(silver.height(), 2);
    assert_eq!(
        column_values(&silver, "external_id"),
        vec![Some("007".to_string()), Some("008".to_string())]
    );
}

#[test]
fn bad_dob_and_phone_degrade_to_null_not_dropped() {
    let config = partner(&[
        ("ssn", "external_id"),
        ("birth", "dob"),
        ("mobile", "phone"),
    ]);
    let frame = bronze(&[
        ("ssn", &["007", "008"]),
        ("birth", &["03/04/2020", "never"]),
        ("mobile", &["555-12-34", "5551112222"]),
    ]);
    let silver = build_silver_frame(&frame, &config).expect("silver");
    assert_eq!(silver.height(), 2);
    assert_eq!(
        column_values(&silver, "dob"),
        vec![Some("2020-03-04".to_string()), None]
    );
    assert_eq!(
        column_values(&silver, "phone"),
        vec![None, Some("555-111-2222".to_string())]
    );
}

#[test]
fn schema_is_fixed_regardless_of_input_layout() {
    // Extra unmapped columns and reversed physical order must not leak into
    // or reorder the silver schema.
    let config = partner(&[("member_email", "email"), ("ssn", "external_id")]);
    let frame = bronze(&[
        ("plan_tier", &["gold", "bronze"]),
        ("member_email", &["A@B.COM ", ""]),
        ("ssn", &["1", "2"]),
        ("notes", &["x", "y"]),
    ]);
    let silver = build_silver_frame(&frame, &config).expect("silver");
    let names: Vec<String> = silver
        .get_column_names()
        .iter()
        .map(|s| s.to_string())
        .collect();
    assert_eq!(names, SILVER_COLUMNS);
    assert_eq!(
        column_values(&silver, "email"),
        vec![Some("a@b.com".to_string()), None]
    );
}

#[test]
fn mapping_skips_source_columns_missing_from_file() {
    // The mapping names a "dob" source column the file does not carry.
    let config = partner(&[("ssn", "external_id"), ("birth", "dob")]);
    let frame = bronze(&[("ssn", &["007"])]);
    let silver = build_silver_frame(&frame, &config).expect("silver");
    assert_eq!(silver.height(), 1);
    assert_eq!(column_values(&silver, "dob"), vec![None]);
}

#[test]
fn missing_external_id_column_empties_the_partner() {
    let config = partner(&[("fname", "first_name")]);
    let frame = bronze(&[("fname", &["bob", "alice"])]);
    let silver = build_silver_frame(&frame, &config).expect("silver");
    assert_eq!(silver.height(), 0);
    let names: Vec<String> = silver
        .get_column_names()
        .iter()
        .map(|s| s.to_string())
        .collect();
    assert_eq!(names, SILVER_COLUMNS);
}

#[test]
fn already_canonical_columns_pass_without_mapping() {
    let config = partner(&[]);
    let frame = bronze(&[
        ("external_id", &[" 42 "]),
        ("last_name", &["o'neill"]),
    ]);
    let silver = build_silver_frame(&frame, &config).expect("silver");
    assert_eq!(
        column_values(&silver, "external_id"),
        vec![Some("42".to_string())]
    );
    assert_eq!(
        column_values(&silver, "last_name"),
        vec![Some("O'neill".to_string())]
    );
}

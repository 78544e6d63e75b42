//! Property tests for the pure field normalizers.

use proptest::prelude::*;

use elig_transform::{normalize_dob, normalize_phone, title_case};

proptest! {
    /// A phone normalizes iff exactly ten digits remain after stripping.
    #[test]
    fn phone_formats_iff_ten_digits(raw in "[0-9()\\-. x]{0,20}") {
        let digit_count = raw.chars().filter(|ch| ch.is_ascii_digit()).count();
        match normalize_phone(&raw) {
            Some(formatted) => {
                prop_assert_eq!(digit_count, 10);
                prop_assert_eq!(formatted.len(), 12);
                let digits: String = formatted.chars().filter(|ch| ch.is_ascii_digit()).collect();
                let expected: String = raw.chars().filter(|ch| ch.is_ascii_digit()).collect();
                prop_assert_eq!(digits, expected);
            }
            None => prop_assert_ne!(digit_count, 10),
        }
    }

    /// Title-casing is idempotent, including on characters with multi-scalar
    /// case mappings.
    #[test]
    fn title_case_is_idempotent(raw in "\\PC{0,40}") {
        let once = title_case(&raw);
        prop_assert_eq!(title_case(&once), once.clone());
    }

    /// Every accepted date round-trips to the anchored ISO output shape.
    #[test]
    fn dob_output_is_always_iso(year in 1900i32..2100, month in 1u32..=12, day in 1u32..=28) {
        let iso = format!("{year:04}-{month:02}-{day:02}");
        let us = format!("{month}/{day}/{year}");
        let iso_slash = format!("{year:04}/{month:02}/{day:02}");
        prop_assert_eq!(normalize_dob(&iso), Some(iso.clone()));
        prop_assert_eq!(normalize_dob(&us), Some(iso.clone()));
        prop_assert_eq!(normalize_dob(&iso_slash), Some(iso));
    }
}

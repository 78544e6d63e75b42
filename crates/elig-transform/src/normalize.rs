//! Pure field normalizers.
//!
//! Each function canonicalizes one field's raw textual representation, or
//! returns `None` where the value degrades to an absent field rather than an
//! error. All are deterministic and locale-free.

use chrono::NaiveDate;

/// Normalize a phone number to `DDD-DDD-DDDD`.
///
/// Strips all non-digit characters first; anything other than exactly ten
/// remaining digits yields `None`. No partial formatting.
pub fn normalize_phone(raw: &str) -> Option<String> {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    if digits.len() != 10 {
        return None;
    }
    Some(format!(
        "{}-{}-{}",
        &digits[0..3],
        &digits[3..6],
        &digits[6..10]
    ))
}

/// Normalize a date of birth to ISO 8601 `yyyy-MM-dd`.
///
/// Three input patterns are accepted, tested in priority order so a
/// malformed string can never match more than one:
///
/// 1. `yyyy-MM-dd`
/// 2. `M/d/yyyy` (one- or two-digit month and day)
/// 3. `yyyy/MM/dd`
///
/// Calendar-invalid dates (e.g. `2020-02-31`) and unmatched strings yield
/// `None`.
pub fn normalize_dob(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    let (year, month, day) = parse_iso_dash(trimmed)
        .or_else(|| parse_us_slash(trimmed))
        .or_else(|| parse_iso_slash(trimmed))?;
    let date = NaiveDate::from_ymd_opt(year, month, day)?;
    Some(date.format("%Y-%m-%d").to_string())
}

/// Title-case a name: first letter of each whitespace-delimited word
/// upper-cased, the rest lower-cased. Idempotent.
///
/// Characters whose uppercase form expands to more than one scalar (such as
/// `ß`) are left unchanged at word starts; expanding them would lower-case
/// the tail of the expansion on a second pass.
pub fn title_case(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut at_word_start = true;
    for ch in raw.chars() {
        if ch.is_whitespace() {
            at_word_start = true;
            out.push(ch);
        } else if at_word_start {
            let mut upper = ch.to_uppercase();
            match (upper.next(), upper.next()) {
                (Some(single), None) => out.push(single),
                _ => out.push(ch),
            }
            at_word_start = false;
        } else {
            out.extend(ch.to_lowercase());
        }
    }
    out
}

fn all_digits(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}

/// `^\d{4}-\d{2}-\d{2}$` as year-month-day.
fn parse_iso_dash(value: &str) -> Option<(i32, u32, u32)> {
    let mut parts = value.split('-');
    let (year, month, day) = (parts.next()?, parts.next()?, parts.next()?);
    if parts.next().is_some() {
        return None;
    }
    if year.len() != 4 || month.len() != 2 || day.len() != 2 {
        return None;
    }
    if !(all_digits(year) && all_digits(month) && all_digits(day)) {
        return None;
    }
    Some((year.parse().ok()?, month.parse().ok()?, day.parse().ok()?))
}

/// `^\d{1,2}/\d{1,2}/\d{4}$` as month/day/year.
fn parse_us_slash(value: &str) -> Option<(i32, u32, u32)> {
    let mut parts = value.split('/');
    let (month, day, year) = (parts.next()?, parts.next()?, parts.next()?);
    if parts.next().is_some() {
        return None;
    }
    if month.len() > 2 || day.len() > 2 || year.len() != 4 {
        return None;
    }
    if !(all_digits(month) && all_digits(day) && all_digits(year)) {
        return None;
    }
    Some((year.parse().ok()?, month.parse().ok()?, day.parse().ok()?))
}

/// `^\d{4}/\d{2}/\d{2}$` as year/month/day.
fn parse_iso_slash(value: &str) -> Option<(i32, u32, u32)> {
    let mut parts = value.split('/');
    let (year, month, day) = (parts.next()?, parts.next()?, parts.next()?);
    if parts.next().is_some() {
        return None;
    }
    if year.len() != 4 || month.len() != 2 || day.len() != 2 {
        return None;
    }
    if !(all_digits(year) && all_digits(month) && all_digits(day)) {
        return None;
    }
    Some((year.parse().ok()?, month.parse().ok()?, day.parse().ok()?))
}

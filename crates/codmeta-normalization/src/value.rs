//! Value coercion driven by the normalized key.

use chrono::NaiveDate;

use codmeta_model::{MetaError, MetaValue, Result};

use crate::tables::{AVAILABLE_KEYS, INTEGER_KEYS, MONTH_NAMES};
use crate::text::sanitize;

/// Coerce a sanitized string into its semantic type.
///
/// `key` must already be normalized. Rules apply in strict priority order;
/// the first match wins. Only a malformed date value is an error; every
/// other input coerces or passes through.
pub fn type_value(key: &str, raw: &str) -> Result<MetaValue> {
    let value = sanitize(raw);
    let lower = value.to_lowercase();

    if lower == "true" || lower == "false" {
        return Ok(MetaValue::Bool(lower == "true"));
    }
    if lower.contains("currently not known") {
        return Ok(MetaValue::Null);
    }
    if INTEGER_KEYS.contains(&key) {
        return parse_embedded_int(key, &value);
    }
    if key.starts_with("date_") {
        return parse_month_year(key, &value, &lower);
    }
    if key == "cod_ab_requires_improvement" {
        return Ok(MetaValue::Bool(lower.contains("improvement")));
    }
    if key == "cod_ab_quality_checked" {
        return Ok(MetaValue::Bool(lower.contains("enhanced")));
    }
    if key == "ocha_operational_country" {
        return Ok(MetaValue::Bool(lower.contains("operational")));
    }
    if AVAILABLE_KEYS.contains(&key) {
        // Truthy cast: any non-empty string is true. Exact "true"/"false"
        // text is caught above, but near-misses like "False!" land here and
        // coerce to true.
        return Ok(MetaValue::Bool(!value.is_empty()));
    }
    Ok(MetaValue::Text(value))
}

/// Extract the digit characters of `value` and parse them as an integer.
/// No digits at all means the value is unknown.
fn parse_embedded_int(key: &str, value: &str) -> Result<MetaValue> {
    let digits: String = value.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return Ok(MetaValue::Null);
    }
    let parsed = digits.parse::<i64>().map_err(|_| MetaError::IntegerOverflow {
        key: key.to_string(),
        value: value.to_string(),
    })?;
    Ok(MetaValue::Int(parsed))
}

/// Parse a "<full month name> <4-digit year>" expression into the first day
/// of that month as an ISO 8601 date string. English month names only;
/// abbreviations are malformed.
fn parse_month_year(key: &str, value: &str, lower: &str) -> Result<MetaValue> {
    if lower.contains("unknown") {
        return Ok(MetaValue::Null);
    }
    let malformed = || MetaError::MalformedDate {
        key: key.to_string(),
        value: value.to_string(),
    };
    let (month_token, year_token) = value.split_once(' ').ok_or_else(malformed)?;
    let month = MONTH_NAMES
        .iter()
        .position(|name| month_token.eq_ignore_ascii_case(name))
        .ok_or_else(malformed)? as u32
        + 1;
    if year_token.len() != 4 || !year_token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(malformed());
    }
    let year: i32 = year_token.parse().map_err(|_| malformed())?;
    let date = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(malformed)?;
    Ok(MetaValue::Text(date.format("%Y-%m-%d").to_string()))
}

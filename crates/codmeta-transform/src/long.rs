//! Raw rows → canonical long-form records.

use tracing::debug;

use codmeta_model::{MetaError, MetaRecord, RawRow, Result};
use codmeta_normalization::{is_ignored_key, normalize_key, type_value};

/// Filter, normalize and sort raw rows into the canonical long-form
/// sequence.
///
/// Rows with any missing field and rows whose normalized key is ignored are
/// dropped silently. A level that does not parse as an integer or a
/// malformed date value fails the whole build. The result is stable-sorted
/// by `(location, level, key)`, so duplicates keep input-encounter order.
pub fn build_long(rows: &[RawRow]) -> Result<Vec<MetaRecord>> {
    let mut records = Vec::with_capacity(rows.len());
    for row in rows {
        // The only missingness test in the pipeline: blank cells, NA
        // sentinels and absent values have all collapsed to None upstream.
        let (Some(location), Some(raw_level), Some(raw_key), Some(raw_value)) = (
            row.location.as_deref(),
            row.level.as_deref(),
            row.key.as_deref(),
            row.value.as_deref(),
        ) else {
            continue;
        };

        let level = parse_level(raw_level)?;
        let key = normalize_key(raw_key);
        if is_ignored_key(&key) {
            continue;
        }
        let value = type_value(&key, raw_value)?;
        records.push(MetaRecord::new(location, level, key, value));
    }
    records.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));
    debug!(rows = rows.len(), records = records.len(), "built long form");
    Ok(records)
}

/// Parse an administrative level, tolerating spreadsheet float formatting
/// like `"2.0"`.
fn parse_level(raw: &str) -> Result<i64> {
    let trimmed = raw.trim();
    if let Ok(level) = trimmed.parse::<i64>() {
        return Ok(level);
    }
    // Numeric-typed sheet columns round-trip through CSV as floats.
    if let Ok(level) = trimmed.parse::<f64>() {
        if level.fract() == 0.0 && level.abs() < i64::MAX as f64 {
            return Ok(level as i64);
        }
    }
    Err(MetaError::MalformedLevel(raw.to_string()))
}

//! CSV parsing of the published sheet into raw rows.

use csv::ReaderBuilder;
use tracing::debug;

use codmeta_model::{MetaError, RawRow, Result};

/// Required column headers, as published.
pub const LOCATION_COLUMN: &str = "Location";
pub const LEVEL_COLUMN: &str = "Administrative level";
pub const KEY_COLUMN: &str = "Metadata type";
pub const VALUE_COLUMN: &str = "Metadata";

/// Spreadsheet error sentinel treated as a missing cell.
const NA_SENTINEL: &str = "#REF!";

/// Parse CSV text into raw rows, locating the four required columns by
/// header name. Blank cells and the `#REF!` sentinel become `None`; any
/// other column is ignored. A missing required column is fatal.
pub fn parse_rows(csv_text: &str) -> Result<Vec<RawRow>> {
    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .from_reader(csv_text.as_bytes());
    let headers = reader
        .headers()
        .map_err(|err| MetaError::Csv(err.to_string()))?
        .clone();
    let location_idx = column_index(&headers, LOCATION_COLUMN)?;
    let level_idx = column_index(&headers, LEVEL_COLUMN)?;
    let key_idx = column_index(&headers, KEY_COLUMN)?;
    let value_idx = column_index(&headers, VALUE_COLUMN)?;

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|err| MetaError::Csv(err.to_string()))?;
        rows.push(RawRow {
            location: cell(&record, location_idx),
            level: cell(&record, level_idx),
            key: cell(&record, key_idx),
            value: cell(&record, value_idx),
        });
    }
    debug!(rows = rows.len(), "parsed source sheet");
    Ok(rows)
}

/// Keep only rows whose location matches `iso3`, compared
/// case-insensitively.
pub fn filter_location(rows: Vec<RawRow>, iso3: &str) -> Vec<RawRow> {
    rows.into_iter()
        .filter(|row| {
            row.location
                .as_deref()
                .is_some_and(|location| location.eq_ignore_ascii_case(iso3))
        })
        .collect()
}

fn column_index(headers: &csv::StringRecord, name: &str) -> Result<usize> {
    headers
        .iter()
        .position(|header| header.trim_start_matches('\u{feff}').trim() == name)
        .ok_or_else(|| MetaError::MissingColumn(name.to_string()))
}

fn cell(record: &csv::StringRecord, idx: usize) -> Option<String> {
    match record.get(idx) {
        None => None,
        Some(raw) if raw.is_empty() || raw == NA_SENTINEL => None,
        Some(raw) => Some(raw.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHEET: &str = "\
Location,Administrative level,Metadata type,Metadata,Extra
KEN,-1,COD-EM,true,unused
KEN,1,Note,#REF!,unused
,2,Note,orphan,unused
UGA,0,Feature Count,,unused
";

    #[test]
    fn parses_four_columns_and_na_sentinels() {
        let rows = parse_rows(SHEET).unwrap();
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0].location.as_deref(), Some("KEN"));
        assert_eq!(rows[0].value.as_deref(), Some("true"));
        assert_eq!(rows[1].value, None, "#REF! is a missing cell");
        assert_eq!(rows[2].location, None, "blank cell is missing");
        assert_eq!(rows[3].value, None);
    }

    #[test]
    fn missing_required_column_is_fatal() {
        let err = parse_rows("Location,Metadata type,Metadata\nKEN,Note,x\n").unwrap_err();
        assert!(matches!(err, MetaError::MissingColumn(name) if name == LEVEL_COLUMN));
    }

    #[test]
    fn header_bom_is_tolerated() {
        let sheet = "\u{feff}Location,Administrative level,Metadata type,Metadata\nKEN,-1,Note,x\n";
        let rows = parse_rows(sheet).unwrap();
        assert_eq!(rows[0].location.as_deref(), Some("KEN"));
    }

    #[test]
    fn location_filter_is_case_insensitive() {
        let rows = parse_rows(SHEET).unwrap();
        let filtered = filter_location(rows.clone(), "ken");
        assert_eq!(filtered.len(), 2);
        assert!(filter_location(rows, "zwe").is_empty());
    }
}

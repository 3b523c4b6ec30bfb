//! Flat CSV encoding of the long-form sequence.

use csv::WriterBuilder;

use codmeta_model::{MetaError, MetaRecord, Result};

/// Byte-order mark prefixed so spreadsheet applications detect UTF-8.
const UTF8_BOM: &str = "\u{feff}";

/// Encode long-form records as a CSV table with columns
/// `location,level,key,value`. Null values render as empty cells.
pub fn to_csv(records: &[MetaRecord]) -> Result<String> {
    let mut writer = WriterBuilder::new().from_writer(Vec::new());
    writer
        .write_record(["location", "level", "key", "value"])
        .map_err(|err| MetaError::Encode(err.to_string()))?;
    for record in records {
        writer
            .write_record([
                record.location.as_str(),
                &record.level.to_string(),
                &record.key,
                &record.value.render(),
            ])
            .map_err(|err| MetaError::Encode(err.to_string()))?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|err| MetaError::Encode(err.to_string()))?;
    let body = String::from_utf8(bytes).map_err(|err| MetaError::Encode(err.to_string()))?;
    Ok(format!("{UTF8_BOM}{body}"))
}

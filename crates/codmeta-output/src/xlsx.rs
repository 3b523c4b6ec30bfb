//! XLSX workbook encoding of the wide export.
//!
//! The `dataset` and `level` sheets are pivoted: one row per location (or
//! per location and level) with one column per key. Pivot column order is
//! alphabetical by key and not part of the output contract.

use std::collections::{BTreeMap, BTreeSet};

use rust_xlsxwriter::{Workbook, Worksheet};

use codmeta_model::{MetaError, MetaValue, Result, WideExport};

/// Encode the wide export as an XLSX workbook with `dataset`, `level` and
/// `notes` sheets.
pub fn to_xlsx(wide: &WideExport) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();

    let dataset = workbook.add_worksheet();
    dataset.set_name("dataset").map_err(encode_err)?;
    let mut pivot: BTreeMap<String, BTreeMap<String, MetaValue>> = BTreeMap::new();
    let mut keys: BTreeSet<String> = BTreeSet::new();
    for row in &wide.dataset {
        keys.insert(row.key.clone());
        pivot
            .entry(row.location.clone())
            .or_default()
            .insert(row.key.clone(), row.value.clone());
    }
    write_pivot(dataset, &["location"], pivot, &keys, |location| {
        vec![Cell::Text(location.clone())]
    })?;

    let level = workbook.add_worksheet();
    level.set_name("level").map_err(encode_err)?;
    let mut pivot: BTreeMap<(String, i64), BTreeMap<String, MetaValue>> = BTreeMap::new();
    let mut keys: BTreeSet<String> = BTreeSet::new();
    for row in &wide.level {
        keys.insert(row.key.clone());
        pivot
            .entry((row.location.clone(), row.level))
            .or_default()
            .insert(row.key.clone(), row.value.clone());
    }
    write_pivot(level, &["location", "level"], pivot, &keys, |(location, lvl)| {
        vec![Cell::Text(location.clone()), Cell::Int(*lvl)]
    })?;

    let notes = workbook.add_worksheet();
    notes.set_name("notes").map_err(encode_err)?;
    notes.write_string(0, 0, "location").map_err(encode_err)?;
    notes.write_string(0, 1, "level").map_err(encode_err)?;
    notes.write_string(0, 2, "value").map_err(encode_err)?;
    for (offset, row) in wide.notes.iter().enumerate() {
        let row_idx = offset as u32 + 1;
        notes
            .write_string(row_idx, 0, &row.location)
            .map_err(encode_err)?;
        notes
            .write_number(row_idx, 1, row.level as f64)
            .map_err(encode_err)?;
        write_value(notes, row_idx, 2, &row.value)?;
    }
    notes.autofit();

    workbook.save_to_buffer().map_err(encode_err)
}

enum Cell {
    Text(String),
    Int(i64),
}

/// Write one pivoted sheet: the index columns, then one column per key in
/// alphabetical order.
fn write_pivot<I: Ord>(
    sheet: &mut Worksheet,
    index_headers: &[&str],
    pivot: BTreeMap<I, BTreeMap<String, MetaValue>>,
    keys: &BTreeSet<String>,
    index_cells: impl Fn(&I) -> Vec<Cell>,
) -> Result<()> {
    for (col, header) in index_headers.iter().enumerate() {
        sheet
            .write_string(0, col as u16, *header)
            .map_err(encode_err)?;
    }
    for (offset, key) in keys.iter().enumerate() {
        let col = (index_headers.len() + offset) as u16;
        sheet.write_string(0, col, key).map_err(encode_err)?;
    }
    for (offset, (index, values)) in pivot.iter().enumerate() {
        let row_idx = offset as u32 + 1;
        for (col, cell) in index_cells(index).into_iter().enumerate() {
            match cell {
                Cell::Text(text) => sheet
                    .write_string(row_idx, col as u16, &text)
                    .map_err(encode_err)?,
                Cell::Int(n) => sheet
                    .write_number(row_idx, col as u16, n as f64)
                    .map_err(encode_err)?,
            };
        }
        for (key_offset, key) in keys.iter().enumerate() {
            if let Some(value) = values.get(key) {
                let col = (index_headers.len() + key_offset) as u16;
                write_value(sheet, row_idx, col, value)?;
            }
        }
    }
    sheet.autofit();
    Ok(())
}

fn write_value(sheet: &mut Worksheet, row: u32, col: u16, value: &MetaValue) -> Result<()> {
    match value {
        MetaValue::Null => {}
        MetaValue::Bool(b) => {
            sheet.write_boolean(row, col, *b).map_err(encode_err)?;
        }
        MetaValue::Int(n) => {
            sheet.write_number(row, col, *n as f64).map_err(encode_err)?;
        }
        MetaValue::Text(s) => {
            sheet.write_string(row, col, s).map_err(encode_err)?;
        }
    }
    Ok(())
}

fn encode_err(err: rust_xlsxwriter::XlsxError) -> MetaError {
    MetaError::Encode(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use codmeta_model::{MetaRecord, MetaValue};
    use codmeta_transform::split_wide;

    #[test]
    fn workbook_bytes_look_like_a_zip() {
        let wide = split_wide(&[
            MetaRecord::new("KEN", -1, "cod_em_available", MetaValue::Bool(true)),
            MetaRecord::new("KEN", 0, "feature_count", MetaValue::Int(47)),
            MetaRecord::new("KEN", 1, "notes", MetaValue::from("a note")),
        ]);
        let bytes = to_xlsx(&wide).unwrap();
        // XLSX is a zip container: PK magic.
        assert_eq!(&bytes[..2], b"PK");
    }

    #[test]
    fn empty_export_still_produces_a_workbook() {
        let bytes = to_xlsx(&WideExport::default()).unwrap();
        assert_eq!(&bytes[..2], b"PK");
    }
}

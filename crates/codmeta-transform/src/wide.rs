//! Long-form records → the three pivot-ready groupings.

use codmeta_model::{DatasetRow, LevelRow, MetaRecord, NoteRow, WideExport};

/// Partition long-form records into `dataset`, `level` and `notes` groups.
///
/// Notes win regardless of level; the remainder splits on `level == -1`.
/// Every record lands in exactly one group, in input order.
pub fn split_wide(records: &[MetaRecord]) -> WideExport {
    let mut wide = WideExport::default();
    for record in records {
        if record.key == "notes" {
            wide.notes.push(NoteRow {
                location: record.location.clone(),
                level: record.level,
                value: record.value.clone(),
            });
        } else if record.level != -1 {
            wide.level.push(LevelRow {
                location: record.location.clone(),
                level: record.level,
                key: record.key.clone(),
                value: record.value.clone(),
            });
        } else {
            wide.dataset.push(DatasetRow {
                location: record.location.clone(),
                key: record.key.clone(),
                value: record.value.clone(),
            });
        }
    }
    wide
}

//! Export shapes derived from the canonical long-form sequence.

use indexmap::IndexMap;
use serde::Serialize;

use crate::record::MetaValue;

/// Dataset-wide row (`level == -1`), keyed by location only.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatasetRow {
    pub location: String,
    pub key: String,
    pub value: MetaValue,
}

/// Per-administrative-level row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LevelRow {
    pub location: String,
    pub level: i64,
    pub key: String,
    pub value: MetaValue,
}

/// Free-text note row; notes keep their level but have no key column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NoteRow {
    pub location: String,
    pub level: i64,
    pub value: MetaValue,
}

/// The three pivot-ready groupings for spreadsheet-style output.
///
/// Every long-form record lands in exactly one group: `notes` when its key is
/// `notes` (regardless of level), otherwise `level` or `dataset` by level.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WideExport {
    pub dataset: Vec<DatasetRow>,
    pub level: Vec<LevelRow>,
    pub notes: Vec<NoteRow>,
}

impl WideExport {
    /// Total rows across the three groups.
    pub fn len(&self) -> usize {
        self.dataset.len() + self.level.len() + self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A leaf of the nested export: a scalar, or the ordered values of records
/// that shared one `(location, level, key)`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum NestedValue {
    Scalar(MetaValue),
    Many(Vec<MetaValue>),
}

impl NestedValue {
    /// Merge another value in, turning a scalar into a two-element list on
    /// the first duplicate and appending thereafter.
    pub fn push(&mut self, value: MetaValue) {
        match self {
            NestedValue::Scalar(existing) => {
                *self = NestedValue::Many(vec![existing.clone(), value]);
            }
            NestedValue::Many(values) => values.push(value),
        }
    }
}

/// Key → value mapping for one administrative tier of one location.
pub type TierMeta = IndexMap<String, NestedValue>;

/// Tier label (`"all"` or `"adm{level}"`) → tier mapping for one location.
pub type LocationMeta = IndexMap<String, TierMeta>;

/// Lowercased location code → location mapping; insertion-ordered at every
/// tier so tree-shaped encodings (JSON/YAML/XML) follow long-form order.
pub type NestedExport = IndexMap<String, LocationMeta>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_value_merges_in_order() {
        let mut value = NestedValue::Scalar(MetaValue::from("A"));
        value.push(MetaValue::from("B"));
        assert_eq!(
            value,
            NestedValue::Many(vec![MetaValue::from("A"), MetaValue::from("B")])
        );
        value.push(MetaValue::from("C"));
        assert_eq!(
            serde_json::to_value(&value).unwrap(),
            serde_json::json!(["A", "B", "C"])
        );
    }

    #[test]
    fn nested_value_scalar_serializes_bare() {
        let value = NestedValue::Scalar(MetaValue::Int(3));
        assert_eq!(serde_json::to_string(&value).unwrap(), "3");
    }
}

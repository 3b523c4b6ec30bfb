//! Canonical record types produced by the normalization pipeline.

use serde::{Deserialize, Serialize};

/// One row as read from the source sheet, before any normalization.
///
/// `None` uniformly stands for every spreadsheet-native missing marker:
/// absent cell, blank cell, and the explicit `#REF!` sentinel. Rows with any
/// missing field are dropped by the long-form builder.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRow {
    pub location: Option<String>,
    pub level: Option<String>,
    pub key: Option<String>,
    pub value: Option<String>,
}

/// A typed metadata value.
///
/// Serializes untagged: `Null` becomes JSON/YAML null (an empty CSV cell),
/// the others their scalar form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetaValue {
    Null,
    Bool(bool),
    Int(i64),
    Text(String),
}

impl MetaValue {
    pub fn is_null(&self) -> bool {
        matches!(self, MetaValue::Null)
    }

    /// Scalar text form used by the XML encoder. `Null` renders empty.
    pub fn render(&self) -> String {
        match self {
            MetaValue::Null => String::new(),
            MetaValue::Bool(b) => b.to_string(),
            MetaValue::Int(n) => n.to_string(),
            MetaValue::Text(s) => s.clone(),
        }
    }
}

impl From<&str> for MetaValue {
    fn from(s: &str) -> Self {
        MetaValue::Text(s.to_string())
    }
}

/// One canonical long-form record: `(location, level, key, value)`.
///
/// `location`, `level` and `key` are always present; `level == -1` means the
/// value applies to the whole dataset rather than one administrative tier.
/// Several records may share the same `(location, level, key)`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetaRecord {
    pub location: String,
    pub level: i64,
    pub key: String,
    pub value: MetaValue,
}

impl MetaRecord {
    pub fn new(
        location: impl Into<String>,
        level: i64,
        key: impl Into<String>,
        value: MetaValue,
    ) -> Self {
        Self {
            location: location.into(),
            level,
            key: key.into(),
            value,
        }
    }

    /// Ordering key of the long-form contract.
    pub fn sort_key(&self) -> (&str, i64, &str) {
        (&self.location, self.level, &self.key)
    }
}

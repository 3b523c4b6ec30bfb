//! Long-form records → location/level/key tree.

use codmeta_model::{LocationMeta, MetaRecord, NestedExport, NestedValue};

/// Accumulates records into the nested mapping. Lives for one
/// [`build_nested`] call only.
#[derive(Debug, Default)]
struct NestedBuilder {
    tree: NestedExport,
}

impl NestedBuilder {
    fn fold(&mut self, record: &MetaRecord) {
        let location = record.location.to_lowercase();
        let tier = tier_label(record.level);
        let keys = self
            .tree
            .entry(location)
            .or_default()
            .entry(tier)
            .or_default();
        match keys.get_mut(&record.key) {
            Some(existing) => existing.push(record.value.clone()),
            None => {
                keys.insert(record.key.clone(), NestedValue::Scalar(record.value.clone()));
            }
        }
    }
}

/// Label for one administrative tier: `"all"` for dataset-wide, else
/// `"adm{level}"`.
fn tier_label(level: i64) -> String {
    if level == -1 {
        "all".to_string()
    } else {
        format!("adm{level}")
    }
}

/// Fold long-form records into the hierarchical mapping.
///
/// Values stay scalar until a second record arrives for the same
/// `(location, level, key)`, at which point they become an ordered list in
/// encounter order. Insertion order is preserved at every tier.
pub fn build_nested(records: &[MetaRecord]) -> NestedExport {
    let mut builder = NestedBuilder::default();
    for record in records {
        builder.fold(record);
    }
    builder.tree
}

/// Build the nested mapping for a single location, compared
/// case-insensitively. An unknown location yields an empty mapping.
pub fn build_nested_for(records: &[MetaRecord], location: &str) -> LocationMeta {
    let wanted = location.to_lowercase();
    build_nested(records).shift_remove(&wanted).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use codmeta_model::{MetaValue, NestedValue};

    fn record(location: &str, level: i64, key: &str, value: &str) -> MetaRecord {
        MetaRecord::new(location, level, key, MetaValue::from(value))
    }

    #[test]
    fn nests_by_location_tier_and_key() {
        let records = vec![
            record("KEN", -1, "cod_em_available", "x"),
            record("KEN", 2, "notes", "deep note"),
        ];
        let tree = build_nested(&records);
        assert_eq!(
            serde_json::to_value(&tree).unwrap(),
            serde_json::json!({
                "ken": {
                    "all": {"cod_em_available": "x"},
                    "adm2": {"notes": "deep note"},
                }
            })
        );
    }

    #[test]
    fn duplicate_keys_become_ordered_lists() {
        let records = vec![
            record("KEN", 1, "notes", "A"),
            record("KEN", 1, "notes", "B"),
            record("KEN", 1, "notes", "C"),
        ];
        let tree = build_nested(&records);
        assert_eq!(
            tree["ken"]["adm1"]["notes"],
            NestedValue::Many(vec![
                MetaValue::from("A"),
                MetaValue::from("B"),
                MetaValue::from("C"),
            ])
        );
    }

    #[test]
    fn filter_is_case_insensitive() {
        let records = vec![record("KEN", -1, "notes", "n")];
        let meta = build_nested_for(&records, "ken");
        assert!(meta.contains_key("all"));
        let meta = build_nested_for(&records, "KeN");
        assert!(meta.contains_key("all"));
    }

    #[test]
    fn unknown_location_yields_empty_mapping() {
        let records = vec![record("KEN", -1, "notes", "n")];
        assert!(build_nested_for(&records, "ZWE").is_empty());
    }

    #[test]
    fn tier_labels() {
        assert_eq!(tier_label(-1), "all");
        assert_eq!(tier_label(0), "adm0");
        assert_eq!(tier_label(3), "adm3");
    }
}

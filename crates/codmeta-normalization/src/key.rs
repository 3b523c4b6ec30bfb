//! Column label canonicalization.

use crate::tables::{IGNORED_KEYS, RENAMED_KEYS};

/// Normalize a raw column-style label into a stable machine key.
///
/// Lowercases, turns spaces and hyphens into underscores, then applies the
/// fixed rename table. Idempotent: an already-canonical key comes back
/// unchanged.
pub fn normalize_key(raw: &str) -> String {
    let normalized = raw.to_lowercase().replace([' ', '-'], "_");
    for (legacy, canonical) in RENAMED_KEYS {
        if normalized == legacy {
            return canonical.to_string();
        }
    }
    normalized
}

/// True when a normalized key belongs to the ignored-columns set.
pub fn is_ignored_key(key: &str) -> bool {
    IGNORED_KEYS.contains(&key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_replaces_separators() {
        assert_eq!(normalize_key("Metadata Type"), "metadata_type");
        assert_eq!(normalize_key("COD-EM"), "cod_em_available");
        assert_eq!(normalize_key("Feature Count"), "feature_count");
    }

    #[test]
    fn rename_table_applies_after_normalization() {
        assert_eq!(normalize_key("Note"), "notes");
        assert_eq!(normalize_key("Deepest Level"), "level_deepest");
        assert_eq!(normalize_key("OCHA Country Status"), "ocha_operational_country");
        assert_eq!(normalize_key("Boundaries established"), "date_established");
    }

    #[test]
    fn canonical_keys_pass_through() {
        assert_eq!(normalize_key("notes"), "notes");
        assert_eq!(normalize_key("cod_ab_quality_checked"), "cod_ab_quality_checked");
    }

    #[test]
    fn ignored_set_matches_normalized_keys() {
        assert!(is_ignored_key(&normalize_key("Header")));
        assert!(is_ignored_key(&normalize_key("Live FeatureServer")));
        assert!(!is_ignored_key("notes"));
    }
}

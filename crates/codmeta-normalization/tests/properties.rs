//! Property tests for the normalizer invariants.

use codmeta_normalization::{normalize_key, sanitize};
use proptest::prelude::*;

proptest! {
    #[test]
    fn normalize_key_is_idempotent(raw in "\\PC{0,40}") {
        let once = normalize_key(&raw);
        prop_assert_eq!(normalize_key(&once), once);
    }

    #[test]
    fn sanitize_is_idempotent(raw in "\\PC{0,60}") {
        let once = sanitize(&raw);
        prop_assert_eq!(sanitize(&once), once.clone());
    }

    #[test]
    fn sanitize_never_lengthens(raw in "\\PC{0,60}") {
        prop_assert!(sanitize(&raw).chars().count() <= raw.chars().count());
    }

    #[test]
    fn normalized_keys_have_no_separators(raw in "\\PC{0,40}") {
        let key = normalize_key(&raw);
        prop_assert!(!key.contains(' '));
        prop_assert!(!key.contains('-'));
    }
}

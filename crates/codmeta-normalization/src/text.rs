//! Free-text sanitization.

use crate::tables::{APOSTROPHE_CHARS, INVISIBLE_CHARS, QUOTE_CHARS};

/// Repair typographic noise in a free-text value.
///
/// Smart apostrophes and curly quotes become their ASCII forms, invisible
/// and formatting code points are deleted, runs of spaces collapse to one,
/// and the result is trimmed. Must run before any coercion that inspects
/// substrings. Total and idempotent; never lengthens the string.
pub fn sanitize(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        if APOSTROPHE_CHARS.contains(&ch) {
            out.push('\'');
        } else if QUOTE_CHARS.contains(&ch) {
            out.push('"');
        } else if INVISIBLE_CHARS.contains(&ch) {
            continue;
        } else if ch == ' ' && out.ends_with(' ') {
            continue;
        } else {
            out.push(ch);
        }
    }
    out.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replaces_smart_punctuation() {
        assert_eq!(sanitize("Spanish \u{2019}data\u{2019}"), "Spanish 'data'");
        assert_eq!(sanitize("\u{201C}quoted\u{201D}"), "\"quoted\"");
        assert_eq!(sanitize("it\u{0060}s 5\u{2032}"), "it's 5'");
    }

    #[test]
    fn deletes_invisible_characters() {
        assert_eq!(sanitize("a\u{FEFF}b\u{200C}c"), "abc");
        assert_eq!(sanitize("line\u{000A}feed\u{000D}"), "linefeed");
        assert_eq!(sanitize("non\u{00A0}breaking"), "nonbreaking");
    }

    #[test]
    fn collapses_spaces_and_trims() {
        assert_eq!(sanitize("  a   b  "), "a b");
        assert_eq!(sanitize("a b"), "a b");
        assert_eq!(sanitize("   "), "");
    }

    #[test]
    fn deletion_can_merge_space_runs_across_passes() {
        // A tab between spaces disappears first, leaving a run to collapse.
        assert_eq!(sanitize("a \u{0009} b"), "a b");
    }
}

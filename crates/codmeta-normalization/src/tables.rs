//! Fixed lookup tables driving normalization.
//!
//! These mirror the curation conventions of the source sheet: legacy column
//! labels that were renamed over time, columns that never reach the export,
//! columns whose values are integers, and the typographic noise the sheet's
//! editors introduce.

/// Legacy label → canonical key, applied after case/separator normalization.
pub(crate) const RENAMED_KEYS: [(&str, &str); 12] = [
    ("boundaries_established", "date_established"),
    ("cod_ab_quality_level", "cod_ab_quality_checked"),
    ("cod_ab_review_conclusion", "cod_ab_requires_improvement"),
    ("cod_ab_review_date", "date_reviewed"),
    ("cod_em", "cod_em_available"),
    ("cod_ps_compatibility", "cod_ps_match"),
    ("cod_ps", "cod_ps_available"),
    ("deepest_complete", "level_complete"),
    ("deepest_level", "level_deepest"),
    ("ideal_depth", "level_ideal"),
    ("note", "notes"),
    ("ocha_country_status", "ocha_operational_country"),
];

/// Keys dropped from the pipeline entirely, compared after normalization.
pub(crate) const IGNORED_KEYS: [&str; 5] = [
    "header",
    "live_featureserver",
    "live_mapserver",
    "live_lines_featureserver",
    "live_lines_mapserver",
];

/// Keys whose values are integers embedded in free text.
pub(crate) const INTEGER_KEYS: [&str; 4] = [
    "level_ideal",
    "level_complete",
    "feature_count",
    "level_deepest",
];

/// Full English month names, the only form date values may use.
pub(crate) const MONTH_NAMES: [&str; 12] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

/// Keys coerced with a truthy cast (non-empty string means true).
pub(crate) const AVAILABLE_KEYS: [&str; 2] = ["cod_em_available", "cod_ps_available"];

/// Grave accent, right single quote, prime.
pub(crate) const APOSTROPHE_CHARS: [char; 3] = ['\u{0060}', '\u{2019}', '\u{2032}'];

/// Left and right curly double quotes.
pub(crate) const QUOTE_CHARS: [char; 2] = ['\u{201C}', '\u{201D}'];

/// Tab, line feed, carriage return, non-breaking space, zero-width
/// non-joiner, left/right-to-left marks, byte-order mark.
pub(crate) const INVISIBLE_CHARS: [char; 8] = [
    '\u{0009}',
    '\u{000A}',
    '\u{000D}',
    '\u{00A0}',
    '\u{200C}',
    '\u{200E}',
    '\u{200F}',
    '\u{FEFF}',
];

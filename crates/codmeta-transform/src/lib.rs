//! Projections of COD metadata: canonical long form and its wide and nested
//! reshapes.
//!
//! [`build_long`] is the entry point; its sorted output feeds either
//! [`split_wide`] (spreadsheet-style export) or [`build_nested`] /
//! [`build_nested_for`] (tree-structured export), or is consumed directly as
//! a flat table.

pub mod long;
pub mod nested;
pub mod wide;

pub use long::build_long;
pub use nested::{build_nested, build_nested_for};
pub use wide::split_wide;

//! Encoders for the three canonical shapes.
//!
//! - long form → flat CSV ([`to_csv`])
//! - nested export → XML ([`to_xml`]) and YAML ([`to_yaml`])
//! - wide export → pivoted XLSX workbook ([`to_xlsx`])
//!
//! JSON needs no encoder here; the nested export serializes directly.

mod flat;
mod tree;
mod xlsx;

pub use flat::to_csv;
pub use tree::{to_xml, to_yaml};
pub use xlsx::to_xlsx;

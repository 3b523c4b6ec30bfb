//! Normalization primitives for COD metadata.
//!
//! Three total functions over raw sheet text: [`normalize_key`] canonicalizes
//! column labels, [`sanitize`] repairs typographic noise, and [`type_value`]
//! coerces a value into its semantic type based on the normalized key.

pub mod key;
mod tables;
pub mod text;
pub mod value;

pub use key::{is_ignored_key, normalize_key};
pub use text::sanitize;
pub use value::type_value;

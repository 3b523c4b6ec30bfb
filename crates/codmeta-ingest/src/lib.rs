//! Raw row ingestion: fetching the published sheet and parsing it into
//! [`codmeta_model::RawRow`] values.

pub mod config;
pub mod sheet;
pub mod source;

pub use config::SourceConfig;
pub use sheet::{filter_location, parse_rows};
pub use source::{RowSource, SheetSource, StaticSource};

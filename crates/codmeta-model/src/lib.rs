//! Data model for the COD metadata service.
//!
//! Defines the raw input row, the typed canonical record, the wide and
//! nested export shapes, and the pipeline error type. All values are
//! per-request and immutable; nothing here persists state.

pub mod error;
pub mod export;
pub mod record;

pub use error::{MetaError, Result};
pub use export::{DatasetRow, LevelRow, LocationMeta, NestedExport, NestedValue, NoteRow, TierMeta, WideExport};
pub use record::{MetaRecord, MetaValue, RawRow};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MetaError {
    #[error("administrative level is not an integer: {0:?}")]
    MalformedLevel(String),
    #[error("unrecognized date for {key}: {value:?} (expected e.g. \"January 2020\")")]
    MalformedDate { key: String, value: String },
    #[error("integer value for {key} out of range: {value:?}")]
    IntegerOverflow { key: String, value: String },
    #[error("source sheet is missing required column {0:?}")]
    MissingColumn(String),
    #[error("config error: {0}")]
    Config(String),
    #[error("failed to fetch source sheet: {0}")]
    Fetch(String),
    #[error("csv error: {0}")]
    Csv(String),
    #[error("encode error: {0}")]
    Encode(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, MetaError>;

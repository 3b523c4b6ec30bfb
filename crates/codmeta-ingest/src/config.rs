//! Source sheet configuration.

use std::env;

use reqwest::Url;

use codmeta_model::{MetaError, Result};

/// Environment variable naming the Google Sheets workbook id.
pub const WORKBOOK_ENV: &str = "COD_META_WORKBOOK";
/// Environment variable naming the sheet (tab) within the workbook.
pub const SHEET_ENV: &str = "COD_META_SHEET";

/// Where the raw metadata sheet lives.
#[derive(Debug, Clone)]
pub struct SourceConfig {
    pub workbook: String,
    pub sheet: String,
}

impl SourceConfig {
    /// Read the source location from the environment. The workbook id is
    /// required; the sheet name defaults to the workbook's first tab.
    pub fn from_env() -> Result<Self> {
        let workbook = env::var(WORKBOOK_ENV)
            .map_err(|_| MetaError::Config(format!("{WORKBOOK_ENV} is not set")))?;
        let sheet = env::var(SHEET_ENV).unwrap_or_default();
        Ok(Self { workbook, sheet })
    }

    /// The workbook's CSV export URL, with the sheet name percent-encoded
    /// into the query string.
    pub fn csv_url(&self) -> Result<Url> {
        let base = format!(
            "https://docs.google.com/spreadsheets/d/{}/gviz/tq",
            self.workbook
        );
        let mut url =
            Url::parse(&base).map_err(|err| MetaError::Config(err.to_string()))?;
        url.query_pairs_mut()
            .append_pair("tqx", "out:csv")
            .append_pair("sheet", &self.sheet);
        Ok(url)
    }
}

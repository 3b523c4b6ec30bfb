//! The raw-row source seam.

use async_trait::async_trait;
use tracing::info;

use codmeta_model::{MetaError, RawRow, Result};

use crate::config::SourceConfig;
use crate::sheet::parse_rows;

/// Supplies the raw rows of one pipeline invocation. Implemented over HTTP
/// for production and in memory for tests.
#[async_trait]
pub trait RowSource: Send + Sync {
    async fn rows(&self) -> Result<Vec<RawRow>>;
}

/// Fetches and parses the published Google Sheets CSV export. One fetch per
/// request; nothing is cached.
#[derive(Debug, Clone)]
pub struct SheetSource {
    client: reqwest::Client,
    config: SourceConfig,
}

impl SheetSource {
    pub fn new(client: reqwest::Client, config: SourceConfig) -> Self {
        Self { client, config }
    }
}

#[async_trait]
impl RowSource for SheetSource {
    async fn rows(&self) -> Result<Vec<RawRow>> {
        let url = self.config.csv_url()?;
        info!(%url, "fetching source sheet");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|err| MetaError::Fetch(err.to_string()))?
            .error_for_status()
            .map_err(|err| MetaError::Fetch(err.to_string()))?;
        let body = response
            .text()
            .await
            .map_err(|err| MetaError::Fetch(err.to_string()))?;
        parse_rows(&body)
    }
}

/// Fixed rows, for tests and offline runs.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    rows: Vec<RawRow>,
}

impl StaticSource {
    pub fn new(rows: Vec<RawRow>) -> Self {
        Self { rows }
    }
}

#[async_trait]
impl RowSource for StaticSource {
    async fn rows(&self) -> Result<Vec<RawRow>> {
        Ok(self.rows.clone())
    }
}

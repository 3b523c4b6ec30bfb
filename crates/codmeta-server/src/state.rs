//! Shared request state.

use std::sync::Arc;

use codmeta_ingest::{RowSource, SheetSource, SourceConfig};

/// Handler state: the row source for this process. Sources are stateless, so
/// concurrent requests share one without coordination.
#[derive(Clone)]
pub struct AppState {
    pub source: Arc<dyn RowSource>,
}

impl AppState {
    pub fn new(source: Arc<dyn RowSource>) -> Self {
        Self { source }
    }

    /// Production state: fetch the configured sheet over HTTP per request.
    pub fn from_config(config: SourceConfig) -> Self {
        Self::new(Arc::new(SheetSource::new(reqwest::Client::new(), config)))
    }
}

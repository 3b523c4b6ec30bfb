//! Pipeline error → HTTP response mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::error;

use codmeta_model::MetaError;

/// Wrapper so pipeline errors can be returned straight from handlers.
/// Every fatal pipeline error is a server error; there is no partial
/// success.
#[derive(Debug)]
pub struct ApiError(pub MetaError);

impl From<MetaError> for ApiError {
    fn from(err: MetaError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        error!(error = %self.0, "pipeline failed");
        (StatusCode::INTERNAL_SERVER_ERROR, self.0.to_string()).into_response()
    }
}

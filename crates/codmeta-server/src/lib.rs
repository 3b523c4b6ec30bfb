//! HTTP layer for the COD metadata service.
//!
//! Thin wiring over the pipeline crates: one route per export format plus a
//! liveness endpoint. Fatal pipeline errors become 500 responses.

mod error;
mod routes;
mod state;

use std::net::SocketAddr;

use tracing::info;

use codmeta_model::Result;

pub use error::ApiError;
pub use routes::router;
pub use state::AppState;

/// Bind and serve until the process is stopped.
pub async fn serve(state: AppState, addr: SocketAddr) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "serving COD metadata");
    axum::serve(listener, router(state)).await?;
    Ok(())
}

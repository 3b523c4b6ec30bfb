//! Per-format endpoints.
//!
//! Every format comes in an all-locations and a one-location flavor; the
//! location parameter is compared case-insensitively. Each request fetches
//! the sheet afresh, runs the pipeline, and encodes one projection.

use axum::Router;
use axum::extract::{Path, State};
use axum::http::header::CONTENT_TYPE;
use axum::response::{IntoResponse, Json, Response};
use axum::routing::get;
use serde_json::json;
use tower_http::trace::TraceLayer;

use codmeta_ingest::filter_location;
use codmeta_model::MetaRecord;
use codmeta_output::{to_csv, to_xlsx, to_xml, to_yaml};
use codmeta_transform::{build_long, build_nested, build_nested_for, split_wide};

use crate::error::ApiError;
use crate::state::AppState;

const XLSX_MIME: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Build the service router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/csv", get(csv_all))
        .route("/csv/:iso3", get(csv_for))
        .route("/json", get(json_all))
        .route("/json/:iso3", get(json_for))
        .route("/xml", get(xml_all))
        .route("/xml/:iso3", get(xml_for))
        .route("/yaml", get(yaml_all))
        .route("/yaml/:iso3", get(yaml_for))
        .route("/xlsx", get(xlsx_all))
        .route("/xlsx/:iso3", get(xlsx_for))
        .route("/healthz", get(healthz))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Fetch, optionally filter by location, and build the long form.
async fn long_form(state: &AppState, iso3: Option<&str>) -> Result<Vec<MetaRecord>, ApiError> {
    let rows = state.source.rows().await?;
    let rows = match iso3 {
        Some(code) if !code.is_empty() => filter_location(rows, code),
        _ => rows,
    };
    Ok(build_long(&rows)?)
}

async fn csv_all(State(state): State<AppState>) -> Result<Response, ApiError> {
    csv_response(&state, None).await
}

async fn csv_for(
    State(state): State<AppState>,
    Path(iso3): Path<String>,
) -> Result<Response, ApiError> {
    csv_response(&state, Some(&iso3)).await
}

async fn csv_response(state: &AppState, iso3: Option<&str>) -> Result<Response, ApiError> {
    let records = long_form(state, iso3).await?;
    let body = to_csv(&records)?;
    Ok(([(CONTENT_TYPE, "text/plain; charset=utf-8")], body).into_response())
}

async fn json_all(State(state): State<AppState>) -> Result<Response, ApiError> {
    let records = long_form(&state, None).await?;
    Ok(Json(build_nested(&records)).into_response())
}

async fn json_for(
    State(state): State<AppState>,
    Path(iso3): Path<String>,
) -> Result<Response, ApiError> {
    let records = long_form(&state, Some(&iso3)).await?;
    Ok(Json(build_nested_for(&records, &iso3)).into_response())
}

async fn xml_all(State(state): State<AppState>) -> Result<Response, ApiError> {
    let records = long_form(&state, None).await?;
    xml_response(to_xml(&build_nested(&records))?)
}

async fn xml_for(
    State(state): State<AppState>,
    Path(iso3): Path<String>,
) -> Result<Response, ApiError> {
    let records = long_form(&state, Some(&iso3)).await?;
    xml_response(to_xml(&build_nested_for(&records, &iso3))?)
}

fn xml_response(body: String) -> Result<Response, ApiError> {
    Ok(([(CONTENT_TYPE, "application/xml")], body).into_response())
}

async fn yaml_all(State(state): State<AppState>) -> Result<Response, ApiError> {
    let records = long_form(&state, None).await?;
    yaml_response(to_yaml(&build_nested(&records))?)
}

async fn yaml_for(
    State(state): State<AppState>,
    Path(iso3): Path<String>,
) -> Result<Response, ApiError> {
    let records = long_form(&state, Some(&iso3)).await?;
    yaml_response(to_yaml(&build_nested_for(&records, &iso3))?)
}

fn yaml_response(body: String) -> Result<Response, ApiError> {
    Ok(([(CONTENT_TYPE, "text/plain; charset=utf-8")], body).into_response())
}

async fn xlsx_all(State(state): State<AppState>) -> Result<Response, ApiError> {
    xlsx_response(&state, None).await
}

async fn xlsx_for(
    State(state): State<AppState>,
    Path(iso3): Path<String>,
) -> Result<Response, ApiError> {
    xlsx_response(&state, Some(&iso3)).await
}

async fn xlsx_response(state: &AppState, iso3: Option<&str>) -> Result<Response, ApiError> {
    let records = long_form(state, iso3).await?;
    let bytes = to_xlsx(&split_wide(&records))?;
    Ok(([(CONTENT_TYPE, XLSX_MIME)], bytes).into_response())
}

/// Liveness check.
async fn healthz() -> Json<serde_json::Value> {
    Json(json!({"ping": "pong"}))
}

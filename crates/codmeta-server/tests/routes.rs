//! Router tests over an in-memory row source.

use std::sync::Arc;

use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header::CONTENT_TYPE};
use tower::ServiceExt;

use codmeta_ingest::StaticSource;
use codmeta_model::RawRow;
use codmeta_server::{AppState, router};

fn raw(location: &str, level: &str, key: &str, value: &str) -> RawRow {
    RawRow {
        location: Some(location.into()),
        level: Some(level.into()),
        key: Some(key.into()),
        value: Some(value.into()),
    }
}

fn app(rows: Vec<RawRow>) -> axum::Router {
    router(AppState::new(Arc::new(StaticSource::new(rows))))
}

fn sample_rows() -> Vec<RawRow> {
    vec![
        raw("KEN", "-1", "COD-EM", "true"),
        raw("KEN", "1", "note", "first"),
        raw("KEN", "1", "note", "second"),
        raw("UGA", "0", "Feature Count", "12 units"),
    ]
}

async fn get(app: axum::Router, uri: &str) -> (StatusCode, Option<String>, Vec<u8>) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .map(|v| v.to_str().unwrap().to_string());
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, content_type, body.to_vec())
}

#[tokio::test]
async fn healthz_answers() {
    let (status, _, body) = get(app(vec![]), "/healthz").await;
    assert_eq!(status, StatusCode::OK);
    let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(value, serde_json::json!({"ping": "pong"}));
}

#[tokio::test]
async fn json_nests_all_locations() {
    let (status, content_type, body) = get(app(sample_rows()), "/json").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some("application/json"));
    let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "ken": {
                "all": {"cod_em_available": true},
                "adm1": {"notes": ["first", "second"]},
            },
            "uga": {
                "adm0": {"feature_count": 12},
            },
        })
    );
}

#[tokio::test]
async fn json_location_filter_is_case_insensitive() {
    let (status, _, body) = get(app(sample_rows()), "/json/ken").await;
    assert_eq!(status, StatusCode::OK);
    let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "all": {"cod_em_available": true},
            "adm1": {"notes": ["first", "second"]},
        })
    );
}

#[tokio::test]
async fn unknown_location_yields_empty_not_error() {
    let (status, _, body) = get(app(sample_rows()), "/json/ZWE").await;
    assert_eq!(status, StatusCode::OK);
    let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(value, serde_json::json!({}));
}

#[tokio::test]
async fn csv_is_flat_and_bom_prefixed() {
    let (status, content_type, body) = get(app(sample_rows()), "/csv").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some("text/plain; charset=utf-8"));
    let text = String::from_utf8(body).unwrap();
    assert!(text.starts_with("\u{feff}location,level,key,value\n"));
    assert!(text.contains("KEN,-1,cod_em_available,true\n"));
}

#[tokio::test]
async fn yaml_of_unknown_location_is_empty_body() {
    let (status, _, body) = get(app(sample_rows()), "/yaml/ZWE").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.is_empty());
}

#[tokio::test]
async fn xml_wraps_root_element() {
    let (status, content_type, body) = get(app(sample_rows()), "/xml/KEN").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some("application/xml"));
    let text = String::from_utf8(body).unwrap();
    assert!(text.starts_with("<root>"));
    assert!(text.contains("<notes>first</notes>"));
}

#[tokio::test]
async fn xlsx_has_spreadsheet_mime() {
    let (status, content_type, body) = get(app(sample_rows()), "/xlsx").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        content_type.as_deref(),
        Some("application/vnd.openxmlformats-officedocument.spreadsheetml.sheet")
    );
    assert_eq!(&body[..2], b"PK");
}

#[tokio::test]
async fn malformed_data_fails_the_whole_request() {
    let rows = vec![
        raw("KEN", "-1", "Boundaries established", "garbage"),
        raw("KEN", "1", "note", "fine"),
    ];
    let (status, _, body) = get(app(rows), "/csv").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let text = String::from_utf8(body).unwrap();
    assert!(text.contains("date_established"));
}

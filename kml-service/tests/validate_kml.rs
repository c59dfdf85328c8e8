//! Tests for the validate-only endpoint, driving the router directly
//! with `tower::ServiceExt::oneshot` (no network, no provider calls).

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use kml_service::config::{GoogleConfig, KmlConfig, ModelConfig};
use kml_service::services::providers::mock::MockTextProvider;
use kml_service::services::KmlGenerator;
use kml_service::startup::{router, AppState};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

const VALID_KML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<kml xmlns="http://www.opengis.net/kml/2.2">
<Document>
  <Placemark>
    <name>Tokyo</name>
    <Point><coordinates>139.6503,35.6762,0</coordinates></Point>
  </Placemark>
</Document>
</kml>"#;

fn test_app() -> axum::Router {
    let config = KmlConfig {
        common: service_core::config::Config {
            port: 0,
            log_level: "info".to_string(),
        },
        google: GoogleConfig {
            api_key: "test-api-key".to_string(),
        },
        models: ModelConfig {
            text_model: "gemini-2.0-flash".to_string(),
        },
    };
    let generator = KmlGenerator::new(Arc::new(MockTextProvider::new(|_| {
        panic!("validate-kml must not call the provider")
    })));

    router(AppState { config, generator })
}

async fn post_validate(body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri("/validate-kml")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("Failed to build request");

    let response = test_app()
        .oneshot(request)
        .await
        .expect("Failed to call router");

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    let body: Value = serde_json::from_slice(&bytes).expect("Failed to parse JSON");

    (status, body)
}

#[tokio::test]
async fn reports_valid_document() {
    let (status, body) = post_validate(json!({ "kml": VALID_KML })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["valid"], true);
    assert_eq!(body["length"], VALID_KML.chars().count());
}

#[tokio::test]
async fn reports_invalid_document_without_rejecting() {
    let (status, body) = post_validate(json!({ "kml": "<html>nope</html>" })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["valid"], false);
}

#[tokio::test]
async fn reports_length_of_trimmed_text() {
    let padded = format!("\n  {}\n\n", VALID_KML);
    let (status, body) = post_validate(json!({ "kml": padded })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["valid"], true);
    assert_eq!(body["length"], VALID_KML.chars().count());
}

#[tokio::test]
async fn requires_kml_field() {
    let (status, body) = post_validate(json!({ "query": "wrong field" })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "kml parameter is required");
}

#[tokio::test]
async fn empty_document_is_invalid() {
    let (status, body) = post_validate(json!({ "kml": "" })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["valid"], false);
    assert_eq!(body["length"], 0);
}

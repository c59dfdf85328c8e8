//! Integration tests for service plumbing: health endpoint and the 404
//! fallback. These spawn the real application (Gemini provider configured
//! with a dummy key, never called) on a random port.

use kml_service::config::KmlConfig;
use kml_service::startup::Application;
use reqwest::Client;
use std::time::Duration;

/// Spawn the application on a random port and return the port number.
async fn spawn_app() -> u16 {
    std::env::set_var("ENVIRONMENT", "test");
    std::env::set_var("APP__PORT", "0"); // Random port
    std::env::set_var("GOOGLE_API_KEY", "test-api-key");
    std::env::set_var("GENAI_TEXT_MODEL", "gemini-2.0-flash");

    let config = KmlConfig::load().expect("Failed to load config");
    let app = Application::build(config)
        .await
        .expect("Failed to build application");

    let port = app.port();

    tokio::spawn(async move {
        let _ = app.run_until_stopped().await;
    });

    // Wait for server to start
    tokio::time::sleep(Duration::from_millis(100)).await;

    port
}

#[tokio::test]
async fn health_check_returns_ok() {
    let port = spawn_app().await;
    let client = Client::new();

    let response = client
        .get(format!("http://localhost:{}/health", port))
        .timeout(Duration::from_secs(5))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "kml-service");
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn unknown_route_returns_404_with_endpoint_list() {
    let port = spawn_app().await;
    let client = Client::new();

    let response = client
        .get(format!("http://localhost:{}/no-such-route", port))
        .timeout(Duration::from_secs(5))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status().as_u16(), 404);

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["error"], "Endpoint not found");

    let endpoints = body["available_endpoints"]
        .as_array()
        .expect("available_endpoints should be an array");
    assert_eq!(endpoints.len(), 4);
    assert!(endpoints.contains(&serde_json::json!("POST /generate-kml")));
}

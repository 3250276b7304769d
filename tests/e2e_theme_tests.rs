//! End-to-end tests for the theme and display-preferences endpoints.

mod common;

use common::{TestClient, TestServer};
use reqwest::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_theme_view_exposes_palette_and_defaults() {
    let server = TestServer::spawn().await;
    let client = TestClient::new(server.base_url.clone());

    let response = client.get_theme().await;
    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["palette"]["name"], "midnight");
    assert!(body["palette"]["bg"].as_str().unwrap().starts_with('#'));
    assert_eq!(body["preferences"]["high_contrast"], false);
    assert_eq!(body["preferences"]["font_size"], "medium");
}

#[tokio::test]
async fn test_theme_css_has_css_content_type_and_variables() {
    let server = TestServer::spawn().await;
    let client = TestClient::new(server.base_url.clone());

    let response = client.get_theme_css().await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()["content-type"].to_str().unwrap(),
        "text/css; charset=utf-8"
    );

    let css = response.text().await.unwrap();
    assert!(css.contains(":root {"));
    assert!(css.contains("--bg: #05090f;"));
    assert!(css.contains("--space-1: 4px;"));
    assert!(css.contains("@keyframes fade-in"));
}

#[tokio::test]
async fn test_preferences_round_trip_and_affect_css() {
    let server = TestServer::spawn().await;
    let client = TestClient::new(server.base_url.clone());

    let response = client.get_preferences().await;
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["reduced_motion"], false);

    let response = client
        .put_preferences(json!({
            "high_contrast": true,
            "reduced_motion": true,
            "font_size": "large"
        }))
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = client.get_preferences().await;
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["high_contrast"], true);
    assert_eq!(body["font_size"], "large");

    // The rendered CSS follows the session preferences.
    let css = client.get_theme_css().await.text().await.unwrap();
    assert!(css.contains("--transition: 0ms;"));
    assert!(!css.contains("@keyframes"));
    assert!(css.contains("--text: #ffffff;"));
    // 15px base scaled by 115%.
    assert!(css.contains("--font-size-md: 17px;"));
}

#[tokio::test]
async fn test_invalid_preferences_are_rejected() {
    let server = TestServer::spawn().await;
    let client = TestClient::new(server.base_url.clone());

    let response = client
        .put_preferences(json!({ "font_size": "enormous" }))
        .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    // The stored preferences are untouched.
    let response = client.get_preferences().await;
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["font_size"], "medium");
}

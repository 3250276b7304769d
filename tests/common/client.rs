//! HTTP client for end-to-end tests
//!
//! Wraps reqwest with one method per endpoint. When routes or request
//! formats change, update only this file.

use reqwest::Response;
use std::time::Duration;

use super::constants::*;

pub struct TestClient {
    /// The underlying reqwest client (public for custom requests in tests)
    pub client: reqwest::Client,
    /// The base URL of the test server
    pub base_url: String,
}

impl TestClient {
    pub fn new(base_url: String) -> Self {
        let client = reqwest::Client::builder()
            .cookie_store(true)
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .expect("Failed to build reqwest client");

        Self { client, base_url }
    }

    pub async fn home(&self) -> Response {
        self.client
            .get(&self.base_url)
            .send()
            .await
            .expect("home request failed")
    }

    // ========================================================================
    // Ticket Endpoints
    // ========================================================================

    pub async fn get_tickets(&self) -> Response {
        self.client
            .get(format!("{}/v1/tickets", self.base_url))
            .send()
            .await
            .expect("get tickets request failed")
    }

    pub async fn get_tickets_filtered(&self, query: &[(&str, &str)]) -> Response {
        self.client
            .get(format!("{}/v1/tickets", self.base_url))
            .query(query)
            .send()
            .await
            .expect("get tickets request failed")
    }

    pub async fn refresh_tickets(&self) -> Response {
        self.client
            .post(format!("{}/v1/tickets/refresh", self.base_url))
            .send()
            .await
            .expect("refresh request failed")
    }

    pub async fn update_ticket(&self, id: i64, body: serde_json::Value) -> Response {
        self.client
            .put(format!("{}/v1/tickets/{}", self.base_url, id))
            .json(&body)
            .send()
            .await
            .expect("update request failed")
    }

    pub async fn analyze_ticket(&self, id: i64) -> Response {
        self.client
            .post(format!("{}/v1/tickets/{}/analyze", self.base_url, id))
            .send()
            .await
            .expect("analyze request failed")
    }

    // ========================================================================
    // Theme Endpoints
    // ========================================================================

    pub async fn get_theme(&self) -> Response {
        self.client
            .get(format!("{}/v1/theme", self.base_url))
            .send()
            .await
            .expect("get theme request failed")
    }

    pub async fn get_theme_css(&self) -> Response {
        self.client
            .get(format!("{}/v1/theme.css", self.base_url))
            .send()
            .await
            .expect("get theme css request failed")
    }

    pub async fn get_preferences(&self) -> Response {
        self.client
            .get(format!("{}/v1/preferences", self.base_url))
            .send()
            .await
            .expect("get preferences request failed")
    }

    pub async fn put_preferences(&self, body: serde_json::Value) -> Response {
        self.client
            .put(format!("{}/v1/preferences", self.base_url))
            .json(&body)
            .send()
            .await
            .expect("put preferences request failed")
    }
}

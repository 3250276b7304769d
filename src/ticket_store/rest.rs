//! REST client for the hosted relational backend.
//!
//! Speaks the PostgREST dialect: one read of the `opportunities` table with
//! the recording join embedded in the select, and one PATCH per edit filtered
//! by `id=eq.{id}`. No retries; failures bubble up as `StoreError`.

use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use super::models::{TicketRow, TicketUpdateRow};
use super::trait_def::{StoreError, TicketStore};
use crate::tickets::models::{Ticket, TicketChanges};

const TICKETS_TABLE: &str = "opportunities";
const SELECT_WITH_RECORDING: &str = "*,recordings(filename,transcription)";

pub struct RestTicketStore {
    client: Client,
    base_url: String,
    api_key: String,
}

impl RestTicketStore {
    /// Create a new store client.
    ///
    /// # Arguments
    /// * `base_url` - Base URL of the backend project (e.g., "https://xyz.example.co")
    /// * `api_key` - Service key, sent as both `apikey` header and bearer token
    /// * `timeout_secs` - Request timeout in seconds
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        timeout_secs: u64,
    ) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            api_key: api_key.into(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn table_url(&self) -> String {
        format!(
            "{}/rest/v1/{}",
            self.base_url.trim_end_matches('/'),
            TICKETS_TABLE
        )
    }
}

fn map_transport(err: reqwest::Error) -> StoreError {
    if err.is_timeout() {
        StoreError::Connection("request timed out".to_string())
    } else {
        StoreError::Connection(err.to_string())
    }
}

#[async_trait]
impl TicketStore for RestTicketStore {
    async fn list_tickets(&self) -> Result<Vec<Ticket>, StoreError> {
        debug!("Fetching tickets from {}", self.table_url());

        let response = self
            .client
            .get(self.table_url())
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .query(&[
                ("select", SELECT_WITH_RECORDING),
                ("order", "created_at.desc"),
            ])
            .send()
            .await
            .map_err(map_transport)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(StoreError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let rows: Vec<TicketRow> = response
            .json()
            .await
            .map_err(|e| StoreError::InvalidResponse(format!("Failed to parse ticket rows: {}", e)))?;

        Ok(rows.into_iter().map(Ticket::from).collect())
    }

    async fn update_ticket(&self, id: i64, changes: &TicketChanges) -> Result<Ticket, StoreError> {
        debug!(ticket_id = id, "Updating ticket");

        let id_filter = format!("eq.{}", id);
        let response = self
            .client
            .patch(self.table_url())
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .header("Prefer", "return=representation")
            .query(&[
                ("id", id_filter.as_str()),
                ("select", SELECT_WITH_RECORDING),
            ])
            .json(&TicketUpdateRow::from_changes(changes))
            .send()
            .await
            .map_err(map_transport)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(StoreError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        // return=representation yields the updated rows; the equality filter
        // guarantees at most one.
        let rows: Vec<TicketRow> = response.json().await.map_err(|e| {
            StoreError::InvalidResponse(format!("Failed to parse updated ticket: {}", e))
        })?;

        rows.into_iter()
            .next()
            .map(Ticket::from)
            .ok_or(StoreError::NotFound(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_store() {
        let store = RestTicketStore::new("https://xyz.example.co", "service-key", 30);
        assert!(store.is_ok());
        assert_eq!(store.unwrap().base_url(), "https://xyz.example.co");
    }

    #[test]
    fn table_url_handles_trailing_slash() {
        let store = RestTicketStore::new("https://xyz.example.co/", "k", 30).unwrap();
        assert_eq!(
            store.table_url(),
            "https://xyz.example.co/rest/v1/opportunities"
        );
    }
}

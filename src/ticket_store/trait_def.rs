//! TicketStore trait definition.

use async_trait::async_trait;
use thiserror::Error;

use crate::tickets::models::{Ticket, TicketChanges};

/// Errors that can occur when talking to a ticket storage backend.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Backend error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Ticket {0} not found")]
    NotFound(i64),
}

/// Trait for ticket storage backends.
///
/// The production implementation talks to the hosted relational backend over
/// REST; tests substitute an in-memory store.
#[async_trait]
pub trait TicketStore: Send + Sync {
    /// All tickets joined with their recording, newest first.
    async fn list_tickets(&self) -> Result<Vec<Ticket>, StoreError>;

    /// Point update of a single ticket keyed by id. Returns the updated row.
    async fn update_ticket(&self, id: i64, changes: &TicketChanges) -> Result<Ticket, StoreError>;
}

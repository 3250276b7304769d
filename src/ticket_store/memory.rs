//! In-memory ticket store used by tests and local development.

use std::cmp::Reverse;
use std::sync::Mutex;

use async_trait::async_trait;

use super::trait_def::{StoreError, TicketStore};
use crate::tickets::models::{Ticket, TicketChanges};

#[derive(Default)]
pub struct InMemoryTicketStore {
    tickets: Mutex<Vec<Ticket>>,
}

impl InMemoryTicketStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed(&self, tickets: Vec<Ticket>) {
        *self.tickets.lock().unwrap() = tickets;
    }

    /// Current contents, for assertions in tests.
    pub fn snapshot(&self) -> Vec<Ticket> {
        self.tickets.lock().unwrap().clone()
    }
}

#[async_trait]
impl TicketStore for InMemoryTicketStore {
    async fn list_tickets(&self) -> Result<Vec<Ticket>, StoreError> {
        let mut tickets = self.tickets.lock().unwrap().clone();
        tickets.sort_by_key(|t| Reverse(t.created_at));
        Ok(tickets)
    }

    async fn update_ticket(&self, id: i64, changes: &TicketChanges) -> Result<Ticket, StoreError> {
        let mut tickets = self.tickets.lock().unwrap();
        let ticket = tickets
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(StoreError::NotFound(id))?;

        ticket.title = changes.title.clone();
        ticket.description = changes.description.clone();
        ticket.status = changes.status.clone();
        ticket.priority = changes.priority.clone();
        ticket.notes = changes.notes.clone();
        ticket.updated_at = Some(changes.updated_at);

        Ok(ticket.clone())
    }
}

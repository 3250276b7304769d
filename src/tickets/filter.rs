//! In-memory narrowing of the loaded ticket table.

use super::models::{Ticket, TicketPriority, TicketStatus};

/// The three independently combinable predicates of the dashboard: exact
/// match on the displayed status label, exact match on the displayed priority
/// label, and a case-insensitive substring search across the free-text
/// columns. Predicates are ANDed; the search term ORs across fields.
#[derive(Debug, Clone, Default)]
pub struct TicketFilter {
    pub status: Option<String>,
    pub priority: Option<String>,
    pub search: Option<String>,
}

impl TicketFilter {
    pub fn is_empty(&self) -> bool {
        self.status.is_none() && self.priority.is_none() && self.search.is_none()
    }

    pub fn matches(&self, ticket: &Ticket) -> bool {
        if let Some(label) = &self.status {
            if ticket.status != TicketStatus::from_display(label) {
                return false;
            }
        }

        if let Some(label) = &self.priority {
            if ticket.priority != TicketPriority::from_display(label) {
                return false;
            }
        }

        if let Some(term) = &self.search {
            let term = term.to_lowercase();
            let hit = ticket.title.to_lowercase().contains(&term)
                || ticket.description.to_lowercase().contains(&term)
                || ticket.ticket_number.to_lowercase().contains(&term)
                || ticket.notes.to_lowercase().contains(&term);
            if !hit {
                return false;
            }
        }

        true
    }

    pub fn apply<'a>(&self, tickets: &'a [Ticket]) -> Vec<&'a Ticket> {
        tickets.iter().filter(|t| self.matches(t)).collect()
    }
}

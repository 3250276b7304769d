//! Opsboard Server Library
//!
//! This library exposes the internal modules for testing and potential reuse.

pub mod analysis;
pub mod config;
pub mod server;
pub mod theme;
pub mod ticket_store;
pub mod tickets;

// Re-export commonly used types for convenience
pub use server::{run_server, RequestsLoggingLevel};
pub use ticket_store::{InMemoryTicketStore, RestTicketStore, StoreError, TicketStore};
pub use tickets::models::{Ticket, TicketChanges, TicketPriority, TicketStatus};

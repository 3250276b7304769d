mod memory;
mod models;
mod rest;
mod trait_def;

pub use memory::InMemoryTicketStore;
pub use models::{RecordingRow, TicketRow, TicketUpdateRow};
pub use rest::RestTicketStore;
pub use trait_def::{StoreError, TicketStore};

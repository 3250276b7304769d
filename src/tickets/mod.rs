pub mod cache;
pub mod filter;
pub mod models;
pub mod view;

pub use cache::TicketCache;
pub use filter::TicketFilter;
pub use models::{Recording, Ticket, TicketChanges, TicketPriority, TicketStatus};
pub use view::{Notice, TicketMetrics, TicketView, TicketsView};

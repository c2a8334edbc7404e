//! Application layer.
//!
//! Services that orchestrate domain logic over the ports:
//! - `TicketService`: issue, quote, pay and exit operations for spa tickets

mod ticket_service;

pub use ticket_service::TicketService;

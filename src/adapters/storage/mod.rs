//! Storage Adapters
//!
//! Implementations of the TicketRepository port:
//!
//! - `in_memory_ticket_repository` - Vec-backed store for development and tests
//! - `json_file_ticket_repository` - versioned single-document JSON store

mod in_memory_ticket_repository;
mod json_file_ticket_repository;

pub use in_memory_ticket_repository::InMemoryTicketRepository;
pub use json_file_ticket_repository::{JsonFileTicketRepository, STORE_FILE_NAME};

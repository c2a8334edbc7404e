//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the lifecycle core and the outside world:
//!
//! - `barcode_generator` - Fresh barcode issuance
//! - `clock` - Injected time source
//! - `ticket_repository` - Ownership of the ticket collection

mod barcode_generator;
mod clock;
mod ticket_repository;

pub use barcode_generator::BarcodeGenerator;
pub use clock::Clock;
pub use ticket_repository::{RepositoryError, TicketRepository};

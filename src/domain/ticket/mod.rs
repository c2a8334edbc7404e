//! Ticket domain module.
//!
//! The visit lifecycle: issuance against capacity, duration pricing,
//! grace-checked payment, penalty accrual, and exit.
//!
//! # Module Structure
//!
//! - `aggregate` - Ticket entity and the patch repositories merge
//! - `errors` - TicketError and stable error codes
//! - `outcomes` - Structured results for the lifecycle operations
//! - `payment_method` - Accepted payment methods
//! - `pricing` - Duration fee and penalty arithmetic
//! - `status` - TicketStatus state machine
//! - `tariff` - Capacity and pricing parameters
//! - `validity` - Grace-window payment predicate

mod aggregate;
mod errors;
mod outcomes;
mod payment_method;
pub mod pricing;
mod status;
mod tariff;
pub mod validity;

pub use aggregate::{Ticket, TicketPatch};
pub use errors::{ErrorCode, TicketError};
pub use outcomes::{
    CapacityReport, ExitDecision, IssuedTicket, PaymentKind, PaymentReceipt, PriceQuote, Receipt,
};
pub use payment_method::PaymentMethod;
pub use status::TicketStatus;
pub use tariff::Tariff;

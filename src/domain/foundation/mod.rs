//! Foundation module - Shared domain primitives.
//!
//! Contains the value objects and error types that form the vocabulary
//! of the spa ticketing domain:
//!
//! - `barcode` - Ticket identifier
//! - `errors` - Validation errors for value object construction
//! - `money` - Monetary amounts in euro cents
//! - `state_machine` - Validated status transitions
//! - `timestamp` - Immutable points in time

mod barcode;
mod errors;
mod money;
mod state_machine;
mod timestamp;

pub use barcode::Barcode;
pub use errors::ValidationError;
pub use money::Money;
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;

//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the lifecycle core to the outside world:
//!
//! - `barcode` - Barcode generation (timestamp-based, mock)
//! - `clock` - Time sources (system, mock)
//! - `storage` - Ticket repositories (in-memory, JSON file)

mod barcode;
mod clock;
pub mod storage;

pub use barcode::{MockBarcodeGenerator, TimestampBarcodeGenerator};
pub use clock::{MockClock, SystemClock};
pub use storage::{InMemoryTicketRepository, JsonFileTicketRepository, STORE_FILE_NAME};

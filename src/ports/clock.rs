//! Clock port.
//!
//! Time is injected so the pricing and grace rules can be driven by a
//! controlled clock in tests.

use crate::domain::foundation::Timestamp;

/// Source of the current instant.
pub trait Clock: Send + Sync {
    /// Returns the current instant.
    fn now(&self) -> Timestamp;
}

//! Ticket-specific error types.
//!
//! Hard failures for the lifecycle operations. Deny states the desk
//! resolves in the normal flow (lapsed grace, owed penalties, missing
//! payment) are not errors; they are variants of the operation outcomes.

use std::fmt;

use crate::domain::foundation::{Barcode, Timestamp};

/// Errors surfaced by the ticket lifecycle operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TicketError {
    /// No ticket carries this barcode.
    NotFound(Barcode),

    /// Every space is occupied; issuance refused.
    CapacityExceeded { total: u32 },

    /// Input outside the accepted payment methods.
    InvalidPaymentMethod(String),

    /// The ticket is already settled; a second charge was refused.
    AlreadyPaid(Barcode),

    /// The ticket already left through the exit gate.
    AlreadyExited {
        barcode: Barcode,
        exited_at: Timestamp,
    },

    /// Storage collaborator failure, passed through unchanged.
    Repository(String),
}

impl TicketError {
    // Constructor functions for cleaner error creation

    pub fn not_found(barcode: Barcode) -> Self {
        TicketError::NotFound(barcode)
    }

    pub fn capacity_exceeded(total: u32) -> Self {
        TicketError::CapacityExceeded { total }
    }

    pub fn invalid_payment_method(given: impl Into<String>) -> Self {
        TicketError::InvalidPaymentMethod(given.into())
    }

    pub fn already_paid(barcode: Barcode) -> Self {
        TicketError::AlreadyPaid(barcode)
    }

    pub fn already_exited(barcode: Barcode, exited_at: Timestamp) -> Self {
        TicketError::AlreadyExited { barcode, exited_at }
    }

    pub fn repository(message: impl Into<String>) -> Self {
        TicketError::Repository(message.into())
    }

    /// Returns the stable machine-readable code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            TicketError::NotFound(_) => ErrorCode::TicketNotFound,
            TicketError::CapacityExceeded { .. } => ErrorCode::CapacityExceeded,
            TicketError::InvalidPaymentMethod(_) => ErrorCode::InvalidPaymentMethod,
            TicketError::AlreadyPaid(_) => ErrorCode::AlreadyPaid,
            TicketError::AlreadyExited { .. } => ErrorCode::AlreadyExited,
            TicketError::Repository(_) => ErrorCode::RepositoryFailure,
        }
    }

    /// Returns the human-readable message for this error.
    pub fn message(&self) -> String {
        match self {
            TicketError::NotFound(barcode) => {
                format!("Ticket not found: {}", barcode)
            }
            TicketError::CapacityExceeded { total } => {
                format!(
                    "Spa is full: all {} spaces are occupied. Please wait for a visitor to exit.",
                    total
                )
            }
            TicketError::InvalidPaymentMethod(given) => {
                format!(
                    "Invalid payment method '{}': expected credit, debit or cash",
                    given
                )
            }
            TicketError::AlreadyPaid(barcode) => {
                format!("Ticket {} is already paid", barcode)
            }
            TicketError::AlreadyExited { barcode, exited_at } => {
                format!("Ticket {} already exited at {}", barcode, exited_at)
            }
            TicketError::Repository(message) => {
                format!("Storage error: {}", message)
            }
        }
    }

    /// Returns true if retrying the operation could succeed.
    ///
    /// Only storage failures are transient; every other error reports a
    /// fact about the ticket that a retry cannot change.
    pub fn is_retryable(&self) -> bool {
        matches!(self, TicketError::Repository(_))
    }
}

impl fmt::Display for TicketError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for TicketError {}

/// Stable machine-readable codes for ticket errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    TicketNotFound,
    CapacityExceeded,
    InvalidPaymentMethod,
    AlreadyPaid,
    AlreadyExited,
    RepositoryFailure,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let code = match self {
            ErrorCode::TicketNotFound => "TICKET_NOT_FOUND",
            ErrorCode::CapacityExceeded => "CAPACITY_EXCEEDED",
            ErrorCode::InvalidPaymentMethod => "INVALID_PAYMENT_METHOD",
            ErrorCode::AlreadyPaid => "ALREADY_PAID",
            ErrorCode::AlreadyExited => "ALREADY_EXITED",
            ErrorCode::RepositoryFailure => "REPOSITORY_FAILURE",
        };
        write!(f, "{}", code)
    }
}

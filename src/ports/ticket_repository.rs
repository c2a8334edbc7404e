//! Ticket repository port.
//!
//! Contract for the collaborator that owns the ticket collection. The
//! lifecycle service is the only writer; everything else sees read-only
//! snapshots.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::foundation::Barcode;
use crate::domain::ticket::{Ticket, TicketError, TicketPatch};

/// Errors surfaced by repository implementations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    #[error("Ticket not found: {0}")]
    NotFound(Barcode),

    #[error("Barcode already present: {0}")]
    DuplicateBarcode(Barcode),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl From<RepositoryError> for TicketError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound(barcode) => TicketError::not_found(barcode),
            other => TicketError::repository(other.to_string()),
        }
    }
}

/// Repository port for the ticket collection.
///
/// Implementations must preserve insertion order in `list_all` and enforce
/// barcode uniqueness in `add`.
#[async_trait]
pub trait TicketRepository: Send + Sync {
    /// Appends a new ticket to the collection.
    ///
    /// # Errors
    ///
    /// - `DuplicateBarcode` if the barcode already exists
    /// - `Storage` if persistence fails
    async fn add(&self, ticket: &Ticket) -> Result<(), RepositoryError>;

    /// Finds a ticket by its barcode.
    ///
    /// Returns `None` when no ticket carries the barcode.
    ///
    /// # Errors
    ///
    /// - `Storage` if the lookup fails
    async fn find_by_barcode(&self, barcode: &Barcode) -> Result<Option<Ticket>, RepositoryError>;

    /// Merges a partial update into an existing ticket.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the barcode is absent
    /// - `Storage` if persistence fails
    async fn update(&self, barcode: &Barcode, patch: TicketPatch) -> Result<(), RepositoryError>;

    /// Returns every ticket in insertion order.
    ///
    /// # Errors
    ///
    /// - `Storage` if the listing fails
    async fn list_all(&self) -> Result<Vec<Ticket>, RepositoryError>;

    /// Counts tickets that have not exited.
    ///
    /// # Errors
    ///
    /// - `Storage` if the count fails
    async fn count_active(&self) -> Result<u32, RepositoryError>;
}

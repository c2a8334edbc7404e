//! In-Memory Ticket Repository
//!
//! Keeps the ticket collection in a Vec so issuance order is preserved.
//! Useful for development and tests; tickets are lost on restart.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::Barcode;
use crate::domain::ticket::{Ticket, TicketPatch};
use crate::ports::{RepositoryError, TicketRepository};

/// In-memory storage for the ticket collection.
#[derive(Debug, Clone)]
pub struct InMemoryTicketRepository {
    tickets: Arc<RwLock<Vec<Ticket>>>,
}

impl InMemoryTicketRepository {
    /// Creates a new empty repository.
    pub fn new() -> Self {
        Self {
            tickets: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Removes all stored tickets (useful for tests).
    pub async fn clear(&self) {
        self.tickets.write().await.clear();
    }

    /// Returns the number of stored tickets, exited ones included.
    pub async fn ticket_count(&self) -> usize {
        self.tickets.read().await.len()
    }
}

impl Default for InMemoryTicketRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TicketRepository for InMemoryTicketRepository {
    async fn add(&self, ticket: &Ticket) -> Result<(), RepositoryError> {
        let mut tickets = self.tickets.write().await;
        if tickets.iter().any(|t| t.barcode == ticket.barcode) {
            return Err(RepositoryError::DuplicateBarcode(ticket.barcode.clone()));
        }
        tickets.push(ticket.clone());
        Ok(())
    }

    async fn find_by_barcode(&self, barcode: &Barcode) -> Result<Option<Ticket>, RepositoryError> {
        let tickets = self.tickets.read().await;
        Ok(tickets.iter().find(|t| &t.barcode == barcode).cloned())
    }

    async fn update(&self, barcode: &Barcode, patch: TicketPatch) -> Result<(), RepositoryError> {
        let mut tickets = self.tickets.write().await;
        match tickets.iter_mut().find(|t| &t.barcode == barcode) {
            Some(ticket) => {
                ticket.apply(patch);
                Ok(())
            }
            None => Err(RepositoryError::NotFound(barcode.clone())),
        }
    }

    async fn list_all(&self) -> Result<Vec<Ticket>, RepositoryError> {
        Ok(self.tickets.read().await.clone())
    }

    async fn count_active(&self) -> Result<u32, RepositoryError> {
        let tickets = self.tickets.read().await;
        Ok(tickets.iter().filter(|t| t.is_active()).count() as u32)
    }
}

//! JSON-File Ticket Repository
//!
//! Persists the full ticket collection as one versioned JSON document,
//! the way the front desk stores its day book. The document is read once
//! when the store opens and rewritten after every mutation.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::fs;
use tokio::sync::RwLock;

use crate::domain::foundation::Barcode;
use crate::domain::ticket::{Ticket, TicketPatch};
use crate::ports::{RepositoryError, TicketRepository};

/// File name of the persisted ticket record.
pub const STORE_FILE_NAME: &str = "spa-storage.json";

/// Layout version written into the persisted record.
const STORE_VERSION: u32 = 1;

/// On-disk layout: one record holding the full collection.
#[derive(Debug, Serialize, Deserialize)]
struct PersistedTickets {
    version: u32,
    tickets: Vec<Ticket>,
}

/// File-backed storage for the ticket collection.
#[derive(Debug, Clone)]
pub struct JsonFileTicketRepository {
    path: PathBuf,
    tickets: Arc<RwLock<Vec<Ticket>>>,
}

impl JsonFileTicketRepository {
    /// Opens the store under a data directory, loading any existing record.
    ///
    /// The directory is created if missing. A record written by a newer
    /// layout version is refused rather than silently reinterpreted.
    ///
    /// # Errors
    ///
    /// - `Storage` if the directory or record cannot be read, parsed, or
    ///   carries an unsupported version
    pub async fn open<P: AsRef<Path>>(data_dir: P) -> Result<Self, RepositoryError> {
        let dir = data_dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)
            .await
            .map_err(|e| RepositoryError::Storage(e.to_string()))?;
        let path = dir.join(STORE_FILE_NAME);

        let tickets = match fs::read_to_string(&path).await {
            Ok(json) => {
                let record: PersistedTickets = serde_json::from_str(&json).map_err(|e| {
                    RepositoryError::Storage(format!("Failed to parse ticket store: {}", e))
                })?;
                if record.version != STORE_VERSION {
                    return Err(RepositoryError::Storage(format!(
                        "Unsupported ticket store version: {}",
                        record.version
                    )));
                }
                record.tickets
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Vec::new(),
            Err(e) => return Err(RepositoryError::Storage(e.to_string())),
        };

        Ok(Self {
            path,
            tickets: Arc::new(RwLock::new(tickets)),
        })
    }

    /// Path of the persisted record.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Rewrites the whole document.
    async fn persist(&self, tickets: &[Ticket]) -> Result<(), RepositoryError> {
        let record = PersistedTickets {
            version: STORE_VERSION,
            tickets: tickets.to_vec(),
        };
        let json = serde_json::to_string_pretty(&record).map_err(|e| {
            RepositoryError::Storage(format!("Failed to serialize ticket store: {}", e))
        })?;
        fs::write(&self.path, json)
            .await
            .map_err(|e| RepositoryError::Storage(e.to_string()))?;
        Ok(())
    }
}

#[async_trait]
impl TicketRepository for JsonFileTicketRepository {
    async fn add(&self, ticket: &Ticket) -> Result<(), RepositoryError> {
        let mut tickets = self.tickets.write().await;
        if tickets.iter().any(|t| t.barcode == ticket.barcode) {
            return Err(RepositoryError::DuplicateBarcode(ticket.barcode.clone()));
        }
        tickets.push(ticket.clone());
        if let Err(err) = self.persist(&tickets).await {
            tracing::error!("Failed to persist ticket store: {}", err);
            // keep memory and disk in step when the write fails
            tickets.pop();
            return Err(err);
        }
        Ok(())
    }

    async fn find_by_barcode(&self, barcode: &Barcode) -> Result<Option<Ticket>, RepositoryError> {
        let tickets = self.tickets.read().await;
        Ok(tickets.iter().find(|t| &t.barcode == barcode).cloned())
    }

    async fn update(&self, barcode: &Barcode, patch: TicketPatch) -> Result<(), RepositoryError> {
        let mut tickets = self.tickets.write().await;
        let Some(index) = tickets.iter().position(|t| &t.barcode == barcode) else {
            return Err(RepositoryError::NotFound(barcode.clone()));
        };

        let previous = tickets[index].clone();
        tickets[index].apply(patch);
        if let Err(err) = self.persist(&tickets).await {
            tracing::error!("Failed to persist ticket store: {}", err);
            tickets[index] = previous;
            return Err(err);
        }
        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<Ticket>, RepositoryError> {
        Ok(self.tickets.read().await.clone())
    }

    async fn count_active(&self) -> Result<u32, RepositoryError> {
        let tickets = self.tickets.read().await;
        Ok(tickets.iter().filter(|t| t.is_active()).count() as u32)
    }
}

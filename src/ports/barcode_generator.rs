//! Barcode generator port.

use crate::domain::foundation::Barcode;

/// Produces fresh barcodes for ticket issuance.
///
/// Generated codes must not collide at desk rates; the repository still
/// refuses duplicates.
pub trait BarcodeGenerator: Send + Sync {
    /// Returns a fresh barcode.
    fn generate(&self) -> Barcode;
}

use async_trait::async_trait;

use super::entities::{Invoice, InvoiceId, StoredInvoice};
use super::errors::InvoiceError;

/// Append-only invoice record store.
///
/// Callers hand over invoices that already passed validation; the store only
/// assigns identifiers and retains records for the process lifetime. There are
/// no update or delete operations.
#[async_trait]
pub trait InvoiceStore: Send + Sync {
  /// Persist a validated invoice under the next identifier (starting at 1,
  /// strictly increasing, never reused).
  async fn create(&self, invoice: Invoice) -> Result<StoredInvoice, InvoiceError>;

  /// Fetch a record by identifier; `None` when absent.
  async fn get(&self, id: InvoiceId) -> Result<Option<StoredInvoice>, InvoiceError>;

  /// All records in insertion order.
  async fn list(&self) -> Result<Vec<StoredInvoice>, InvoiceError>;
}

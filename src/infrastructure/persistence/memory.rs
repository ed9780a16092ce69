use async_trait::async_trait;
use std::sync::Mutex;

use crate::domain::invoice::entities::{Invoice, InvoiceId, StoredInvoice};
use crate::domain::invoice::errors::InvoiceError;
use crate::domain::invoice::ports::InvoiceStore;

/// Process-lifetime, append-only invoice store.
///
/// A single mutex guards both the records and the identifier counter, so the
/// read-increment-write of `next_id` can never race with a concurrent create.
/// The lock is never held across an await point.
pub struct InMemoryInvoiceStore {
  inner: Mutex<StoreInner>,
}

struct StoreInner {
  records: Vec<StoredInvoice>,
  next_id: u64,
}

impl InMemoryInvoiceStore {
  pub fn new() -> Self {
    Self {
      inner: Mutex::new(StoreInner {
        records: Vec::new(),
        next_id: 1,
      }),
    }
  }
}

impl Default for InMemoryInvoiceStore {
  fn default() -> Self {
    Self::new()
  }
}

#[async_trait]
impl InvoiceStore for InMemoryInvoiceStore {
  async fn create(&self, invoice: Invoice) -> Result<StoredInvoice, InvoiceError> {
    let mut inner = self
      .inner
      .lock()
      .map_err(|e| InvoiceError::Store(e.to_string()))?;

    let id = InvoiceId(inner.next_id);
    inner.next_id += 1;

    let stored = StoredInvoice { id, invoice };
    inner.records.push(stored.clone());

    Ok(stored)
  }

  async fn get(&self, id: InvoiceId) -> Result<Option<StoredInvoice>, InvoiceError> {
    let inner = self
      .inner
      .lock()
      .map_err(|e| InvoiceError::Store(e.to_string()))?;

    Ok(inner.records.iter().find(|r| r.id == id).cloned())
  }

  async fn list(&self) -> Result<Vec<StoredInvoice>, InvoiceError> {
    let inner = self
      .inner
      .lock()
      .map_err(|e| InvoiceError::Store(e.to_string()))?;

    Ok(inner.records.clone())
  }
}

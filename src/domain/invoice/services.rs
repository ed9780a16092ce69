use std::sync::Arc;

use super::entities::{Invoice, InvoiceId, StoredInvoice};
use super::errors::InvoiceError;
use super::ports::InvoiceStore;
use super::validation::{self, InvoiceDraft};

/// Domain service tying validation to the record store.
///
/// Validation and totals computation are pure; the only side effect here is
/// handing a validated invoice to the store.
pub struct InvoiceService {
  store: Arc<dyn InvoiceStore>,
}

impl InvoiceService {
  pub fn new(store: Arc<dyn InvoiceStore>) -> Self {
    Self { store }
  }

  /// Validate a raw draft and persist the resulting invoice.
  pub async fn create_invoice(&self, draft: InvoiceDraft) -> Result<StoredInvoice, InvoiceError> {
    let invoice = validation::validate(draft)?;
    let stored = self.store.create(invoice).await?;

    tracing::info!(
      id = stored.id.value(),
      invoice_number = %stored.invoice.invoice_number,
      "invoice created"
    );

    Ok(stored)
  }

  /// Validate a raw draft without persisting it.
  ///
  /// Used by the export/preview path: the caller gets back a fully resolved
  /// invoice with computed totals, ready for rendering.
  pub async fn preview_invoice(&self, draft: InvoiceDraft) -> Result<Invoice, InvoiceError> {
    Ok(validation::validate(draft)?)
  }

  pub async fn get_invoice(&self, id: InvoiceId) -> Result<StoredInvoice, InvoiceError> {
    self
      .store
      .get(id)
      .await?
      .ok_or(InvoiceError::NotFound(id))
  }

  pub async fn list_invoices(&self) -> Result<Vec<StoredInvoice>, InvoiceError> {
    self.store.list().await
  }
}

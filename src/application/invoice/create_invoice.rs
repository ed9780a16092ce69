use std::sync::Arc;

use crate::domain::invoice::{InvoiceDraft, InvoiceError, InvoiceService, StoredInvoice};

/// Raw invoice submission to validate and persist.
#[derive(Debug)]
pub struct CreateInvoiceCommand {
  pub draft: InvoiceDraft,
}

pub struct CreateInvoiceUseCase {
  invoice_service: Arc<InvoiceService>,
}

impl CreateInvoiceUseCase {
  pub fn new(invoice_service: Arc<InvoiceService>) -> Self {
    Self { invoice_service }
  }

  pub async fn execute(&self, command: CreateInvoiceCommand) -> Result<StoredInvoice, InvoiceError> {
    self.invoice_service.create_invoice(command.draft).await
  }
}

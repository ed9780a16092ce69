use std::sync::Arc;

use crate::domain::invoice::{InvoiceError, InvoiceId, InvoiceService, StoredInvoice};

#[derive(Debug, Clone, Copy)]
pub struct GetInvoiceCommand {
  pub id: InvoiceId,
}

pub struct GetInvoiceUseCase {
  invoice_service: Arc<InvoiceService>,
}

impl GetInvoiceUseCase {
  pub fn new(invoice_service: Arc<InvoiceService>) -> Self {
    Self { invoice_service }
  }

  pub async fn execute(&self, command: GetInvoiceCommand) -> Result<StoredInvoice, InvoiceError> {
    self.invoice_service.get_invoice(command.id).await
  }
}

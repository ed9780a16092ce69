use std::sync::Arc;

use crate::domain::invoice::{InvoiceError, InvoiceService, StoredInvoice};

pub struct ListInvoicesUseCase {
  invoice_service: Arc<InvoiceService>,
}

impl ListInvoicesUseCase {
  pub fn new(invoice_service: Arc<InvoiceService>) -> Self {
    Self { invoice_service }
  }

  pub async fn execute(&self) -> Result<Vec<StoredInvoice>, InvoiceError> {
    self.invoice_service.list_invoices().await
  }
}

use std::sync::Arc;

use crate::domain::invoice::{Invoice, InvoiceDraft, InvoiceError, InvoiceService};

/// Raw invoice submission to validate without persisting.
///
/// Backs the export path: the response is a fully resolved invoice with
/// computed totals that the rendering layer can consume as-is.
#[derive(Debug)]
pub struct PreviewInvoiceCommand {
  pub draft: InvoiceDraft,
}

pub struct PreviewInvoiceUseCase {
  invoice_service: Arc<InvoiceService>,
}

impl PreviewInvoiceUseCase {
  pub fn new(invoice_service: Arc<InvoiceService>) -> Self {
    Self { invoice_service }
  }

  pub async fn execute(&self, command: PreviewInvoiceCommand) -> Result<Invoice, InvoiceError> {
    self.invoice_service.preview_invoice(command.draft).await
  }
}

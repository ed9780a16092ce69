use crate::domain::invoice::InvoiceNumber;

/// Produce a suggested invoice number for a new form.
///
/// The number is a convenience default; users can overwrite it, and
/// validation only requires that the final value is non-empty.
#[derive(Default)]
pub struct NextInvoiceNumberUseCase;

impl NextInvoiceNumberUseCase {
  pub fn new() -> Self {
    Self
  }

  pub fn execute(&self) -> InvoiceNumber {
    InvoiceNumber::generate()
  }
}

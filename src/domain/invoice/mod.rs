pub mod entities;
pub mod errors;
pub mod ports;
pub mod services;
pub mod validation;
pub mod value_objects;

pub use entities::{Invoice, InvoiceId, InvoiceTotals, LineItem, Party, StoredInvoice};
pub use errors::{FieldError, InvoiceError, ValidationError};
pub use ports::InvoiceStore;
pub use services::InvoiceService;
pub use validation::{InvoiceDraft, LineItemDraft, PartyDraft, validate};
pub use value_objects::{
  Description, EmailAddress, InvoiceNumber, PartyName, PhoneNumber, PostalAddress, Quantity,
  TaxRate, UnitPrice, ValueObjectError,
};

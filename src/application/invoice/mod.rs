pub mod create_invoice;
pub mod get_invoice;
pub mod list_invoices;
pub mod next_invoice_number;
pub mod preview_invoice;

pub use create_invoice::{CreateInvoiceCommand, CreateInvoiceUseCase};
pub use get_invoice::{GetInvoiceCommand, GetInvoiceUseCase};
pub use list_invoices::ListInvoicesUseCase;
pub use next_invoice_number::NextInvoiceNumberUseCase;
pub use preview_invoice::{PreviewInvoiceCommand, PreviewInvoiceUseCase};

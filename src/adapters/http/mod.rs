pub mod dtos;
pub mod errors;
pub mod handlers;
pub mod middleware;
pub mod routes;

// Re-export commonly used types
pub use dtos::{
  CreateInvoiceRequest, ErrorResponse, InvoiceDto, ListInvoicesResponse, StoredInvoiceDto,
};
pub use errors::ApiError;
pub use middleware::{RequestId, RequestIdMiddleware};
pub use routes::configure_invoice_routes;

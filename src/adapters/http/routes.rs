use actix_web::web;
use std::sync::Arc;

use crate::application::invoice::{
  CreateInvoiceUseCase, GetInvoiceUseCase, ListInvoicesUseCase, NextInvoiceNumberUseCase,
  PreviewInvoiceUseCase,
};

use super::handlers::invoices::{
  create_invoice_handler, get_invoice_handler, list_invoices_handler, next_invoice_number_handler,
  preview_invoice_handler,
};

/// Configure invoice routes
///
/// Mounts all invoice endpoints under the provided scope (e.g.
/// /api/v1/invoices).
///
/// # Routes
///
/// - POST "" - Validate and store a new invoice
/// - GET "" - List all stored invoices
/// - POST /preview - Validate and compute totals without storing
/// - GET /next-number - Suggest a number for a new invoice form
/// - GET /{id} - Fetch a stored invoice by identifier
pub fn configure_invoice_routes(
  cfg: &mut web::ServiceConfig,
  create_use_case: Arc<CreateInvoiceUseCase>,
  list_use_case: Arc<ListInvoicesUseCase>,
  get_use_case: Arc<GetInvoiceUseCase>,
  preview_use_case: Arc<PreviewInvoiceUseCase>,
  next_number_use_case: Arc<NextInvoiceNumberUseCase>,
) {
  cfg
    .app_data(web::Data::new(create_use_case))
    .app_data(web::Data::new(list_use_case))
    .app_data(web::Data::new(get_use_case))
    .app_data(web::Data::new(preview_use_case))
    .app_data(web::Data::new(next_number_use_case))
    .route("", web::post().to(create_invoice_handler))
    .route("", web::get().to(list_invoices_handler))
    .route("/preview", web::post().to(preview_invoice_handler))
    .route("/next-number", web::get().to(next_invoice_number_handler))
    // Literal segments above must register before the id catch-all
    .route("/{id}", web::get().to(get_invoice_handler));
}

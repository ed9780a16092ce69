use actix_web::{HttpResponse, web};
use std::sync::Arc;

use crate::{
  adapters::http::{
    dtos::{
      CreateInvoiceRequest, InvoiceDto, ListInvoicesResponse, NextInvoiceNumberResponse,
      StoredInvoiceDto,
    },
    errors::ApiError,
  },
  application::invoice::{
    CreateInvoiceCommand, CreateInvoiceUseCase, GetInvoiceCommand, GetInvoiceUseCase,
    ListInvoicesUseCase, NextInvoiceNumberUseCase, PreviewInvoiceCommand, PreviewInvoiceUseCase,
  },
  domain::invoice::InvoiceId,
};

/// Create a new invoice
/// POST /api/v1/invoices
pub async fn create_invoice_handler(
  request: web::Json<CreateInvoiceRequest>,
  use_case: web::Data<Arc<CreateInvoiceUseCase>>,
) -> Result<HttpResponse, ApiError> {
  let command = CreateInvoiceCommand {
    draft: request.into_inner().into_draft(),
  };

  let stored = use_case.execute(command).await?;

  Ok(HttpResponse::Created().json(StoredInvoiceDto::from(&stored)))
}

/// List all stored invoices
/// GET /api/v1/invoices
pub async fn list_invoices_handler(
  use_case: web::Data<Arc<ListInvoicesUseCase>>,
) -> Result<HttpResponse, ApiError> {
  let invoices = use_case.execute().await?;

  Ok(HttpResponse::Ok().json(ListInvoicesResponse {
    invoices: invoices.iter().map(StoredInvoiceDto::from).collect(),
  }))
}

/// Fetch a single invoice by identifier
/// GET /api/v1/invoices/{id}
pub async fn get_invoice_handler(
  path: web::Path<u64>,
  use_case: web::Data<Arc<GetInvoiceUseCase>>,
) -> Result<HttpResponse, ApiError> {
  let command = GetInvoiceCommand {
    id: InvoiceId(path.into_inner()),
  };

  let stored = use_case.execute(command).await?;

  Ok(HttpResponse::Ok().json(StoredInvoiceDto::from(&stored)))
}

/// Validate an invoice and return it with computed totals, without storing
/// POST /api/v1/invoices/preview
pub async fn preview_invoice_handler(
  request: web::Json<CreateInvoiceRequest>,
  use_case: web::Data<Arc<PreviewInvoiceUseCase>>,
) -> Result<HttpResponse, ApiError> {
  let command = PreviewInvoiceCommand {
    draft: request.into_inner().into_draft(),
  };

  let invoice = use_case.execute(command).await?;

  Ok(HttpResponse::Ok().json(InvoiceDto::from(&invoice)))
}

/// Suggest a number for a new invoice form
/// GET /api/v1/invoices/next-number
pub async fn next_invoice_number_handler(
  use_case: web::Data<Arc<NextInvoiceNumberUseCase>>,
) -> Result<HttpResponse, ApiError> {
  let number = use_case.execute();

  Ok(HttpResponse::Ok().json(NextInvoiceNumberResponse {
    invoice_number: number.into_inner(),
  }))
}

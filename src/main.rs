use actix_web::{App, HttpServer, middleware::Logger, web};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use invoiceforge::{
  adapters::http::{RequestIdMiddleware, configure_invoice_routes},
  application::invoice::{
    CreateInvoiceUseCase, GetInvoiceUseCase, ListInvoicesUseCase, NextInvoiceNumberUseCase,
    PreviewInvoiceUseCase,
  },
  domain::invoice::InvoiceService,
  infrastructure::{config::Config, persistence::InMemoryInvoiceStore},
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
  // Initialize environment variables from .env file
  dotenvy::dotenv().ok();

  // Initialize tracing subscriber for logging
  tracing_subscriber::registry()
    .with(
      tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "invoiceforge=debug,actix_web=info".into()),
    )
    .with(tracing_subscriber::fmt::layer())
    .init();

  tracing::info!("Starting InvoiceForge");

  // Load configuration
  let config = Config::load().map_err(|e| {
    tracing::error!("Failed to load configuration: {}", e);
    std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string())
  })?;
  tracing::info!("Configuration loaded successfully");

  // Initialize the in-memory record store and domain service
  let store = Arc::new(InMemoryInvoiceStore::new());
  let invoice_service = Arc::new(InvoiceService::new(store));

  // Initialize use cases
  let create_invoice_use_case = Arc::new(CreateInvoiceUseCase::new(invoice_service.clone()));
  let list_invoices_use_case = Arc::new(ListInvoicesUseCase::new(invoice_service.clone()));
  let get_invoice_use_case = Arc::new(GetInvoiceUseCase::new(invoice_service.clone()));
  let preview_invoice_use_case = Arc::new(PreviewInvoiceUseCase::new(invoice_service.clone()));
  let next_invoice_number_use_case = Arc::new(NextInvoiceNumberUseCase::new());

  let server_host = config.server.host.clone();
  let server_port = config.server.port;

  tracing::info!("Starting HTTP server on {}:{}", server_host, server_port);

  // Create and start the HTTP server
  HttpServer::new(move || {
    App::new()
      // Add request ID middleware
      .wrap(RequestIdMiddleware::new())
      // Add logging middleware
      .wrap(Logger::default())
      // Configure invoice API routes
      .service(web::scope("/api/v1/invoices").configure(|cfg| {
        configure_invoice_routes(
          cfg,
          create_invoice_use_case.clone(),
          list_invoices_use_case.clone(),
          get_invoice_use_case.clone(),
          preview_invoice_use_case.clone(),
          next_invoice_number_use_case.clone(),
        )
      }))
      // Health check endpoint
      .route("/health", web::get().to(health_check))
  })
  .bind((server_host.as_str(), server_port))?
  .run()
  .await
}

/// Health check endpoint
async fn health_check() -> &'static str {
  "OK"
}

use actix_web::{
  HttpResponse,
  error::ResponseError,
  http::{StatusCode, header::ContentType},
};
use std::fmt;

use crate::domain::invoice::{InvoiceError, ValidationError};

use super::dtos::{ErrorResponse, FieldErrorDto};

/// API error type that maps domain errors to HTTP responses
#[derive(Debug)]
pub enum ApiError {
  /// Validation error with per-field details (400 Bad Request)
  Validation(ValidationError),

  /// Requested record does not exist (404 Not Found)
  NotFound(String),

  /// Internal server error (500 Internal Server Error)
  Internal(String),
}

impl fmt::Display for ApiError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ApiError::Validation(err) => write!(f, "Validation error: {}", err),
      ApiError::NotFound(msg) => write!(f, "Not found: {}", msg),
      ApiError::Internal(msg) => write!(f, "Internal error: {}", msg),
    }
  }
}

impl ResponseError for ApiError {
  fn status_code(&self) -> StatusCode {
    match self {
      ApiError::Validation(_) => StatusCode::BAD_REQUEST,
      ApiError::NotFound(_) => StatusCode::NOT_FOUND,
      ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }

  fn error_response(&self) -> HttpResponse {
    let status = self.status_code();
    let body = match self {
      ApiError::Validation(err) => ErrorResponse {
        error: "validation_error".to_string(),
        message: "Invoice validation failed".to_string(),
        details: Some(
          err
            .errors
            .iter()
            .map(|e| FieldErrorDto {
              field: e.field.clone(),
              message: e.message.clone(),
            })
            .collect(),
        ),
      },
      ApiError::NotFound(msg) => ErrorResponse {
        error: "not_found".to_string(),
        message: msg.clone(),
        details: None,
      },
      ApiError::Internal(msg) => {
        // Don't expose internal error details to clients
        tracing::error!("Internal error: {}", msg);
        ErrorResponse {
          error: "internal_error".to_string(),
          message: "An internal server error occurred".to_string(),
          details: None,
        }
      }
    };

    HttpResponse::build(status)
      .content_type(ContentType::json())
      .json(body)
  }
}

impl From<InvoiceError> for ApiError {
  fn from(error: InvoiceError) -> Self {
    match error {
      InvoiceError::Validation(err) => ApiError::Validation(err),
      InvoiceError::NotFound(_) => ApiError::NotFound("Invoice not found".to_string()),
      InvoiceError::Store(msg) => ApiError::Internal(msg),
    }
  }
}

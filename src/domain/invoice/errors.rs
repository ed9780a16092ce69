use serde::Serialize;
use thiserror::Error;

use super::entities::InvoiceId;

/// One failed constraint, keyed by the offending field.
///
/// Field paths use dotted/indexed notation so the form layer can attach the
/// message to the right input: `business.name`, `items[2].quantity`, `items`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
  pub field: String,
  pub message: String,
}

impl FieldError {
  pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
    Self {
      field: field.into(),
      message: message.into(),
    }
  }
}

/// Validation failure carrying every violated constraint, not just the first.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invoice validation failed: {}", summary(.errors))]
pub struct ValidationError {
  pub errors: Vec<FieldError>,
}

impl ValidationError {
  pub fn new(errors: Vec<FieldError>) -> Self {
    Self { errors }
  }

  /// True when any of the reported errors names `field`.
  pub fn has_field(&self, field: &str) -> bool {
    self.errors.iter().any(|e| e.field == field)
  }
}

fn summary(errors: &[FieldError]) -> String {
  errors
    .iter()
    .map(|e| format!("{}: {}", e.field, e.message))
    .collect::<Vec<_>>()
    .join("; ")
}

#[derive(Debug, Error)]
pub enum InvoiceError {
  #[error(transparent)]
  Validation(#[from] ValidationError),

  #[error("Invoice not found: {0}")]
  NotFound(InvoiceId),

  #[error("Store error: {0}")]
  Store(String),
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_validation_error_display() {
    let err = ValidationError::new(vec![
      FieldError::new("client.name", "Client name is required"),
      FieldError::new("items", "At least one item is required"),
    ]);

    let rendered = err.to_string();
    assert!(rendered.contains("client.name: Client name is required"));
    assert!(rendered.contains("items: At least one item is required"));
  }

  #[test]
  fn test_has_field() {
    let err = ValidationError::new(vec![FieldError::new("tax_rate", "bad")]);
    assert!(err.has_field("tax_rate"));
    assert!(!err.has_field("items"));
  }
}

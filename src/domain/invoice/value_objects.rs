use chrono::Datelike;
use rand::Rng;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use validator::ValidateEmail;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValueObjectError {
  #[error("Invalid invoice number: {0}")]
  InvalidInvoiceNumber(String),
  #[error("Invalid name: {0}")]
  InvalidName(String),
  #[error("Invalid address: {0}")]
  InvalidAddress(String),
  #[error("Invalid email: {0}")]
  InvalidEmail(String),
  #[error("Invalid phone: {0}")]
  InvalidPhone(String),
  #[error("Invalid description: {0}")]
  InvalidDescription(String),
  #[error("Invalid quantity: {0}")]
  InvalidQuantity(String),
  #[error("Invalid price: {0}")]
  InvalidPrice(String),
  #[error("Invalid tax rate: {0}")]
  InvalidTaxRate(String),
}

impl ValueObjectError {
  /// The human-readable reason without the error-kind prefix, suitable for
  /// inline display next to a form field.
  pub fn reason(&self) -> &str {
    match self {
      ValueObjectError::InvalidInvoiceNumber(msg)
      | ValueObjectError::InvalidName(msg)
      | ValueObjectError::InvalidAddress(msg)
      | ValueObjectError::InvalidEmail(msg)
      | ValueObjectError::InvalidPhone(msg)
      | ValueObjectError::InvalidDescription(msg)
      | ValueObjectError::InvalidQuantity(msg)
      | ValueObjectError::InvalidPrice(msg)
      | ValueObjectError::InvalidTaxRate(msg) => msg,
    }
  }
}

// Invoice Number - User-editable text field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceNumber(String);

impl InvoiceNumber {
  pub fn new(value: String) -> Result<Self, ValueObjectError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
      return Err(ValueObjectError::InvalidInvoiceNumber(
        "Invoice number is required".to_string(),
      ));
    }
    if trimmed.len() > 100 {
      return Err(ValueObjectError::InvalidInvoiceNumber(
        "Invoice number cannot exceed 100 characters".to_string(),
      ));
    }
    Ok(Self(trimmed.to_string()))
  }

  /// Generate a default number in the `INV-<year>-<month><3 digits>` form
  /// offered to users when a new invoice form is opened.
  pub fn generate() -> Self {
    let today = chrono::Utc::now().date_naive();
    let suffix: u32 = rand::thread_rng().gen_range(0..1000);
    Self(format!(
      "INV-{}-{:02}{:03}",
      today.year(),
      today.month(),
      suffix
    ))
  }

  pub fn value(&self) -> &str {
    &self.0
  }

  pub fn into_inner(self) -> String {
    self.0
  }
}

impl fmt::Display for InvoiceNumber {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}

// Party Name - business or client display name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartyName(String);

impl PartyName {
  pub fn new(value: String) -> Result<Self, ValueObjectError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
      return Err(ValueObjectError::InvalidName(
        "Name is required".to_string(),
      ));
    }
    if trimmed.len() > 255 {
      return Err(ValueObjectError::InvalidName(
        "Name cannot exceed 255 characters".to_string(),
      ));
    }
    Ok(Self(trimmed.to_string()))
  }

  pub fn value(&self) -> &str {
    &self.0
  }
}

// Postal Address - free-form text blob as entered on the form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostalAddress(String);

impl PostalAddress {
  pub fn new(value: String) -> Result<Self, ValueObjectError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
      return Err(ValueObjectError::InvalidAddress(
        "Address is required".to_string(),
      ));
    }
    if trimmed.len() > 500 {
      return Err(ValueObjectError::InvalidAddress(
        "Address cannot exceed 500 characters".to_string(),
      ));
    }
    Ok(Self(trimmed.to_string()))
  }

  pub fn value(&self) -> &str {
    &self.0
  }
}

// Email Address - syntax checked only, no deliverability guarantees
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailAddress(String);

impl EmailAddress {
  pub fn new(value: String) -> Result<Self, ValueObjectError> {
    let trimmed = value.trim();
    if !trimmed.validate_email() {
      return Err(ValueObjectError::InvalidEmail(
        "Invalid email address".to_string(),
      ));
    }
    Ok(Self(trimmed.to_string()))
  }

  pub fn value(&self) -> &str {
    &self.0
  }
}

impl fmt::Display for EmailAddress {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}

// Phone Number - free-form text, required for the issuing business only
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhoneNumber(String);

impl PhoneNumber {
  pub fn new(value: String) -> Result<Self, ValueObjectError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
      return Err(ValueObjectError::InvalidPhone(
        "Phone is required".to_string(),
      ));
    }
    if trimmed.len() > 50 {
      return Err(ValueObjectError::InvalidPhone(
        "Phone cannot exceed 50 characters".to_string(),
      ));
    }
    Ok(Self(trimmed.to_string()))
  }

  pub fn value(&self) -> &str {
    &self.0
  }
}

// Line Item Description
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Description(String);

impl Description {
  pub fn new(value: String) -> Result<Self, ValueObjectError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
      return Err(ValueObjectError::InvalidDescription(
        "Item description is required".to_string(),
      ));
    }
    if trimmed.len() > 500 {
      return Err(ValueObjectError::InvalidDescription(
        "Item description cannot exceed 500 characters".to_string(),
      ));
    }
    Ok(Self(trimmed.to_string()))
  }

  pub fn value(&self) -> &str {
    &self.0
  }
}

// Quantity - at least one unit, fractional quantities allowed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quantity(Decimal);

impl Quantity {
  pub fn new(value: Decimal) -> Result<Self, ValueObjectError> {
    if value < Decimal::ONE {
      return Err(ValueObjectError::InvalidQuantity(
        "Quantity must be at least 1".to_string(),
      ));
    }
    Ok(Self(value))
  }

  pub fn value(&self) -> Decimal {
    self.0
  }
}

// Unit Price - non-negative, full precision kept internally
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitPrice(Decimal);

impl UnitPrice {
  pub fn new(value: Decimal) -> Result<Self, ValueObjectError> {
    if value.is_sign_negative() {
      return Err(ValueObjectError::InvalidPrice(
        "Price must be a positive number".to_string(),
      ));
    }
    Ok(Self(value))
  }

  pub fn value(&self) -> Decimal {
    self.0
  }
}

// Tax Rate - percentage applied to the invoice subtotal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxRate(Decimal);

impl TaxRate {
  pub fn new(value: Decimal) -> Result<Self, ValueObjectError> {
    if value.is_sign_negative() {
      return Err(ValueObjectError::InvalidTaxRate(
        "Tax rate must be a positive number".to_string(),
      ));
    }
    Ok(Self(value))
  }

  pub fn value(&self) -> Decimal {
    self.0
  }

  pub fn as_multiplier(&self) -> Decimal {
    self.0 / Decimal::from(100)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use rust_decimal_macros::dec;

  #[test]
  fn test_invoice_number() {
    assert!(InvoiceNumber::new("INV-001".to_string()).is_ok());
    assert!(InvoiceNumber::new("".to_string()).is_err());
    assert!(InvoiceNumber::new("   ".to_string()).is_err());
    assert!(InvoiceNumber::new("x".repeat(101)).is_err());
    assert_eq!(
      InvoiceNumber::new("  INV-005  ".to_string())
        .unwrap()
        .to_string(),
      "INV-005"
    );
  }

  #[test]
  fn test_invoice_number_generate() {
    let number = InvoiceNumber::generate();
    assert!(number.value().starts_with("INV-"));
    // A generated number must pass its own validation
    assert!(InvoiceNumber::new(number.into_inner()).is_ok());
  }

  #[test]
  fn test_party_name() {
    assert!(PartyName::new("Acme Corp".to_string()).is_ok());
    assert!(PartyName::new("".to_string()).is_err());
    assert!(PartyName::new("x".repeat(256)).is_err());
  }

  #[test]
  fn test_postal_address() {
    assert!(PostalAddress::new("12 Main St\nSpringfield".to_string()).is_ok());
    assert!(PostalAddress::new("  ".to_string()).is_err());
  }

  #[test]
  fn test_email_address() {
    assert!(EmailAddress::new("billing@acme.com".to_string()).is_ok());
    assert!(EmailAddress::new("not-an-email".to_string()).is_err());
    assert!(EmailAddress::new("".to_string()).is_err());
    assert_eq!(
      EmailAddress::new(" billing@acme.com ".to_string())
        .unwrap()
        .value(),
      "billing@acme.com"
    );
  }

  #[test]
  fn test_phone_number() {
    assert!(PhoneNumber::new("+1 555 0100".to_string()).is_ok());
    assert!(PhoneNumber::new("".to_string()).is_err());
  }

  #[test]
  fn test_quantity() {
    assert!(Quantity::new(dec!(1)).is_ok());
    assert!(Quantity::new(dec!(2.5)).is_ok());
    assert!(Quantity::new(dec!(0)).is_err());
    assert!(Quantity::new(dec!(0.99)).is_err());
    assert!(Quantity::new(dec!(-1)).is_err());
  }

  #[test]
  fn test_unit_price() {
    assert!(UnitPrice::new(dec!(0)).is_ok());
    assert!(UnitPrice::new(dec!(19.99)).is_ok());
    assert!(UnitPrice::new(dec!(-0.01)).is_err());
  }

  #[test]
  fn test_tax_rate() {
    assert!(TaxRate::new(dec!(0)).is_ok());
    assert!(TaxRate::new(dec!(8)).is_ok());
    assert!(TaxRate::new(dec!(-1)).is_err());
    assert_eq!(TaxRate::new(dec!(25)).unwrap().as_multiplier(), dec!(0.25));
  }

  #[test]
  fn test_value_object_error_reason() {
    let err = PartyName::new("".to_string()).unwrap_err();
    assert_eq!(err.reason(), "Name is required");
  }
}

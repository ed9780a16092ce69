use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::invoice::entities::{Invoice, LineItem, Party, StoredInvoice, round_money};
use crate::domain::invoice::validation::{InvoiceDraft, LineItemDraft, PartyDraft};

/// Raw party fields as submitted.
///
/// Every field defaults so that an absent value surfaces as a per-field
/// validation error instead of a deserialization failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PartyRequest {
  #[serde(default)]
  pub name: String,
  #[serde(default)]
  pub address: String,
  #[serde(default)]
  pub email: String,
  #[serde(default)]
  pub phone: Option<String>,
}

impl PartyRequest {
  fn into_draft(self) -> PartyDraft {
    PartyDraft {
      name: self.name,
      address: self.address,
      email: self.email,
      phone: self.phone,
    }
  }
}

/// Raw line item fields as submitted.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LineItemRequest {
  #[serde(default)]
  pub description: String,
  #[serde(default)]
  pub quantity: Decimal,
  #[serde(default)]
  pub unit_price: Decimal,
}

impl LineItemRequest {
  fn into_draft(self) -> LineItemDraft {
    LineItemDraft {
      description: self.description,
      quantity: self.quantity,
      unit_price: self.unit_price,
    }
  }
}

/// Request body for creating or previewing an invoice.
///
/// The optional `subtotal`, `tax_amount` and `total` fields are accepted for
/// compatibility with form submissions that echo displayed values back, but
/// they are never trusted - totals are recomputed during validation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateInvoiceRequest {
  #[serde(default)]
  pub invoice_number: String,
  #[serde(default)]
  pub issue_date: String,
  #[serde(default)]
  pub due_date: String,
  #[serde(default)]
  pub business: PartyRequest,
  #[serde(default)]
  pub client: PartyRequest,
  #[serde(default)]
  pub items: Vec<LineItemRequest>,
  #[serde(default)]
  pub tax_rate: Decimal,
  #[serde(default)]
  pub notes: Option<String>,
  #[serde(default)]
  pub subtotal: Option<Decimal>,
  #[serde(default)]
  pub tax_amount: Option<Decimal>,
  #[serde(default)]
  pub total: Option<Decimal>,
}

impl CreateInvoiceRequest {
  pub fn into_draft(self) -> InvoiceDraft {
    InvoiceDraft {
      invoice_number: self.invoice_number,
      issue_date: self.issue_date,
      due_date: self.due_date,
      business: self.business.into_draft(),
      client: self.client.into_draft(),
      items: self.items.into_iter().map(LineItemRequest::into_draft).collect(),
      tax_rate: self.tax_rate,
      notes: self.notes,
      subtotal: self.subtotal,
      tax_amount: self.tax_amount,
      total: self.total,
    }
  }
}

/// Party fields in a response
#[derive(Debug, Clone, Serialize)]
pub struct PartyDto {
  pub name: String,
  pub address: String,
  pub email: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub phone: Option<String>,
}

impl From<&Party> for PartyDto {
  fn from(party: &Party) -> Self {
    Self {
      name: party.name.value().to_string(),
      address: party.address.value().to_string(),
      email: party.email.value().to_string(),
      phone: party.phone.as_ref().map(|p| p.value().to_string()),
    }
  }
}

/// One billable row in a response, with its recomputed amount
#[derive(Debug, Clone, Serialize)]
pub struct LineItemDto {
  pub description: String,
  pub quantity: Decimal,
  pub unit_price: Decimal,
  pub amount: Decimal,
}

impl From<&LineItem> for LineItemDto {
  fn from(item: &LineItem) -> Self {
    Self {
      description: item.description.value().to_string(),
      quantity: item.quantity.value(),
      unit_price: item.unit_price.value(),
      amount: round_money(item.amount()),
    }
  }
}

/// A fully resolved invoice with totals rounded for presentation
#[derive(Debug, Clone, Serialize)]
pub struct InvoiceDto {
  pub invoice_number: String,
  pub issue_date: NaiveDate,
  pub due_date: NaiveDate,
  pub business: PartyDto,
  pub client: PartyDto,
  pub items: Vec<LineItemDto>,
  pub tax_rate: Decimal,
  pub subtotal: Decimal,
  pub tax_amount: Decimal,
  pub total: Decimal,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub notes: Option<String>,
}

impl From<&Invoice> for InvoiceDto {
  fn from(invoice: &Invoice) -> Self {
    let totals = invoice.totals.rounded();
    Self {
      invoice_number: invoice.invoice_number.value().to_string(),
      issue_date: invoice.issue_date,
      due_date: invoice.due_date,
      business: PartyDto::from(&invoice.business),
      client: PartyDto::from(&invoice.client),
      items: invoice.items.iter().map(LineItemDto::from).collect(),
      tax_rate: invoice.tax_rate.value(),
      subtotal: totals.subtotal,
      tax_amount: totals.tax_amount,
      total: totals.total,
      notes: invoice.notes.clone(),
    }
  }
}

/// A stored invoice: the invoice fields plus its assigned identifier
#[derive(Debug, Clone, Serialize)]
pub struct StoredInvoiceDto {
  pub id: u64,
  #[serde(flatten)]
  pub invoice: InvoiceDto,
}

impl From<&StoredInvoice> for StoredInvoiceDto {
  fn from(stored: &StoredInvoice) -> Self {
    Self {
      id: stored.id.value(),
      invoice: InvoiceDto::from(&stored.invoice),
    }
  }
}

/// Response listing all stored invoices in insertion order
#[derive(Debug, Clone, Serialize)]
pub struct ListInvoicesResponse {
  pub invoices: Vec<StoredInvoiceDto>,
}

/// Suggested number for a new invoice form
#[derive(Debug, Clone, Serialize)]
pub struct NextInvoiceNumberResponse {
  pub invoice_number: String,
}

/// One field-level validation failure
#[derive(Debug, Clone, Serialize)]
pub struct FieldErrorDto {
  pub field: String,
  pub message: String,
}

/// Standard error payload
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
  pub error: String,
  pub message: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub details: Option<Vec<FieldErrorDto>>,
}

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::value_objects::{
  Description, EmailAddress, InvoiceNumber, PartyName, PhoneNumber, PostalAddress, Quantity,
  TaxRate, UnitPrice,
};

/// Round a monetary amount to two decimal places for presentation.
///
/// Internal arithmetic keeps full precision; rounding happens once, at the
/// boundary where values are shown or serialized.
pub fn round_money(amount: Decimal) -> Decimal {
  amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

// Party - the issuing business or the billed client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Party {
  pub name: PartyName,
  pub address: PostalAddress,
  pub email: EmailAddress,
  /// Present for the issuing business, absent for the client.
  pub phone: Option<PhoneNumber>,
}

// Line Item - one billable row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
  pub description: Description,
  pub quantity: Quantity,
  pub unit_price: UnitPrice,
}

impl LineItem {
  pub fn new(description: Description, quantity: Quantity, unit_price: UnitPrice) -> Self {
    Self {
      description,
      quantity,
      unit_price,
    }
  }

  /// Line amount, always recomputed from quantity and price.
  pub fn amount(&self) -> Decimal {
    self.quantity.value() * self.unit_price.value()
  }
}

// Invoice Totals - derived, recomputed from line items and tax rate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceTotals {
  pub subtotal: Decimal,
  pub tax_amount: Decimal,
  pub total: Decimal,
}

impl InvoiceTotals {
  /// Compute subtotal, tax amount and total from scratch.
  ///
  /// Each line amount is computed at full precision and summed left to right;
  /// tax is applied to the subtotal as `subtotal * rate / 100`. Pure and
  /// deterministic: the same inputs always yield the same totals.
  pub fn calculate(items: &[LineItem], tax_rate: TaxRate) -> Self {
    let subtotal = items
      .iter()
      .fold(Decimal::ZERO, |acc, item| acc + item.amount());
    let tax_amount = subtotal * tax_rate.as_multiplier();
    let total = subtotal + tax_amount;

    Self {
      subtotal,
      tax_amount,
      total,
    }
  }

  /// Presentation copy with every amount rounded to two decimal places.
  pub fn rounded(&self) -> Self {
    Self {
      subtotal: round_money(self.subtotal),
      tax_amount: round_money(self.tax_amount),
      total: round_money(self.total),
    }
  }
}

// Invoice - a fully validated, immutable invoice document
//
// Construction goes through `Invoice::new`, which recomputes the derived
// totals; caller-supplied totals can never end up here. Changing an invoice
// means building a new one from an edited draft.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invoice {
  pub invoice_number: InvoiceNumber,
  pub issue_date: NaiveDate,
  pub due_date: NaiveDate,
  pub business: Party,
  pub client: Party,
  pub items: Vec<LineItem>,
  pub tax_rate: TaxRate,
  pub totals: InvoiceTotals,
  pub notes: Option<String>,
}

impl Invoice {
  #[allow(clippy::too_many_arguments)]
  pub fn new(
    invoice_number: InvoiceNumber,
    issue_date: NaiveDate,
    due_date: NaiveDate,
    business: Party,
    client: Party,
    items: Vec<LineItem>,
    tax_rate: TaxRate,
    notes: Option<String>,
  ) -> Self {
    let totals = InvoiceTotals::calculate(&items, tax_rate);
    Self {
      invoice_number,
      issue_date,
      due_date,
      business,
      client,
      items,
      tax_rate,
      totals,
      notes,
    }
  }
}

/// Store-assigned invoice identifier, starting at 1 and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InvoiceId(pub u64);

impl InvoiceId {
  pub fn value(&self) -> u64 {
    self.0
  }
}

impl fmt::Display for InvoiceId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}

// Stored Invoice - an invoice plus its store-assigned identifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredInvoice {
  pub id: InvoiceId,
  pub invoice: Invoice,
}

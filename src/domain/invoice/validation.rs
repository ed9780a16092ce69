use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::entities::{Invoice, LineItem, Party};
use super::errors::{FieldError, ValidationError};
use super::value_objects::{
  Description, EmailAddress, InvoiceNumber, PartyName, PhoneNumber, PostalAddress, Quantity,
  TaxRate, UnitPrice,
};

/// Raw party data as submitted from the form, before any checking.
#[derive(Debug, Clone, Default)]
pub struct PartyDraft {
  pub name: String,
  pub address: String,
  pub email: String,
  pub phone: Option<String>,
}

/// Raw line item data as submitted from the form.
#[derive(Debug, Clone)]
pub struct LineItemDraft {
  pub description: String,
  pub quantity: Decimal,
  pub unit_price: Decimal,
}

/// An unstructured record purporting to be an invoice.
///
/// Dates arrive as `YYYY-MM-DD` strings so that a missing or malformed date is
/// reported as a field error rather than a deserialization failure. The
/// optional `subtotal`, `tax_amount` and `total` fields exist only because
/// submitted forms may carry them; they are discarded and recomputed.
#[derive(Debug, Clone)]
pub struct InvoiceDraft {
  pub invoice_number: String,
  pub issue_date: String,
  pub due_date: String,
  pub business: PartyDraft,
  pub client: PartyDraft,
  pub items: Vec<LineItemDraft>,
  pub tax_rate: Decimal,
  pub notes: Option<String>,
  pub subtotal: Option<Decimal>,
  pub tax_amount: Option<Decimal>,
  pub total: Option<Decimal>,
}

/// Which side of the invoice a party draft belongs to. The issuing business
/// must carry a phone number; the client never does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PartyRole {
  Business,
  Client,
}

impl PartyRole {
  fn prefix(&self) -> &'static str {
    match self {
      PartyRole::Business => "business",
      PartyRole::Client => "client",
    }
  }

  fn label(&self) -> &'static str {
    match self {
      PartyRole::Business => "Business",
      PartyRole::Client => "Client",
    }
  }
}

/// Validate a raw draft and produce an immutable invoice with freshly
/// computed totals.
///
/// Every violated constraint is collected; validation never stops at the
/// first failure. Caller-supplied derived totals in the draft are ignored -
/// `Invoice::new` recomputes them from the validated line items and tax rate.
pub fn validate(draft: InvoiceDraft) -> Result<Invoice, ValidationError> {
  let mut errors = Vec::new();

  let invoice_number = match InvoiceNumber::new(draft.invoice_number) {
    Ok(number) => Some(number),
    Err(e) => {
      errors.push(FieldError::new("invoice_number", e.reason()));
      None
    }
  };

  let issue_date = parse_date(&draft.issue_date, "issue_date", "Invoice date", &mut errors);
  let due_date = parse_date(&draft.due_date, "due_date", "Due date", &mut errors);

  let business = validate_party(draft.business, PartyRole::Business, &mut errors);
  let client = validate_party(draft.client, PartyRole::Client, &mut errors);

  let items = validate_items(draft.items, &mut errors);

  let tax_rate = match TaxRate::new(draft.tax_rate) {
    Ok(rate) => Some(rate),
    Err(e) => {
      errors.push(FieldError::new("tax_rate", e.reason()));
      None
    }
  };

  if !errors.is_empty() {
    return Err(ValidationError::new(errors));
  }

  // All fields validated above; the unwraps cannot fire once errors is empty.
  Ok(Invoice::new(
    invoice_number.unwrap(),
    issue_date.unwrap(),
    due_date.unwrap(),
    business.unwrap(),
    client.unwrap(),
    items.unwrap(),
    tax_rate.unwrap(),
    draft.notes.filter(|n| !n.trim().is_empty()),
  ))
}

fn parse_date(
  raw: &str,
  field: &str,
  label: &str,
  errors: &mut Vec<FieldError>,
) -> Option<NaiveDate> {
  let trimmed = raw.trim();
  if trimmed.is_empty() {
    errors.push(FieldError::new(field, format!("{} is required", label)));
    return None;
  }
  match NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
    Ok(date) => Some(date),
    Err(_) => {
      errors.push(FieldError::new(
        field,
        format!("{} must be a valid date (YYYY-MM-DD)", label),
      ));
      None
    }
  }
}

fn validate_party(
  draft: PartyDraft,
  role: PartyRole,
  errors: &mut Vec<FieldError>,
) -> Option<Party> {
  let before = errors.len();

  let name = PartyName::new(draft.name)
    .map_err(|_| {
      errors.push(FieldError::new(
        format!("{}.name", role.prefix()),
        format!("{} name is required", role.label()),
      ));
    })
    .ok();

  let address = PostalAddress::new(draft.address)
    .map_err(|_| {
      errors.push(FieldError::new(
        format!("{}.address", role.prefix()),
        format!("{} address is required", role.label()),
      ));
    })
    .ok();

  let email = EmailAddress::new(draft.email)
    .map_err(|e| {
      errors.push(FieldError::new(
        format!("{}.email", role.prefix()),
        e.reason(),
      ));
    })
    .ok();

  let phone = match role {
    PartyRole::Business => match draft.phone {
      Some(raw) if !raw.trim().is_empty() => PhoneNumber::new(raw)
        .map_err(|e| {
          errors.push(FieldError::new("business.phone", e.reason()));
        })
        .ok()
        .map(Some),
      _ => {
        errors.push(FieldError::new("business.phone", "Business phone is required"));
        None
      }
    },
    // Clients carry no phone; silently drop whatever was submitted.
    PartyRole::Client => Some(None),
  };

  if errors.len() > before {
    return None;
  }

  Some(Party {
    name: name?,
    address: address?,
    email: email?,
    phone: phone?,
  })
}

fn validate_items(
  drafts: Vec<LineItemDraft>,
  errors: &mut Vec<FieldError>,
) -> Option<Vec<LineItem>> {
  if drafts.is_empty() {
    errors.push(FieldError::new("items", "At least one item is required"));
    return None;
  }

  let before = errors.len();
  let mut items = Vec::with_capacity(drafts.len());

  for (index, draft) in drafts.into_iter().enumerate() {
    let description = Description::new(draft.description)
      .map_err(|e| {
        errors.push(FieldError::new(
          format!("items[{}].description", index),
          e.reason(),
        ));
      })
      .ok();

    let quantity = Quantity::new(draft.quantity)
      .map_err(|e| {
        errors.push(FieldError::new(
          format!("items[{}].quantity", index),
          e.reason(),
        ));
      })
      .ok();

    let unit_price = UnitPrice::new(draft.unit_price)
      .map_err(|e| {
        errors.push(FieldError::new(
          format!("items[{}].unit_price", index),
          e.reason(),
        ));
      })
      .ok();

    if let (Some(description), Some(quantity), Some(unit_price)) =
      (description, quantity, unit_price)
    {
      items.push(LineItem::new(description, quantity, unit_price));
    }
  }

  if errors.len() > before {
    return None;
  }

  Some(items)
}

#[cfg(test)]
mod tests {
  use super::*;
  use rust_decimal_macros::dec;

  fn valid_draft() -> InvoiceDraft {
    InvoiceDraft {
      invoice_number: "INV-2026-08042".to_string(),
      issue_date: "2026-08-01".to_string(),
      due_date: "2026-08-31".to_string(),
      business: PartyDraft {
        name: "Acme Corp".to_string(),
        address: "1 Acme Way, Springfield".to_string(),
        email: "billing@acme.com".to_string(),
        phone: Some("+1 555 0100".to_string()),
      },
      client: PartyDraft {
        name: "Globex Inc".to_string(),
        address: "9 Globex Rd, Shelbyville".to_string(),
        email: "ap@globex.com".to_string(),
        phone: None,
      },
      items: vec![
        LineItemDraft {
          description: "Design work".to_string(),
          quantity: dec!(2),
          unit_price: dec!(10.00),
        },
        LineItemDraft {
          description: "Hosting".to_string(),
          quantity: dec!(1),
          unit_price: dec!(5.50),
        },
      ],
      tax_rate: dec!(8),
      notes: Some("Payable within 30 days".to_string()),
      subtotal: None,
      tax_amount: None,
      total: None,
    }
  }

  #[test]
  fn test_valid_draft_passes() {
    let invoice = validate(valid_draft()).unwrap();
    assert_eq!(invoice.invoice_number.value(), "INV-2026-08042");
    assert_eq!(invoice.items.len(), 2);
    assert_eq!(invoice.totals.subtotal, dec!(25.50));
    assert_eq!(invoice.totals.tax_amount, dec!(2.04));
    assert_eq!(invoice.totals.total, dec!(27.54));
    assert!(invoice.business.phone.is_some());
    assert!(invoice.client.phone.is_none());
  }

  #[test]
  fn test_caller_supplied_totals_are_discarded() {
    let mut draft = valid_draft();
    draft.subtotal = Some(dec!(9999));
    draft.tax_amount = Some(dec!(9999));
    draft.total = Some(dec!(9999));

    let invoice = validate(draft).unwrap();
    assert_eq!(invoice.totals.subtotal, dec!(25.50));
    assert_eq!(invoice.totals.total, dec!(27.54));
  }

  #[test]
  fn test_missing_client_name_reports_only_that_field() {
    let mut draft = valid_draft();
    draft.client.name = "".to_string();

    let err = validate(draft).unwrap_err();
    assert_eq!(err.errors.len(), 1);
    assert_eq!(err.errors[0].field, "client.name");
    assert_eq!(err.errors[0].message, "Client name is required");
  }

  #[test]
  fn test_empty_items_reports_items_field() {
    let mut draft = valid_draft();
    draft.items.clear();

    let err = validate(draft).unwrap_err();
    assert!(err.has_field("items"));
    assert_eq!(err.errors.len(), 1);
    assert_eq!(err.errors[0].message, "At least one item is required");
  }

  #[test]
  fn test_all_violations_collected() {
    let draft = InvoiceDraft {
      invoice_number: "".to_string(),
      issue_date: "".to_string(),
      due_date: "not-a-date".to_string(),
      business: PartyDraft {
        name: "".to_string(),
        address: "".to_string(),
        email: "nope".to_string(),
        phone: None,
      },
      client: PartyDraft {
        name: "".to_string(),
        address: "".to_string(),
        email: "also-nope".to_string(),
        phone: None,
      },
      items: vec![LineItemDraft {
        description: "".to_string(),
        quantity: dec!(0),
        unit_price: dec!(-1),
      }],
      tax_rate: dec!(-5),
      notes: None,
      subtotal: None,
      tax_amount: None,
      total: None,
    };

    let err = validate(draft).unwrap_err();
    for field in [
      "invoice_number",
      "issue_date",
      "due_date",
      "business.name",
      "business.address",
      "business.email",
      "business.phone",
      "client.name",
      "client.address",
      "client.email",
      "items[0].description",
      "items[0].quantity",
      "items[0].unit_price",
      "tax_rate",
    ] {
      assert!(err.has_field(field), "missing field error for {}", field);
    }
    assert_eq!(err.errors.len(), 14);
  }

  #[test]
  fn test_item_errors_are_indexed() {
    let mut draft = valid_draft();
    draft.items[1].quantity = dec!(0.5);

    let err = validate(draft).unwrap_err();
    assert_eq!(err.errors.len(), 1);
    assert_eq!(err.errors[0].field, "items[1].quantity");
    assert_eq!(err.errors[0].message, "Quantity must be at least 1");
  }

  #[test]
  fn test_client_phone_is_dropped() {
    let mut draft = valid_draft();
    draft.client.phone = Some("+45 1234".to_string());

    let invoice = validate(draft).unwrap();
    assert!(invoice.client.phone.is_none());
  }

  #[test]
  fn test_malformed_date() {
    let mut draft = valid_draft();
    draft.issue_date = "08/01/2026".to_string();

    let err = validate(draft).unwrap_err();
    assert_eq!(err.errors.len(), 1);
    assert_eq!(err.errors[0].field, "issue_date");
  }

  #[test]
  fn test_revalidation_is_idempotent() {
    let invoice = validate(valid_draft()).unwrap();

    // Rebuild a draft from the validated invoice and run it through again.
    let rebuilt = InvoiceDraft {
      invoice_number: invoice.invoice_number.value().to_string(),
      issue_date: invoice.issue_date.format("%Y-%m-%d").to_string(),
      due_date: invoice.due_date.format("%Y-%m-%d").to_string(),
      business: PartyDraft {
        name: invoice.business.name.value().to_string(),
        address: invoice.business.address.value().to_string(),
        email: invoice.business.email.value().to_string(),
        phone: invoice.business.phone.as_ref().map(|p| p.value().to_string()),
      },
      client: PartyDraft {
        name: invoice.client.name.value().to_string(),
        address: invoice.client.address.value().to_string(),
        email: invoice.client.email.value().to_string(),
        phone: None,
      },
      items: invoice
        .items
        .iter()
        .map(|i| LineItemDraft {
          description: i.description.value().to_string(),
          quantity: i.quantity.value(),
          unit_price: i.unit_price.value(),
        })
        .collect(),
      tax_rate: invoice.tax_rate.value(),
      notes: invoice.notes.clone(),
      subtotal: Some(invoice.totals.subtotal),
      tax_amount: Some(invoice.totals.tax_amount),
      total: Some(invoice.totals.total),
    };

    let second = validate(rebuilt).unwrap();
    assert_eq!(second, invoice);
  }
}

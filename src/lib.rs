//! InvoiceForge - invoice creation service
//!
//! Validates raw invoice submissions, computes derived totals from line items
//! and a tax rate, and retains validated invoices in an append-only in-memory
//! store behind a small JSON API.

pub mod adapters;
pub mod application;
pub mod domain;
pub mod infrastructure;

//! Application layer
//!
//! Use cases that orchestrate domain logic to implement application-specific
//! workflows. Each use case wraps the domain service behind a small
//! command/response surface consumed by the HTTP adapter.

pub mod invoice;

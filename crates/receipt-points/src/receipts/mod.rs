//! Receipt intake, validation, and points scoring.
//!
//! [`validate`] and [`score`] are the pure core: neither touches storage or
//! performs I/O, so both can be called from any number of request tasks. The
//! [`ReceiptService`] composes them with an injected [`ReceiptRepository`] and
//! [`receipt_router`] exposes the service over HTTP.

pub mod domain;
pub mod loader;
pub mod repository;
pub mod router;
pub mod scoring;
pub mod service;
pub mod validation;

#[cfg(test)]
mod tests;

pub use domain::{Cents, LineItem, Receipt, ReceiptId};
pub use loader::{load_receipt, ReceiptLoadError};
pub use repository::{ReceiptRecord, ReceiptRepository, RepositoryError};
pub use router::receipt_router;
pub use scoring::{score, ScoreBreakdown, ScoreComponent, ScoringRule};
pub use service::{ReceiptService, ReceiptServiceError};
pub use validation::{validate, ValidationReport, Violation, ViolationKind};

use std::sync::Arc;

use tracing::{debug, info, warn};

use super::domain::{Receipt, ReceiptId};
use super::repository::{ReceiptRecord, ReceiptRepository, RepositoryError};
use super::scoring::{score, ScoreBreakdown};
use super::validation::{validate, ValidationReport};

/// Service composing validation, scoring, and an injected repository.
pub struct ReceiptService<R> {
    repository: Arc<R>,
}

impl<R> ReceiptService<R>
where
    R: ReceiptRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Validate and store a receipt, returning its new identifier.
    pub fn submit(&self, receipt: Receipt) -> Result<ReceiptId, ReceiptServiceError> {
        if let Err(report) = validate(&receipt) {
            warn!(
                retailer = %receipt.retailer,
                violations = report.len(),
                "receipt rejected"
            );
            return Err(report.into());
        }

        let record = ReceiptRecord {
            id: ReceiptId::generate(),
            receipt,
        };
        let stored = self.repository.insert(record)?;

        info!(receipt_id = %stored.id, items = stored.receipt.items.len(), "receipt stored");
        Ok(stored.id)
    }

    /// Fetch a stored receipt.
    pub fn get(&self, id: &ReceiptId) -> Result<ReceiptRecord, ReceiptServiceError> {
        match self.repository.fetch(id)? {
            Some(record) => Ok(record),
            None => {
                warn!(receipt_id = %id, "receipt not found");
                Err(ReceiptServiceError::NotFound(id.clone()))
            }
        }
    }

    /// Score a stored receipt. The breakdown is recomputed on every call.
    pub fn breakdown(&self, id: &ReceiptId) -> Result<ScoreBreakdown, ReceiptServiceError> {
        let record = self.get(id)?;
        let breakdown = score(&record.receipt);
        debug!(receipt_id = %id, points = breakdown.total_points, "receipt scored");
        Ok(breakdown)
    }

    pub fn points(&self, id: &ReceiptId) -> Result<u64, ReceiptServiceError> {
        self.breakdown(id).map(|breakdown| breakdown.total_points)
    }
}

/// Error raised by the receipt service.
#[derive(Debug, thiserror::Error)]
pub enum ReceiptServiceError {
    #[error("Validation errors: {0}")]
    Validation(#[from] ValidationReport),
    #[error("receipt {0} not found")]
    NotFound(ReceiptId),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

use serde::{Deserialize, Serialize};

use super::domain::{Receipt, ReceiptId};

/// A validated receipt together with the identifier it was stored under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiptRecord {
    pub id: ReceiptId,
    pub receipt: Receipt,
}

/// Storage abstraction so the service module can be exercised in isolation.
///
/// Implementations must make a record visible to `fetch` only once `insert`
/// has fully completed, and must not let concurrent fetches block each other.
pub trait ReceiptRepository: Send + Sync {
    fn insert(&self, record: ReceiptRecord) -> Result<ReceiptRecord, RepositoryError>;
    fn fetch(&self, id: &ReceiptId) -> Result<Option<ReceiptRecord>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

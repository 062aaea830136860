use metrics_exporter_prometheus::PrometheusHandle;
use receipt_points::receipts::{ReceiptId, ReceiptRecord, ReceiptRepository, RepositoryError};
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, RwLock};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Process-lifetime receipt store.
///
/// Inserts take the write lock for the whole insert, so a record is never
/// observable half written; fetches share the read lock.
#[derive(Default, Clone)]
pub(crate) struct InMemoryReceiptRepository {
    records: Arc<RwLock<HashMap<ReceiptId, ReceiptRecord>>>,
}

impl ReceiptRepository for InMemoryReceiptRepository {
    fn insert(&self, record: ReceiptRecord) -> Result<ReceiptRecord, RepositoryError> {
        let mut guard = self
            .records
            .write()
            .map_err(|_| RepositoryError::Unavailable("receipt store lock poisoned".into()))?;
        if guard.contains_key(&record.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.id.clone(), record.clone());
        Ok(record)
    }

    fn fetch(&self, id: &ReceiptId) -> Result<Option<ReceiptRecord>, RepositoryError> {
        let guard = self
            .records
            .read()
            .map_err(|_| RepositoryError::Unavailable("receipt store lock poisoned".into()))?;
        Ok(guard.get(id).cloned())
    }
}

#[cfg(test)]
impl InMemoryReceiptRepository {
    pub(crate) fn len(&self) -> usize {
        self.records.read().map(|guard| guard.len()).unwrap_or(0)
    }
}

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use axum::response::Response;
use serde_json::Value;

use crate::receipts::domain::{LineItem, Receipt, ReceiptId};
use crate::receipts::repository::{ReceiptRecord, ReceiptRepository, RepositoryError};
use crate::receipts::{receipt_router, ReceiptService};

pub(super) fn item(description: &str, price: &str) -> LineItem {
    LineItem::new(description, price)
}

/// Two packs of Skittles at a corner store on an odd afternoon.
pub(super) fn corner_store_receipt() -> Receipt {
    Receipt {
        retailer: "Corner Store".to_string(),
        purchase_date: "2024-12-11".to_string(),
        purchase_time: "15:05".to_string(),
        items: vec![item("Skittles", "1.50"), item("Skittles", "1.50")],
        total: "3.00".to_string(),
    }
}

pub(super) fn target_receipt() -> Receipt {
    Receipt {
        retailer: "Target".to_string(),
        purchase_date: "2022-01-01".to_string(),
        purchase_time: "13:01".to_string(),
        items: vec![
            item("Mountain Dew 12PK", "6.49"),
            item("Emils Cheese Pizza", "12.25"),
            item("Knorr Creamy Chicken", "1.26"),
            item("Doritos Nacho Cheese", "3.35"),
            item("   Klarbrunn 12-PK 12 FL OZ  ", "12.00"),
        ],
        total: "35.35".to_string(),
    }
}

pub(super) fn market_receipt() -> Receipt {
    Receipt {
        retailer: "M&M Corner Market".to_string(),
        purchase_date: "2022-03-20".to_string(),
        purchase_time: "14:33".to_string(),
        items: vec![
            item("Gatorade", "2.25"),
            item("Gatorade", "2.25"),
            item("Gatorade", "2.25"),
            item("Gatorade", "2.25"),
        ],
        total: "9.00".to_string(),
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    records: Arc<RwLock<HashMap<ReceiptId, ReceiptRecord>>>,
}

impl MemoryRepository {
    pub(super) fn len(&self) -> usize {
        self.records.read().expect("repository lock poisoned").len()
    }
}

impl ReceiptRepository for MemoryRepository {
    fn insert(&self, record: ReceiptRecord) -> Result<ReceiptRecord, RepositoryError> {
        let mut guard = self.records.write().expect("repository lock poisoned");
        if guard.contains_key(&record.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.id.clone(), record.clone());
        Ok(record)
    }

    fn fetch(&self, id: &ReceiptId) -> Result<Option<ReceiptRecord>, RepositoryError> {
        let guard = self.records.read().expect("repository lock poisoned");
        Ok(guard.get(id).cloned())
    }
}

pub(super) struct UnavailableRepository;

impl ReceiptRepository for UnavailableRepository {
    fn insert(&self, _record: ReceiptRecord) -> Result<ReceiptRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch(&self, _id: &ReceiptId) -> Result<Option<ReceiptRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) fn build_service() -> (ReceiptService<MemoryRepository>, MemoryRepository) {
    let repository = MemoryRepository::default();
    let service = ReceiptService::new(Arc::new(repository.clone()));
    (service, repository)
}

pub(super) fn router_with_service(service: ReceiptService<MemoryRepository>) -> axum::Router {
    receipt_router(Arc::new(service))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

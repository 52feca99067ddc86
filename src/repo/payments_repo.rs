use crate::domain::payment::PaymentRecord;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

/// In-memory payment store shared by every request task. Records live for the
/// lifetime of the process.
#[derive(Clone, Default)]
pub struct PaymentsRepo {
    inner: Arc<RwLock<HashMap<Uuid, PaymentRecord>>>,
}

impl PaymentsRepo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces an existing record only if the same id is inserted twice.
    pub async fn insert(&self, record: PaymentRecord) {
        let mut write = self.inner.write().await;
        write.insert(record.id, record);
    }

    pub async fn get(&self, id: Uuid) -> Option<PaymentRecord> {
        self.inner.read().await.get(&id).cloned()
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.is_empty()
    }
}

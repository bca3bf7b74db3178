use crate::domain::ports::{PaymentLedger, PaymentRecord, ReferenceSource};
use crate::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};

/// Issues `prefix + counter` references, the counter starting at 1.
///
/// The prefix must only use `[a-zA-Z0-9_-]` for the references to be
/// accepted by the request builder.
#[derive(Clone)]
pub struct SequentialReferenceSource {
    prefix: String,
    counter: Arc<Mutex<u64>>,
}

impl SequentialReferenceSource {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            counter: Arc::new(Mutex::new(0)),
        }
    }
}

#[async_trait]
impl ReferenceSource for SequentialReferenceSource {
    async fn next_reference(&self) -> Result<String> {
        let mut counter = self.counter.lock().await;
        *counter += 1;
        Ok(format!("{}{}", self.prefix, *counter))
    }
}

/// A thread-safe in-memory payment ledger keyed by order id.
///
/// Uses `Arc<RwLock<HashMap<String, PaymentRecord>>>` for shared concurrent
/// access. Nothing survives the process.
#[derive(Default, Clone)]
pub struct InMemoryPaymentLedger {
    records: Arc<RwLock<HashMap<String, PaymentRecord>>>,
}

impl InMemoryPaymentLedger {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PaymentLedger for InMemoryPaymentLedger {
    async fn record(&self, record: PaymentRecord) -> Result<()> {
        let mut records = self.records.write().await;
        records.insert(record.order_id.clone(), record);
        Ok(())
    }

    async fn get(&self, order_id: &str) -> Result<Option<PaymentRecord>> {
        let records = self.records.read().await;
        Ok(records.get(order_id).cloned())
    }
}

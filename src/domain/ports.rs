use crate::error::Result;
use async_trait::async_trait;
use serde::Serialize;

#[derive(Debug, Serialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Paid,
    Cancelled,
    Refused,
}

/// The outcome of an authenticated callback for one order.
#[derive(Debug, Serialize, PartialEq, Eq, Clone)]
pub struct PaymentRecord {
    pub order_id: String,
    pub transaction_reference: String,
    pub status: PaymentStatus,
    pub response_code: String,
}

/// Hands out transaction references, one per payment attempt.
#[async_trait]
pub trait ReferenceSource: Send + Sync {
    async fn next_reference(&self) -> Result<String>;
}

/// Keeps the latest payment outcome of each order.
#[async_trait]
pub trait PaymentLedger: Send + Sync {
    async fn record(&self, record: PaymentRecord) -> Result<()>;
    async fn get(&self, order_id: &str) -> Result<Option<PaymentRecord>>;
}

pub type ReferenceSourceBox = Box<dyn ReferenceSource>;
pub type PaymentLedgerBox = Box<dyn PaymentLedger>;

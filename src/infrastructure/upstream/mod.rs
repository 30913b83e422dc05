pub mod http;
pub mod in_memory;

use crate::core::errors::SettlementError;
use crate::core::models::{DateWindow, Transaction};
use async_trait::async_trait;
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;

/// Filter for one merchant's transactions over one settlement day.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransactionQuery {
    pub merchant_id: String,
    pub window: DateWindow,
}

impl TransactionQuery {
    pub fn new(merchant_id: &str, date: &str) -> Self {
        TransactionQuery {
            merchant_id: merchant_id.to_string(),
            window: DateWindow::for_date(date),
        }
    }

    /// Query string pairs understood by the upstream `/transactions/` endpoint.
    pub fn to_query_pairs(&self) -> [(&'static str, &str); 3] {
        [
            ("merchant", self.merchant_id.as_str()),
            ("created_at__gte", self.window.start()),
            ("created_at__lt", self.window.end()),
        ]
    }
}

/// Body returned by the upstream list endpoint.
#[derive(Debug, Deserialize)]
pub struct TransactionPage {
    pub results: Vec<Transaction>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Attempts made after the first one fails.
    pub max_retries: u32,
    pub backoff: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        RetryPolicy {
            max_retries: 5,
            backoff: Duration::ZERO,
        }
    }
}

impl RetryPolicy {
    pub fn total_attempts(&self) -> u32 {
        self.max_retries.saturating_add(1)
    }
}

#[async_trait]
pub trait TransactionSource: Send + Sync {
    async fn fetch_transactions(&self, query: &TransactionQuery) -> Result<Vec<Transaction>, SettlementError>;
}

pub type SharedSource = Arc<dyn TransactionSource>;

#[async_trait]
impl<T: TransactionSource + ?Sized> TransactionSource for Arc<T> {
    async fn fetch_transactions(&self, query: &TransactionQuery) -> Result<Vec<Transaction>, SettlementError> {
        (**self).fetch_transactions(query).await
    }
}

use crate::core::errors::SettlementError;
use crate::core::models::Transaction;
use crate::infrastructure::upstream::{TransactionQuery, TransactionSource};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Transaction source held in memory, filtering the way the upstream service does.
#[derive(Clone, Default)]
pub struct InMemoryTransactions {
    transactions: Arc<RwLock<Vec<(String, Transaction)>>>,
}

impl InMemoryTransactions {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert(&self, merchant_id: &str, transaction: Transaction) {
        let mut transactions = self.transactions.write().await;
        transactions.push((merchant_id.to_string(), transaction));
    }
}

#[async_trait]
impl TransactionSource for InMemoryTransactions {
    async fn fetch_transactions(&self, query: &TransactionQuery) -> Result<Vec<Transaction>, SettlementError> {
        let transactions = self.transactions.read().await;
        Ok(transactions
            .iter()
            .filter(|(merchant_id, tx)| *merchant_id == query.merchant_id && query.window.contains(&tx.created_at))
            .map(|(_, tx)| tx.clone())
            .collect())
    }
}

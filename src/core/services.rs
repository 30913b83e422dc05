use crate::core::errors::SettlementError;
use crate::core::models::{SettlementResult, Transaction, TransactionType};
use crate::infrastructure::upstream::{SharedSource, TransactionQuery, TransactionSource};
use rust_decimal::Decimal;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// Service as held by the router.
pub type AppService = SettlementService<SharedSource>;

pub const DEFAULT_DEADLINE: Duration = Duration::from_secs(90);

pub struct SettlementService<S: TransactionSource> {
    source: S,
    deadline: Duration,
}

impl<S: TransactionSource> SettlementService<S> {
    pub fn new(source: S) -> Self {
        SettlementService {
            source,
            deadline: DEFAULT_DEADLINE,
        }
    }

    /// Bound on the whole fetch, retries included.
    pub fn with_deadline(mut self, deadline: Duration) -> Self {
        self.deadline = deadline;
        self
    }

    /// Fetches the merchant's transactions for `date` and nets them into a settlement.
    pub async fn compute_settlement(&self, merchant_id: &str, date: &str) -> Result<SettlementResult, SettlementError> {
        let query = TransactionQuery::new(merchant_id, date);
        let transactions = tokio::time::timeout(self.deadline, self.source.fetch_transactions(&query))
            .await
            .map_err(|_| {
                SettlementError::Upstream(format!("Transaction fetch exceeded deadline of {:?}", self.deadline))
            })??;
        let settlement_amount = settlement_amount(&transactions)?;

        info!(
            merchant_id,
            date,
            transactions = transactions.len(),
            %settlement_amount,
            "computed settlement"
        );

        Ok(SettlementResult {
            merchant_id: merchant_id.to_string(),
            date: date.to_string(),
            settlement_amount,
            transactions,
        })
    }
}

impl SettlementService<SharedSource> {
    /// Service over a type-erased source, as held by the router.
    pub fn shared(source: impl TransactionSource + 'static) -> Self {
        Self::new(Arc::new(source))
    }
}

/// Sales minus refunds, in upstream order.
pub fn settlement_amount(transactions: &[Transaction]) -> Result<Decimal, SettlementError> {
    transactions.iter().try_fold(Decimal::ZERO, |total, tx| {
        total.checked_add(tx.signed_amount()?).ok_or_else(|| {
            let direction = match tx.kind {
                TransactionType::Sale => "sale",
                TransactionType::Refund => "refund",
            };
            SettlementError::Upstream(format!("Settlement overflowed adding {} {}", direction, tx.id))
        })
    })
}

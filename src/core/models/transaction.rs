use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use utoipa::ToSchema;

use crate::core::errors::SettlementError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransactionType {
    Sale,
    Refund,
}

/// A transaction as reported by the upstream service. Never mutated locally.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Transaction {
    pub id: String,
    #[schema(example = "100.00")]
    pub amount: String,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    #[schema(example = "2024-06-01T12:34:56Z")]
    pub created_at: String,
}

impl Transaction {
    /// Amount with the sign it contributes to a settlement: sales positive, refunds negative.
    pub fn signed_amount(&self) -> Result<Decimal, SettlementError> {
        let amount = Decimal::from_str(self.amount.trim()).map_err(|e| {
            SettlementError::Upstream(format!(
                "transaction {} has unparseable amount {:?}: {}",
                self.id, self.amount, e
            ))
        })?;
        Ok(match self.kind {
            TransactionType::Sale => amount,
            TransactionType::Refund => -amount,
        })
    }
}

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::transaction::Transaction;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SettlementResult {
    pub merchant_id: String,
    /// Echoed exactly as the caller supplied it.
    #[schema(example = "2024-06-01")]
    pub date: String,
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64, example = 70.0)]
    pub settlement_amount: Decimal,
    pub transactions: Vec<Transaction>,
}

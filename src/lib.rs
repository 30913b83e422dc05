pub mod api;
pub mod config;
pub mod core;
pub mod infrastructure;
pub mod presentation;

pub use crate::core::errors::SettlementError;
pub use crate::core::models::{SettlementResult, Transaction, TransactionType};
pub use crate::core::services::{AppService, SettlementService};
pub use crate::infrastructure::upstream::{
    RetryPolicy, SharedSource, TransactionSource, http::HttpTransactionSource, in_memory::InMemoryTransactions,
};

#[cfg(test)]
mod tests;

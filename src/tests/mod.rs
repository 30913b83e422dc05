mod settlement_tests;

use crate::core::models::{Transaction, TransactionType};
use crate::core::services::{AppService, SettlementService};
use crate::infrastructure::upstream::in_memory::InMemoryTransactions;
use std::sync::Arc;

pub fn sale(id: &str, amount: &str, created_at: &str) -> Transaction {
    Transaction {
        id: id.to_string(),
        amount: amount.to_string(),
        kind: TransactionType::Sale,
        created_at: created_at.to_string(),
    }
}

pub fn refund(id: &str, amount: &str, created_at: &str) -> Transaction {
    Transaction {
        id: id.to_string(),
        amount: amount.to_string(),
        kind: TransactionType::Refund,
        created_at: created_at.to_string(),
    }
}

pub fn create_test_service(source: InMemoryTransactions) -> SettlementService<InMemoryTransactions> {
    SettlementService::new(source)
}

/// Serves the full application on an ephemeral port and returns its base URL.
pub async fn spawn_app(service: AppService) -> String {
    let app = crate::api::app(Arc::new(service));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

/// The app over an in-memory source holding a sale and a refund for `m1` on 2024-03-01.
pub async fn seeded_app() -> String {
    let source = InMemoryTransactions::new();
    source.insert("m1", sale("t1", "100.00", "2024-03-01T09:00:00Z")).await;
    source.insert("m1", refund("t2", "30.00", "2024-03-01T10:00:00Z")).await;
    spawn_app(SettlementService::shared(source)).await
}

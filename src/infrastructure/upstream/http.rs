use crate::core::errors::SettlementError;
use crate::core::models::Transaction;
use crate::infrastructure::upstream::{RetryPolicy, TransactionPage, TransactionQuery, TransactionSource};
use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, warn};

const USER_AGENT: &str = concat!("acme-settlement/", env!("CARGO_PKG_VERSION"));

/// Upstream transaction service reached over HTTP.
pub struct HttpTransactionSource {
    client: reqwest::Client,
    base_url: String,
    retry: RetryPolicy,
}

impl HttpTransactionSource {
    pub fn new(base_url: impl Into<String>, retry: RetryPolicy, timeout: Duration) -> Result<Self, SettlementError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| SettlementError::Internal(format!("Failed to build HTTP client: {}", e)))?;
        Ok(HttpTransactionSource {
            client,
            base_url: base_url.into(),
            retry,
        })
    }

    fn transactions_url(&self) -> String {
        format!("{}/transactions/", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl TransactionSource for HttpTransactionSource {
    /// Re-issues the identical request on any non-success status or transport
    /// error. Once every attempt has failed the fetch is an error; the body of
    /// the last failed response is never used.
    async fn fetch_transactions(&self, query: &TransactionQuery) -> Result<Vec<Transaction>, SettlementError> {
        let url = self.transactions_url();
        let attempts = self.retry.total_attempts();
        let mut last_failure = String::new();

        for attempt in 1..=attempts {
            match self.client.get(&url).query(&query.to_query_pairs()).send().await {
                Ok(resp) if resp.status().is_success() => {
                    let page: TransactionPage = resp.json().await.map_err(|e| {
                        SettlementError::Upstream(format!("Failed to parse transaction list: {}", e))
                    })?;
                    debug!(
                        merchant_id = %query.merchant_id,
                        attempt,
                        count = page.results.len(),
                        "fetched transactions"
                    );
                    return Ok(page.results);
                }
                Ok(resp) => last_failure = format!("HTTP {}", resp.status()),
                Err(e) => last_failure = e.to_string(),
            }

            if attempt < attempts {
                warn!(attempt, attempts, reason = %last_failure, "upstream request failed, retrying");
                if !self.retry.backoff.is_zero() {
                    tokio::time::sleep(self.retry.backoff).await;
                }
            }
        }

        Err(SettlementError::Upstream(format!(
            "Transaction fetch failed after {} attempts: {}",
            attempts, last_failure
        )))
    }
}

use acme_settlement::{HttpTransactionSource, SettlementService, api, config::CONFIG};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    let filter = EnvFilter::try_new(&CONFIG.log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let source = HttpTransactionSource::new(
        CONFIG.upstream_base_url.clone(),
        CONFIG.retry_policy(),
        CONFIG.upstream_timeout(),
    )?;
    let service = Arc::new(SettlementService::shared(source).with_deadline(CONFIG.settlement_deadline()));
    let app = api::app(service);

    // Start server
    let addr = SocketAddr::from(([127, 0, 0, 1], CONFIG.port));
    info!(upstream = %CONFIG.upstream_base_url, "Server running at http://{}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

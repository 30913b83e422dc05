//! Server-rendered settlement page.
//!
//! A submission runs the same request handler path as `GET /api/getSettlement`
//! and drives the form's [`FetchState`] through `begin` and `resolve` before
//! rendering.

pub mod page;
pub mod state;

pub use state::{FetchFailure, FetchState, SettlementForm};

use crate::api::handlers::fetch_settlement;
use crate::api::models::SettlementQuery;
use crate::core::services::AppService;
use axum::{
    Router,
    extract::{Query, State, rejection::QueryRejection},
    response::Html,
    routing::get,
};
use std::sync::Arc;

pub fn page_routes(service: Arc<AppService>) -> Router {
    Router::new().route("/", get(settlement_page)).with_state(service)
}

async fn settlement_page(
    State(service): State<Arc<AppService>>,
    query: Result<Query<SettlementQuery>, QueryRejection>,
) -> Html<String> {
    let (query, submitted) = match query {
        Ok(Query(q)) => {
            let submitted = q.is_submission();
            (q, submitted)
        }
        Err(_) => (SettlementQuery::default(), true),
    };

    let mut form = SettlementForm::new(
        query.merchant_id.clone().unwrap_or_default(),
        query.date.clone().unwrap_or_default(),
    );
    if submitted && form.begin() {
        let outcome = fetch_settlement(&service, query).await.map_err(|e| {
            let (status, error) = e.status_and_message();
            FetchFailure {
                status: status.as_u16(),
                error: error.to_string(),
            }
        });
        form.resolve(outcome);
    }

    Html(page::render_page(&form))
}

use crate::{
    api::models::{ApiError, ErrorResponse, SettlementQuery},
    core::{errors::SettlementError, models::SettlementResult, services::AppService},
};
use axum::{
    Json, Router,
    extract::{Query, State, rejection::QueryRejection},
    routing::get,
};
use std::sync::Arc;
use tracing::error;

pub fn api_routes(service: Arc<AppService>) -> Router {
    Router::new()
        .route(
            "/getSettlement",
            get(get_settlement).head(method_not_allowed).fallback(method_not_allowed),
        )
        .with_state(service)
}

#[utoipa::path(
    get,
    path = "/api/getSettlement",
    params(SettlementQuery),
    responses(
        (status = 200, description = "Settlement computed", body = SettlementResult),
        (status = 400, description = "Missing required parameters", body = ErrorResponse),
        (status = 405, description = "Method Not Allowed", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn get_settlement(
    State(service): State<Arc<AppService>>,
    query: Result<Query<SettlementQuery>, QueryRejection>,
) -> Result<Json<SettlementResult>, ApiError> {
    let query = query.map(|Query(q)| q).unwrap_or_default();
    let settlement = fetch_settlement(&service, query).await?;
    Ok(Json(settlement))
}

async fn method_not_allowed() -> ApiError {
    ApiError(SettlementError::MethodNotAllowed)
}

/// Validates the parameters and runs the aggregation, logging any failure
/// before it is reduced to a generic error.
pub async fn fetch_settlement(service: &AppService, query: SettlementQuery) -> Result<SettlementResult, ApiError> {
    let (merchant_id, date) = query.required().ok_or(SettlementError::MissingParameters)?;
    service.compute_settlement(&merchant_id, &date).await.map_err(|e| {
        error!(merchant_id = %merchant_id, date = %date, error = %e, "Error processing settlement");
        ApiError(e)
    })
}

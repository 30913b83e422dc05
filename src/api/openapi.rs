use utoipa::OpenApi;

use crate::{
    api::models::ErrorResponse,
    core::models::{SettlementResult, Transaction, TransactionType},
};

#[derive(OpenApi)]
#[openapi(
    paths(super::handlers::get_settlement),
    components(schemas(SettlementResult, Transaction, TransactionType, ErrorResponse)),
    info(
        title = "ACME Settlement API",
        description = "Daily merchant settlement computed from upstream transactions",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

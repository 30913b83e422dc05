use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::core::errors::SettlementError;

#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct SettlementQuery {
    /// Merchant whose transactions are settled
    pub merchant_id: Option<String>,
    /// Settlement day, `YYYY-MM-DD`
    pub date: Option<String>,
}

impl SettlementQuery {
    /// Both parameters, when present and non-empty.
    pub fn required(self) -> Option<(String, String)> {
        match (self.merchant_id, self.date) {
            (Some(merchant_id), Some(date)) if !merchant_id.is_empty() && !date.is_empty() => {
                Some((merchant_id, date))
            }
            _ => None,
        }
    }

    /// True once the form has been submitted, even with empty fields.
    pub fn is_submission(&self) -> bool {
        self.merchant_id.is_some() || self.date.is_some()
    }
}

// Error response struct
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

// Newtype wrapper for SettlementError to implement IntoResponse
#[derive(Debug)]
pub struct ApiError(pub SettlementError);

impl From<SettlementError> for ApiError {
    fn from(err: SettlementError) -> Self {
        ApiError(err)
    }
}

impl ApiError {
    /// Status and caller-facing message. Upstream and internal causes are
    /// reduced to a generic message.
    pub fn status_and_message(&self) -> (StatusCode, &'static str) {
        match self.0 {
            SettlementError::MissingParameters => (StatusCode::BAD_REQUEST, "Missing required parameters"),
            SettlementError::MethodNotAllowed => (StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed"),
            SettlementError::Upstream(_) | SettlementError::Internal(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, error_message) = self.status_and_message();
        (
            status,
            Json(ErrorResponse {
                error: error_message.to_string(),
            }),
        )
            .into_response()
    }
}

pub mod handlers;
pub mod models;
pub mod openapi;

use crate::core::services::AppService;
use crate::presentation;
use axum::{Router, http::header, routing::get};
use openapi::ApiDoc;
use std::sync::Arc;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Full application router: settlement page, JSON API, health check and API docs.
pub fn app(service: Arc<AppService>) -> Router {
    Router::new()
        .route("/health", get(|| async { "OK" }))
        .merge(presentation::page_routes(service.clone()))
        .nest("/api", handlers::api_routes(service))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CompressionLayer::new())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([http::Method::GET])
                .allow_headers([header::CONTENT_TYPE]),
        )
        .layer(TraceLayer::new_for_http())
}

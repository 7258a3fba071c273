use std::sync::Arc;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::http::header::InvalidHeaderValue;
use axum::http::{HeaderValue, Method};
use axum::routing::post;
use tower_http::cors::{AllowHeaders, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use pdfparse_core::ServerConfig;

pub mod error;
pub mod handlers;
pub mod models;
pub mod state;
pub mod upload;

use state::AppState;

/// Build the application router.
///
/// Everything lives under `/api`, and only that subtree answers cross-origin
/// requests, from `config.allowed_origin` alone.
pub fn app(state: Arc<AppState>, config: &ServerConfig) -> Result<Router, InvalidHeaderValue> {
    let api = Router::new()
        .route("/parse-pdf", post(handlers::parse_pdf::parse_pdf))
        .layer(cors_layer(&config.allowed_origin)?);

    let body_limit = DefaultBodyLimit::max(config.max_upload_bytes());

    Ok(Router::new()
        .nest("/api", api)
        .layer(body_limit)
        .layer(TraceLayer::new_for_http())
        .with_state(state))
}

/// CORS for a single browser origin. Requests from any other origin get no
/// `access-control-allow-origin` header.
pub fn cors_layer(origin: &str) -> Result<CorsLayer, InvalidHeaderValue> {
    let origin = HeaderValue::from_str(origin)?;
    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list([origin]))
        .allow_methods([
            Method::GET,
            Method::HEAD,
            Method::POST,
            Method::OPTIONS,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
        ])
        .allow_headers(AllowHeaders::mirror_request()))
}

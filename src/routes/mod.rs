use axum::{
    Json, Router,
    extract::DefaultBodyLimit,
    http::{StatusCode, Uri},
    routing::get,
};
use tower_http::{cors::CorsLayer, limit::RequestBodyLimitLayer, services::ServeDir};

use crate::state::AppState;

pub mod accounts;
pub mod admin;
pub mod catalog;
pub mod doc;
pub mod health;

/// Every route the service exposes, plus CORS, body limits and the `/uploads`
/// file server. Tracing and request-id layers are added by the binary.
pub fn create_app(state: AppState, max_body_bytes: usize) -> Router {
    let uploads = ServeDir::new(state.uploads.dir());

    Router::new()
        .route("/health", get(health::health_check))
        .merge(catalog::router())
        .merge(admin::router())
        .nest("/api", accounts::router())
        .nest_service("/uploads", uploads)
        .merge(doc::scalar_docs())
        .fallback(not_found)
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .layer(RequestBodyLimitLayer::new(max_body_bytes))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn not_found(uri: Uri) -> (StatusCode, Json<serde_json::Value>) {
    let body = serde_json::json!({ "error": "Not Found", "path": uri.path() });
    (StatusCode::NOT_FOUND, Json(body))
}

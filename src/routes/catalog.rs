use axum::{Json, Router, extract::State, routing::get};

use crate::{
    error::TextResult,
    models::{CatalogEntry, ShowcaseEntry},
    services::catalog_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/kumaslar", get(list_fabrics))
        .route("/kumaslar/vitrin", get(list_showcase))
}

#[utoipa::path(
    get,
    path = "/kumaslar",
    responses(
        (status = 200, description = "Active catalog entries", body = Vec<CatalogEntry>),
        (status = 500, description = "Storage error", body = String, content_type = "text/plain")
    ),
    tag = "Catalog"
)]
pub async fn list_fabrics(State(state): State<AppState>) -> TextResult<Json<Vec<CatalogEntry>>> {
    let items = catalog_service::list_active_catalog_entries(&state).await?;
    Ok(Json(items))
}

#[utoipa::path(
    get,
    path = "/kumaslar/vitrin",
    responses(
        (status = 200, description = "Showcased catalog entries", body = Vec<ShowcaseEntry>),
        (status = 500, description = "Storage error", body = String, content_type = "text/plain")
    ),
    tag = "Catalog"
)]
pub async fn list_showcase(State(state): State<AppState>) -> TextResult<Json<Vec<ShowcaseEntry>>> {
    let items = catalog_service::list_showcased_catalog_entries(&state).await?;
    Ok(Json(items))
}

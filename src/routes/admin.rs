use axum::{Router, extract::State, routing::post};

use crate::{
    dto::catalog::CatalogUploadForm,
    error::TextResult,
    middleware::swatch_upload::CatalogSubmission,
    services::catalog_service,
    state::AppState,
};

pub const FABRIC_CREATED: &str = "Kumaş başarıyla eklendi";

pub fn router() -> Router<AppState> {
    Router::new().route("/admin/kumas-ekle", post(create_fabric))
}

#[utoipa::path(
    post,
    path = "/admin/kumas-ekle",
    request_body(content = CatalogUploadForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Fabric created", body = String, content_type = "text/plain"),
        (status = 400, description = "Missing or rejected swatch, missing fields", body = String, content_type = "text/plain"),
        (status = 500, description = "Storage error", body = String, content_type = "text/plain")
    ),
    tag = "Admin"
)]
pub async fn create_fabric(
    State(state): State<AppState>,
    submission: CatalogSubmission,
) -> TextResult<&'static str> {
    let CatalogSubmission { form, swatch } = submission;
    catalog_service::create_catalog_entry(&state, form, swatch).await?;
    Ok(FABRIC_CREATED)
}

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{db::ping, state::AppState};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthData {
    pub status: String,
    pub database: bool,
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "OK", body = HealthData),
    ),
        tag = "Health"
)]
pub async fn health_check(State(state): State<AppState>) -> Json<HealthData> {
    let database = ping(&state.pool).await;
    Json(HealthData {
        status: "ok".to_string(),
        database,
    })
}

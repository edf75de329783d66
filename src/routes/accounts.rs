use axum::{
    Json, Router,
    extract::{FromRequest, State},
    http::StatusCode,
    routing::post,
};

use crate::{
    dto::accounts::{LoginRequest, RegisterRequest},
    error::{AppError, AppResult},
    response::{ErrorBody, LoginResponse, MessageResponse},
    services::account_service::{login_account, register_account},
    state::AppState,
};

/// `Json` whose rejections render as `{ "error": ... }` with status 400.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/kayit", post(register))
        .route("/giris", post(login))
}

#[utoipa::path(
    post,
    path = "/api/kayit",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Account created", body = MessageResponse),
        (status = 400, description = "Missing fields", body = ErrorBody),
        (status = 500, description = "Storage error", body = ErrorBody)
    ),
    tag = "Accounts"
)]
pub async fn register(
    State(state): State<AppState>,
    AppJson(payload): AppJson<RegisterRequest>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    let resp = register_account(&state, payload).await?;
    Ok((StatusCode::CREATED, Json(resp)))
}

#[utoipa::path(
    post,
    path = "/api/giris",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Logged in", body = LoginResponse),
        (status = 400, description = "Missing fields", body = ErrorBody),
        (status = 401, description = "Invalid credentials", body = ErrorBody),
        (status = 500, description = "Storage error", body = ErrorBody)
    ),
    tag = "Accounts"
)]
pub async fn login(
    State(state): State<AppState>,
    AppJson(payload): AppJson<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let resp = login_account(&state, payload).await?;
    Ok(Json(resp))
}

use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set,
    ActiveValue::NotSet,
};

use crate::{
    dto::accounts::{LoginRequest, RegisterRequest},
    entity::accounts::{ActiveModel, Column, Entity as Accounts, Model as AccountModel},
    error::{AppError, AppResult},
    models::AccountSummary,
    response::{LoginResponse, MessageResponse},
    state::AppState,
};

pub const REGISTERED: &str = "Kayıt başarılı!";
pub const REGISTER_FAILED: &str = "Kayıt yapılamadı";
pub const LOGGED_IN: &str = "Giriş başarılı!";
pub const LOGIN_FAILED: &str = "Giriş yapılamadı";
pub const INVALID_CREDENTIALS: &str = "Geçersiz email veya şifre.";

// Passwords are stored and compared in plaintext. Known defect, kept for
// compatibility with existing rows.
pub async fn register_account(
    state: &AppState,
    payload: RegisterRequest,
) -> AppResult<MessageResponse> {
    let account = payload.validate()?;

    let active = ActiveModel {
        id: NotSet,
        full_name: Set(account.full_name),
        email: Set(account.email),
        password: Set(account.password),
        role: Set(account.role),
    };
    let created = active
        .insert(&state.orm)
        .await
        .map_err(AppError::persistence(REGISTER_FAILED))?;

    tracing::info!(account_id = created.id, role = %created.role, "account registered");
    Ok(MessageResponse::new(REGISTERED))
}

pub async fn login_account(state: &AppState, payload: LoginRequest) -> AppResult<LoginResponse> {
    let credentials = payload.validate()?;

    let account = Accounts::find()
        .filter(Column::Email.eq(credentials.email.as_str()))
        .filter(Column::Password.eq(credentials.password.as_str()))
        .order_by_asc(Column::Id)
        .one(&state.orm)
        .await
        .map_err(AppError::persistence(LOGIN_FAILED))?;

    let account = match account {
        Some(a) => a,
        None => return Err(AppError::Authentication(INVALID_CREDENTIALS.into())),
    };

    tracing::info!(account_id = account.id, "account logged in");
    Ok(LoginResponse {
        message: LOGGED_IN.to_string(),
        user: summary_from_entity(account),
    })
}

fn summary_from_entity(model: AccountModel) -> AccountSummary {
    AccountSummary {
        id: model.id,
        full_name: model.full_name,
        email: model.email,
        role: model.role,
    }
}

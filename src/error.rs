use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sea_orm::DbErr;
use thiserror::Error;

use crate::response::ErrorBody;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Authentication(String),

    #[error("{context}: {source}")]
    Persistence {
        context: &'static str,
        #[source]
        source: DbErr,
    },

    #[error("Internal Server Error")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Adapter for `map_err` that tags a storage failure with a caller-facing prefix.
    pub fn persistence(context: &'static str) -> impl FnOnce(DbErr) -> AppError {
        move |source| AppError::Persistence { context, source }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Authentication(_) => StatusCode::UNAUTHORIZED,
            AppError::Persistence { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn log(&self) {
        match self {
            AppError::Validation(_) | AppError::Authentication(_) => {
                tracing::warn!(error = %self, "request rejected");
            }
            AppError::Persistence { source, .. } => {
                tracing::error!(error = %self, db_error = ?source, "database error");
            }
            AppError::Internal(err) => {
                tracing::error!(error = %format!("{err:#}"), "internal error");
            }
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.log();
        let body = ErrorBody {
            error: self.to_string(),
        };
        (self.status(), axum::Json(body)).into_response()
    }
}

/// Same error, rendered as a `text/plain` body for the catalog routes.
#[derive(Debug)]
pub struct PlainTextError(pub AppError);

impl From<AppError> for PlainTextError {
    fn from(err: AppError) -> Self {
        PlainTextError(err)
    }
}

impl IntoResponse for PlainTextError {
    fn into_response(self) -> Response {
        let err = self.0;
        err.log();
        (err.status(), err.to_string()).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
pub type TextResult<T> = Result<T, PlainTextError>;

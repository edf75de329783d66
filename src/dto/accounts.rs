use serde::Deserialize;
use utoipa::ToSchema;

use crate::error::{AppError, AppResult};

pub const DEFAULT_ROLE: &str = "musteri";
pub const MISSING_REGISTER_FIELDS: &str = "Tüm alanlar doldurulmalı!";
pub const MISSING_LOGIN_FIELDS: &str = "Email ve şifre zorunlu!";

#[derive(Deserialize, Debug, Default, ToSchema)]
pub struct RegisterRequest {
    pub fullname: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub rol: Option<String>,
}

#[derive(Deserialize, Debug, Default, ToSchema)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewAccount {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub role: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

impl RegisterRequest {
    pub fn validate(self) -> AppResult<NewAccount> {
        let (Some(full_name), Some(email), Some(password)) = (
            non_empty(self.fullname),
            non_empty(self.email),
            non_empty(self.password),
        ) else {
            return Err(AppError::Validation(MISSING_REGISTER_FIELDS.into()));
        };

        Ok(NewAccount {
            full_name,
            email,
            password,
            role: non_empty(self.rol).unwrap_or_else(|| DEFAULT_ROLE.to_string()),
        })
    }
}

impl LoginRequest {
    pub fn validate(self) -> AppResult<Credentials> {
        match (non_empty(self.email), non_empty(self.password)) {
            (Some(email), Some(password)) => Ok(Credentials { email, password }),
            _ => Err(AppError::Validation(MISSING_LOGIN_FIELDS.into())),
        }
    }
}

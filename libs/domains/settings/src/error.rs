use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("No fields to update")]
    EmptyUpdate,

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),
}

pub type SettingsResult<T> = Result<T, SettingsError>;

impl From<SettingsError> for AppError {
    fn from(err: SettingsError) -> Self {
        match err {
            SettingsError::EmptyUpdate => AppError::BadRequest(err.to_string()),
            SettingsError::Validation(msg) => AppError::BadRequest(msg),
            SettingsError::Database(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for SettingsError {
    fn into_response(self) -> Response {
        AppError::from(self).into_response()
    }
}

impl From<mongodb::error::Error> for SettingsError {
    fn from(err: mongodb::error::Error) -> Self {
        SettingsError::Database(err.to_string())
    }
}

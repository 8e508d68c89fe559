use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use sqlx::Error as SqlxError;
use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum SetupError {
    #[error("Database error: {0}")]
    DatabaseError(#[from] SqlxError),

    #[error("Filesystem error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Password hashing failed: {0}")]
    PasswordHash(String),

    #[error("Template error: {0}")]
    Template(#[from] askama::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] Box<figment::Error>),

    #[error("Setup already completed")]
    AlreadyConfigured,
}

impl From<argon2::password_hash::Error> for SetupError {
    fn from(e: argon2::password_hash::Error) -> Self {
        SetupError::PasswordHash(e.to_string())
    }
}

impl From<figment::Error> for SetupError {
    fn from(e: figment::Error) -> Self {
        SetupError::Config(Box::new(e))
    }
}

impl IntoResponse for SetupError {
    fn into_response(self) -> axum::response::Response {
        let (status, error_body) = match self {
            SetupError::AlreadyConfigured => (
                StatusCode::CONFLICT,
                ApiErrorBody {
                    code: "ALREADY_CONFIGURED".to_string(),
                    message: "Setup has already been completed.".to_string(),
                },
            ),
            SetupError::DatabaseError(_)
            | SetupError::Io(_)
            | SetupError::PasswordHash(_)
            | SetupError::Template(_)
            | SetupError::Config(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiErrorBody {
                    code: "INTERNAL_ERROR".to_string(),
                    message: "An internal server error occurred.".to_string(),
                },
            ),
        };
        (status, Json(ApiErrorResponse { error: error_body })).into_response()
    }
}

/// Standardized API error response body
#[derive(Serialize)]
pub struct ApiErrorBody {
    pub code: String,
    pub message: String,
}

#[derive(Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

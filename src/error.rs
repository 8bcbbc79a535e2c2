use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::form::FieldError;
use crate::roster::RosterError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Roster error: {0}")]
    Roster(#[from] RosterError),

    #[error("Invalid form field: {0}")]
    Field(#[from] FieldError),

    #[error("No roster table has been generated yet")]
    NoTable,

    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

// Convert AppError to an HTTP response
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::Roster(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            AppError::Field(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            AppError::NoTable => (StatusCode::NOT_FOUND, self.to_string()),
            AppError::BadRequest(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            AppError::Internal(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".into(),
            ),
        };

        tracing::error!(?self);
        let body = Json(ErrorResponse {
            error: error_message,
        });

        (status, body).into_response()
    }
}

#[derive(Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

pub type Result<T> = std::result::Result<T, AppError>;

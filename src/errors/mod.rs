//! Error handling module for the trivia backend.
//!
//! Provides the central error type with mapping to HTTP status codes and the
//! `{success, error, message}` response body.

use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Canonical messages for each failure kind.
pub mod messages {
    pub const NOT_FOUND: &str = "Not Found";
    pub const UNPROCESSABLE: &str = "Unprocessable Entity";
    pub const BAD_REQUEST: &str = "Bad Request";
    pub const QUIZ_EXHAUSTED: &str = "No eligible questions remain";
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    /// Requested resource or listing does not exist
    NotFound(String),
    /// Missing or invalid input, or a mutation that could not be applied
    Unprocessable(String),
    /// Every question in the quiz scope has already been asked
    QuizExhausted,
    /// Malformed request parameters
    BadRequest(String),
    /// Storage failure; the detail is logged, never sent to the client
    Database(String),
}

impl AppError {
    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::QuizExhausted => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Database(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }

    /// Get the client-facing message for this error.
    pub fn message(&self) -> String {
        match self {
            AppError::NotFound(msg) if !msg.is_empty() => msg.clone(),
            AppError::NotFound(_) => messages::NOT_FOUND.to_string(),
            AppError::Unprocessable(msg) if !msg.is_empty() => msg.clone(),
            AppError::Unprocessable(_) => messages::UNPROCESSABLE.to_string(),
            AppError::QuizExhausted => messages::QUIZ_EXHAUSTED.to_string(),
            AppError::BadRequest(msg) if !msg.is_empty() => msg.clone(),
            AppError::BadRequest(_) => messages::BAD_REQUEST.to_string(),
            AppError::Database(_) => messages::UNPROCESSABLE.to_string(),
        }
    }

    /// Re-tag any failure as a 404, keeping the detail for logs.
    pub fn into_not_found(self) -> Self {
        match self {
            AppError::NotFound(_) => self,
            other => {
                tracing::debug!("Reporting as not found: {}", other);
                AppError::NotFound(messages::NOT_FOUND.to_string())
            }
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Database(detail) => write!(f, "{}: {}", self.status_code(), detail),
            _ => write!(f, "{}: {}", self.status_code(), self.message()),
        }
    }
}

impl std::error::Error for AppError {}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        tracing::error!("Database error: {:?}", err);
        AppError::Database(format!("Database error: {}", err))
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!("Rejected JSON body: {}", rejection.body_text());
        AppError::Unprocessable(messages::UNPROCESSABLE.to_string())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        tracing::debug!("Rejected path parameter: {}", rejection.body_text());
        AppError::NotFound(messages::NOT_FOUND.to_string())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        tracing::debug!("Rejected query string: {}", rejection.body_text());
        AppError::BadRequest(messages::BAD_REQUEST.to_string())
    }
}

/// Error response body.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: u16,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(error: &AppError) -> Self {
        Self {
            success: false,
            error: error.status_code().as_u16(),
            message: error.message(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorResponse::new(&self);
        (status, Json(body)).into_response()
    }
}

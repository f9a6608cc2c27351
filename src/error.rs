//! Error types for the book service
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// == App Error Enum ==
/// Unified error type for the book service.
#[derive(Error, Debug)]
pub enum AppError {
    /// Incoming book payload does not match the `{id, title, author}` schema
    #[error("Invalid book payload: {0}")]
    Validation(String),

    /// Cache backend unreachable or answered with a protocol error
    #[error("Cache backend error: {0}")]
    CacheBackend(String),
}

impl From<redis::RedisError> for AppError {
    fn from(err: redis::RedisError) -> Self {
        AppError::CacheBackend(err.to_string())
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::CacheBackend(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the book service.
pub type Result<T> = std::result::Result<T, AppError>;

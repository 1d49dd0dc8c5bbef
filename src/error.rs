//! Error types for the password service
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
/// Unified error type for the password service.
#[derive(Error, Debug)]
pub enum AppError {
    /// Generation parameters or payload failed validation
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Record or tag not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Failure reported by the persistence delegate
    #[error("Persistence error: {0}")]
    Persistence(String),

    /// Failure reported by the hashing primitive
    #[error("Hashing error: {0}")]
    Hashing(String),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            AppError::Persistence(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
            AppError::Hashing(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
        };

        let body = Json(ErrorResponse::new(message));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the password service.
pub type Result<T> = std::result::Result<T, AppError>;

//! Centralized error handling.
//!
//! Every failure a handler can produce is an [`AppError`]. Rendering keeps the
//! storefront's wire contract: a flat `{"error": "..."}` body, 404 only for an
//! unknown category, 401/403 for the auth gate and 400 for everything else.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::config::{
    MSG_CATEGORY_NOT_FOUND, MSG_FORBIDDEN, MSG_PROCESSING_FAILED, MSG_UNAUTHORIZED,
};

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Authentication & Authorization
    #[error("Authentication required")]
    Unauthorized,

    #[error("Access denied")]
    Forbidden,

    // Resource errors
    #[error("Resource not found")]
    NotFound,

    #[error("{0}")]
    Conflict(String),

    // Validation
    #[error("{0}")]
    Validation(String),

    #[error("Invalid input: {0}")]
    BadRequest(String),

    // External service errors
    #[error("Database error")]
    Database(#[from] sea_orm::DbErr),

    #[error("Authentication error")]
    Jwt(#[from] jsonwebtoken::errors::Error),

    // Internal
    #[error("Internal server error")]
    Internal(String),
}

/// Error response body
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

impl AppError {
    /// Get HTTP status code
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Unauthorized | AppError::Jwt(_) => StatusCode::UNAUTHORIZED,
            AppError::Forbidden => StatusCode::FORBIDDEN,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Conflict(_)
            | AppError::Validation(_)
            | AppError::BadRequest(_)
            | AppError::Database(_)
            | AppError::Internal(_) => StatusCode::BAD_REQUEST,
        }
    }

    /// Get user-facing message (hides internal details)
    pub fn user_message(&self) -> String {
        match self {
            AppError::Validation(msg) | AppError::Conflict(msg) => msg.clone(),
            AppError::NotFound => MSG_CATEGORY_NOT_FOUND.to_string(),
            AppError::Unauthorized => MSG_UNAUTHORIZED.to_string(),
            AppError::Forbidden => MSG_FORBIDDEN.to_string(),

            AppError::Jwt(e) => {
                tracing::debug!("Rejected token: {:?}", e);
                MSG_UNAUTHORIZED.to_string()
            }
            AppError::BadRequest(msg) => {
                tracing::debug!("Bad request: {}", msg);
                MSG_PROCESSING_FAILED.to_string()
            }
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                MSG_PROCESSING_FAILED.to_string()
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                MSG_PROCESSING_FAILED.to_string()
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorResponse {
            error: self.user_message(),
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Extension trait for Option -> AppError conversion
pub trait OptionExt<T> {
    fn ok_or_not_found(self) -> AppResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_not_found(self) -> AppResult<T> {
        self.ok_or(AppError::NotFound)
    }
}

/// Convenience constructors
impl AppError {
    pub fn conflict(msg: impl Into<String>) -> Self {
        AppError::Conflict(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn bad_request(msg: impl Into<String>) -> Self {
        AppError::BadRequest(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}

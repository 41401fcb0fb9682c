//! Blog Error Types
//!
//! This module provides blog-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use std::collections::BTreeMap;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Blog-specific result type alias
pub type BlogResult<T> = Result<T, BlogError>;

/// Blog-specific error variants
#[derive(Debug, Error)]
pub enum BlogError {
    /// Post not found
    #[error("Post not found")]
    PostNotFound,

    /// Comment not found
    #[error("Comment not found")]
    CommentNotFound,

    /// No identity established where one is required
    #[error("Authentication required")]
    Unauthorized,

    /// Authenticated, but not the resource owner
    #[error("You don't have permission to modify this resource")]
    Forbidden,

    /// Request field validation failed (field name → message)
    #[error("Validation failed")]
    Validation(BTreeMap<String, String>),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl BlogError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            BlogError::PostNotFound | BlogError::CommentNotFound => StatusCode::NOT_FOUND,
            BlogError::Unauthorized => StatusCode::UNAUTHORIZED,
            BlogError::Forbidden => StatusCode::FORBIDDEN,
            BlogError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            BlogError::Database(_) | BlogError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            BlogError::PostNotFound | BlogError::CommentNotFound => ErrorKind::NotFound,
            BlogError::Unauthorized => ErrorKind::Unauthorized,
            BlogError::Forbidden => ErrorKind::Forbidden,
            BlogError::Validation(_) => ErrorKind::UnprocessableEntity,
            BlogError::Database(_) | BlogError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        match self {
            BlogError::Validation(fields) => {
                AppError::new(self.kind(), self.to_string()).with_fields(fields.clone())
            }
            // Generic message for 5xx; details stay in the log
            BlogError::Database(_) | BlogError::Internal(_) => {
                AppError::new(self.kind(), "Internal server error")
            }
            _ => AppError::new(self.kind(), self.to_string()),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            BlogError::Database(e) => {
                tracing::error!(error = %e, "Blog database error");
            }
            BlogError::Internal(msg) => {
                tracing::error!(message = %msg, "Blog internal error");
            }
            BlogError::Forbidden => {
                tracing::warn!("Ownership check rejected a mutation");
            }
            _ => {
                tracing::debug!(error = %self, "Blog error");
            }
        }
    }
}

impl IntoResponse for BlogError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<AppError> for BlogError {
    fn from(err: AppError) -> Self {
        BlogError::Internal(err.to_string())
    }
}

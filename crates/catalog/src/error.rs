//! Unified error handling with Sentry integration.
//!
//! Provides a unified `AppError` type that captures server errors to Sentry
//! before responding to the client. All route handlers should return
//! `Result<T, AppError>`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use mongodb::bson::oid::ObjectId;
use thiserror::Error;

use crate::db::RepositoryError;

/// Application-level error type for the catalog.
#[derive(Debug, Error)]
pub enum AppError {
    /// Database operation failed.
    #[error("Database error: {0}")]
    Database(#[from] RepositoryError),

    /// A path segment does not parse as a store identifier.
    #[error("Invalid identifier: {0}")]
    InvalidIdentifier(String),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// A required form field is empty or absent.
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Capture server errors to Sentry
        if matches!(self, Self::Database(_)) {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        }

        let status = match &self {
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::InvalidIdentifier(_) | Self::MissingField(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
        };

        // Don't expose internal error details to clients
        let message = match &self {
            Self::Database(_) => "Internal server error".to_string(),
            _ => self.to_string(),
        };

        (status, message).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

/// Parse a path segment as a store identifier.
///
/// The store identifier format is the 24-hex-character `ObjectId`; anything
/// else is rejected uniformly across handlers.
///
/// # Errors
///
/// Returns `AppError::InvalidIdentifier` if the segment does not parse.
pub fn parse_object_id(segment: &str) -> Result<ObjectId> {
    ObjectId::parse_str(segment).map_err(|_| AppError::InvalidIdentifier(segment.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_display() {
        let err = AppError::NotFound("plant 5f1d7f0a9c9d440000a1b2c3".to_string());
        assert_eq!(
            err.to_string(),
            "Not found: plant 5f1d7f0a9c9d440000a1b2c3"
        );

        let err = AppError::MissingField("quantity");
        assert_eq!(err.to_string(), "Missing required field: quantity");
    }

    #[test]
    fn test_app_error_status_codes() {
        fn get_status(err: AppError) -> StatusCode {
            let response = err.into_response();
            response.status()
        }

        assert_eq!(
            get_status(AppError::InvalidIdentifier("not-hex".to_string())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            get_status(AppError::NotFound("test".to_string())),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            get_status(AppError::MissingField("quantity")),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_parse_object_id_valid() {
        let id = parse_object_id("5f1d7f0a9c9d440000a1b2c3");
        assert!(id.is_ok());
    }

    #[test]
    fn test_parse_object_id_rejects_malformed() {
        // Wrong length
        assert!(parse_object_id("abc123").is_err());
        // Right length, not hex
        assert!(parse_object_id("zzzzzzzzzzzzzzzzzzzzzzzz").is_err());
        // Empty
        assert!(parse_object_id("").is_err());
    }
}

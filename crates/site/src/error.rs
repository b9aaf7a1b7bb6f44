//! Unified error handling with Sentry integration.
//!
//! Provides a unified `AppError` type that captures errors to Sentry before
//! responding to the client. Route handlers return `Result<T, AppError>`.
//!
//! Session verification failures never appear here: the admin gate maps
//! them to a login redirect instead of an error response, so a bad cookie
//! can never produce a crash page.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Application-level error type for the site.
#[derive(Debug, Error)]
pub enum AppError {
    /// Request is missing or carries a mismatched CSRF token pair.
    #[error("CSRF validation failed")]
    CsrfRejected,

    /// Bad request from client.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Capture server errors to Sentry
        if matches!(self, Self::Internal(_)) {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        }

        let status = match &self {
            Self::CsrfRejected => StatusCode::FORBIDDEN,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // Don't expose internal error details to clients
        let message = match &self {
            Self::CsrfRejected => "Invalid or missing CSRF token".to_string(),
            Self::BadRequest(msg) => format!("Bad request: {msg}"),
            Self::Internal(_) => "Internal server error".to_string(),
        };

        (status, message).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_display() {
        let err = AppError::BadRequest("invalid input".to_string());
        assert_eq!(err.to_string(), "Bad request: invalid input");

        let err = AppError::CsrfRejected;
        assert_eq!(err.to_string(), "CSRF validation failed");
    }

    #[test]
    fn test_app_error_status_codes() {
        fn get_status(err: AppError) -> StatusCode {
            let response = err.into_response();
            response.status()
        }

        assert_eq!(get_status(AppError::CsrfRejected), StatusCode::FORBIDDEN);
        assert_eq!(
            get_status(AppError::BadRequest("test".to_string())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            get_status(AppError::Internal("test".to_string())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_internal_error_does_not_leak_details() {
        let response = AppError::Internal("rng device unavailable".to_string()).into_response();
        // Body inspection happens in integration tests; here we only check
        // the status does not downgrade.
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}

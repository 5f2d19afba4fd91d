//! Admin Gate Error Types
//!
//! Faults of the login surface that integrate with the unified
//! `kernel::error::AppError` system.
//!
//! Field-format violations and rejected credentials are not errors here;
//! they are submission outcomes rendered as field text.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Admin-gate result type alias
pub type AdminResult<T> = Result<T, AdminError>;

#[derive(Debug, Error)]
pub enum AdminError {
    /// A credential check is already in flight; the submit control is disabled
    #[error("Login is already in progress")]
    SubmissionInProgress,

    /// The login surface was torn down before or during the attempt
    #[error("Login surface is no longer active")]
    SurfaceDisposed,

    /// Request body could not be read as a login form
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AdminError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AdminError::SubmissionInProgress => StatusCode::CONFLICT,
            AdminError::SurfaceDisposed => StatusCode::GONE,
            AdminError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            AdminError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AdminError::SubmissionInProgress => ErrorKind::Conflict,
            AdminError::SurfaceDisposed => ErrorKind::Gone,
            AdminError::InvalidBody(_) => ErrorKind::BadRequest,
            AdminError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        let err = AppError::new(self.kind(), self.to_string());
        match self {
            AdminError::SubmissionInProgress => {
                err.with_action("Wait for the current attempt to finish")
            }
            AdminError::SurfaceDisposed => err.with_action("Open the login page again"),
            AdminError::InvalidBody(_) => {
                err.with_action("Send a JSON body with username and password")
            }
            AdminError::Internal(_) => err,
        }
    }

    fn log(&self) {
        match self {
            AdminError::Internal(msg) => {
                tracing::error!(message = %msg, "Admin gate internal error");
            }
            _ => {
                tracing::debug!(error = %self, "Admin gate error");
            }
        }
    }
}

impl IntoResponse for AdminError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<JsonRejection> for AdminError {
    fn from(rejection: JsonRejection) -> Self {
        AdminError::InvalidBody(rejection.body_text())
    }
}

impl From<tokio::task::JoinError> for AdminError {
    fn from(err: tokio::task::JoinError) -> Self {
        AdminError::Internal(format!("credential check task failed: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes_match_kinds() {
        for err in [
            AdminError::SubmissionInProgress,
            AdminError::SurfaceDisposed,
            AdminError::InvalidBody("x".into()),
            AdminError::Internal("x".into()),
        ] {
            assert_eq!(err.status_code().as_u16(), err.kind().status_code());
        }
    }

    #[test]
    fn test_to_app_error_carries_action() {
        let app = AdminError::SubmissionInProgress.to_app_error();
        assert_eq!(app.status_code(), 409);
        assert!(app.action().is_some());
    }

    #[test]
    fn test_into_response() {
        let response = AdminError::SurfaceDisposed.into_response();
        assert_eq!(response.status(), StatusCode::GONE);
    }
}

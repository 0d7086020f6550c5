//! Unified error handling with Sentry integration.
//!
//! Provides a unified `AppError` type that captures server-side failures to
//! Sentry before responding. Every response body is an [`ErrorResponse`];
//! internal details are logged, never returned.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use customer_registration_core::api::{ErrorResponse, MSG_DUPLICATE, MSG_INTERNAL, MSG_REQUIRED};

use crate::services::RegistrationError;

/// Application-level error type for the registration service.
#[derive(Debug, Error)]
pub enum AppError {
    /// Registration was rejected or failed.
    #[error(transparent)]
    Registration(#[from] RegistrationError),

    /// Bad request from client. The message is shown verbatim.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

impl AppError {
    /// HTTP status for this error.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Registration(RegistrationError::Validation(_)) | Self::BadRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::Registration(RegistrationError::Conflict) => StatusCode::CONFLICT,
            Self::Registration(RegistrationError::Internal(_)) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    const fn is_server_error(&self) -> bool {
        matches!(self, Self::Registration(RegistrationError::Internal(_)))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if self.is_server_error() {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        } else {
            tracing::debug!(error = %self, "Request rejected");
        }

        // Don't expose internal error details to clients
        let message = match &self {
            Self::Registration(RegistrationError::Validation(_)) => MSG_REQUIRED.to_string(),
            Self::Registration(RegistrationError::Conflict) => MSG_DUPLICATE.to_string(),
            Self::Registration(RegistrationError::Internal(_)) => MSG_INTERNAL.to_string(),
            Self::BadRequest(msg) => msg.clone(),
        };

        (self.status(), Json(ErrorResponse::new(message))).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

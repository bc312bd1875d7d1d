//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.
//!
//! Pending approval and role mismatch are not errors: the route guard
//! reports them as decisions.

use kernel::error::{app_error::AppError, kind::ErrorKind};
use platform::http::{ApiError, CONNECTIVITY_MESSAGE};
use platform::storage::StorageError;
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

const GENERIC_MESSAGE: &str = "Something went wrong. Please try again.";

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// Login rejected (wrong email or password, inactive or unapproved account)
    #[error("{message}")]
    InvalidCredentials { message: String },

    /// Registration or form input rejected
    #[error("{message}")]
    Validation {
        message: String,
        details: Option<serde_json::Value>,
    },

    /// Token missing, expired or rejected
    #[error("Session is missing or expired")]
    Unauthorized,

    /// The API could not be reached
    #[error("{message}")]
    Network { message: String },

    /// Any other non-success response
    #[error("{message}")]
    Server { status: u16, message: String },

    /// A success response that could not be decoded
    #[error("Unexpected response format: {0}")]
    UnexpectedResponse(String),

    /// Durable token storage failed
    #[error("Session storage error: {0}")]
    Storage(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    pub fn invalid_credentials(message: impl Into<String>) -> Self {
        AuthError::InvalidCredentials {
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        AuthError::Validation {
            message: message.into(),
            details: None,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::InvalidCredentials { .. } | AuthError::Unauthorized => {
                ErrorKind::Unauthorized
            }
            AuthError::Validation { .. } => ErrorKind::BadRequest,
            AuthError::Network { .. } => ErrorKind::NetworkUnavailable,
            AuthError::Server { status, .. } => ErrorKind::from_status(*status),
            AuthError::UnexpectedResponse(_) | AuthError::Storage(_) | AuthError::Internal(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// Message suitable for an inline error or a toast
    pub fn user_message(&self) -> String {
        match self {
            AuthError::InvalidCredentials { message }
            | AuthError::Validation { message, .. }
            | AuthError::Network { message }
            | AuthError::Server { message, .. } => message.clone(),
            AuthError::Unauthorized => {
                "Your session has expired. Please log in again.".to_string()
            }
            AuthError::UnexpectedResponse(_) | AuthError::Storage(_) | AuthError::Internal(_) => {
                GENERIC_MESSAGE.to_string()
            }
        }
    }

    /// Whether retrying the same request may succeed
    pub fn is_transient(&self) -> bool {
        self.kind().is_transient()
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.user_message())
    }

    /// Log the error with appropriate level
    pub fn log(&self) {
        match self {
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::Storage(msg) => {
                tracing::error!(message = %msg, "Session storage error");
            }
            AuthError::UnexpectedResponse(msg) => {
                tracing::error!(message = %msg, "Undecodable identity response");
            }
            AuthError::InvalidCredentials { message } => {
                tracing::warn!(message = %message, "Login rejected");
            }
            AuthError::Network { message } => {
                tracing::warn!(message = %message, "Identity API unreachable");
            }
            AuthError::Server { status, message } => {
                tracing::warn!(status, message = %message, "Identity API error");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl From<AppError> for AuthError {
    fn from(err: AppError) -> Self {
        AuthError::Internal(err.to_string())
    }
}

impl From<StorageError> for AuthError {
    fn from(err: StorageError) -> Self {
        AuthError::Storage(err.to_string())
    }
}

impl From<ApiError> for AuthError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::InvalidUrl(url) => AuthError::Internal(format!("Invalid API URL: {url}")),
            ApiError::Timeout { .. } | ApiError::Connect(_) | ApiError::Transport(_) => {
                AuthError::Network {
                    message: CONNECTIVITY_MESSAGE.to_string(),
                }
            }
        }
    }
}

impl From<serde_json::Error> for AuthError {
    fn from(err: serde_json::Error) -> Self {
        AuthError::UnexpectedResponse(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_mapping() {
        assert_eq!(
            AuthError::invalid_credentials("Invalid email or password").kind(),
            ErrorKind::Unauthorized
        );
        assert_eq!(AuthError::validation("bad").kind(), ErrorKind::BadRequest);
        assert_eq!(AuthError::Unauthorized.kind(), ErrorKind::Unauthorized);
        assert_eq!(
            AuthError::Network {
                message: CONNECTIVITY_MESSAGE.into()
            }
            .kind(),
            ErrorKind::NetworkUnavailable
        );
        assert_eq!(
            AuthError::Server {
                status: 503,
                message: "down".into()
            }
            .kind(),
            ErrorKind::ServiceUnavailable
        );
        assert_eq!(
            AuthError::Storage("disk".into()).kind(),
            ErrorKind::InternalServerError
        );
    }

    #[test]
    fn test_user_message_is_displayable() {
        let err = AuthError::invalid_credentials("Invalid email or password");
        assert_eq!(err.user_message(), "Invalid email or password");
        assert_eq!(err.to_string(), "Invalid email or password");

        let err = AuthError::Internal("lock poisoned".into());
        assert_eq!(err.user_message(), GENERIC_MESSAGE);
        assert!(!err.user_message().contains("lock"));
    }

    #[test]
    fn test_api_error_conversion() {
        let err: AuthError = ApiError::Connect("refused".into()).into();
        assert!(matches!(err, AuthError::Network { .. }));
        assert_eq!(err.user_message(), CONNECTIVITY_MESSAGE);
        assert!(err.is_transient());

        let err: AuthError = ApiError::Timeout { timeout_ms: 30_000 }.into();
        assert!(matches!(err, AuthError::Network { .. }));

        let err: AuthError = ApiError::InvalidUrl("x".into()).into();
        assert!(matches!(err, AuthError::Internal(_)));
    }

    #[test]
    fn test_to_app_error() {
        let app = AuthError::validation("Email already registered").to_app_error();
        assert_eq!(app.kind(), ErrorKind::BadRequest);
        assert_eq!(app.message(), "Email already registered");
    }
}

//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.
//!
//! Form errors (missing fields, policy violations, duplicates, credential
//! mismatches) are rendered back into the submitted form by the handlers.
//! Everything else reaches the `IntoResponse` boundary below.

use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("All fields are mandatory. Please provide your username, email and password.")]
    MissingSignUpFields,

    #[error("Please enter both, email and password to login.")]
    MissingSignInFields,

    #[error(
        "Password needs to have at least 6 characters and must contain at least one number, one lowercase and one uppercase letter."
    )]
    WeakPassword,

    /// Shape violation of a single field (email format, username length)
    #[error("{0}")]
    Validation(String),

    #[error("Username is already taken. Try with other username.")]
    UsernameTaken,

    #[error("Email is already registered. Try with other email.")]
    EmailTaken,

    #[error("Email is not registered. Try with other email.")]
    EmailNotRegistered,

    #[error("Incorrect password.")]
    IncorrectPassword,

    #[error("User not found")]
    UserNotFound,

    /// Acting on another user's profile
    #[error("You can only change your own profile.")]
    NotOwner,

    /// Session cookie missing, forged, or expired
    #[error("Session not found or expired")]
    SessionInvalid,

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::MissingSignUpFields
            | AuthError::MissingSignInFields
            | AuthError::WeakPassword
            | AuthError::Validation(_) => StatusCode::BAD_REQUEST,
            AuthError::UsernameTaken | AuthError::EmailTaken => StatusCode::CONFLICT,
            AuthError::EmailNotRegistered | AuthError::UserNotFound => StatusCode::NOT_FOUND,
            AuthError::IncorrectPassword | AuthError::SessionInvalid => StatusCode::UNAUTHORIZED,
            AuthError::NotOwner => StatusCode::FORBIDDEN,
            AuthError::Database(_) | AuthError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::MissingSignUpFields
            | AuthError::MissingSignInFields
            | AuthError::WeakPassword
            | AuthError::Validation(_) => ErrorKind::BadRequest,
            AuthError::UsernameTaken | AuthError::EmailTaken => ErrorKind::Conflict,
            AuthError::EmailNotRegistered | AuthError::UserNotFound => ErrorKind::NotFound,
            AuthError::IncorrectPassword | AuthError::SessionInvalid => ErrorKind::Unauthorized,
            AuthError::NotOwner => ErrorKind::Forbidden,
            AuthError::Database(_) | AuthError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Whether the handler should re-render the submitted form with this message
    pub fn is_form_error(&self) -> bool {
        matches!(
            self,
            AuthError::MissingSignUpFields
                | AuthError::MissingSignInFields
                | AuthError::WeakPassword
                | AuthError::Validation(_)
                | AuthError::UsernameTaken
                | AuthError::EmailTaken
                | AuthError::EmailNotRegistered
                | AuthError::IncorrectPassword
        )
    }

    /// Convert to AppError
    ///
    /// Store errors keep their source so the kernel mapping can tell a pool
    /// timeout (503) from a failed statement (500).
    pub fn into_app_error(self) -> AppError {
        match self {
            AuthError::Database(e) => AppError::from(e),
            AuthError::Internal(msg) => AppError::internal(msg),
            other => AppError::new(other.kind(), other.to_string()),
        }
    }

    /// Log the error with appropriate level
    pub fn log(&self) {
        match self {
            AuthError::Database(e) => {
                tracing::error!(error = %e, "Auth database error");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::EmailNotRegistered | AuthError::IncorrectPassword => {
                tracing::warn!(error = %self, "Failed login attempt");
            }
            AuthError::NotOwner => {
                tracing::warn!("Attempt to modify another user's profile");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();

        if let AuthError::SessionInvalid = self {
            return (StatusCode::FOUND, [(header::LOCATION, "/login")]).into_response();
        }

        self.into_app_error().into_response()
    }
}

impl From<AppError> for AuthError {
    fn from(err: AppError) -> Self {
        match err.kind() {
            ErrorKind::BadRequest => AuthError::Validation(err.message().to_string()),
            _ => AuthError::Internal(err.to_string()),
        }
    }
}

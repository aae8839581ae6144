//! Tweet Error Types
//!
//! Tweet-specific error variants that integrate with the unified
//! `kernel::error::AppError` system. Failures coming from the auth crate
//! (missing user, stale session) keep their own response behavior.

use auth::AuthError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Tweet-specific result type alias
pub type TweetResult<T> = Result<T, TweetError>;

#[derive(Debug, Error)]
pub enum TweetError {
    #[error("Tweet content cannot be empty.")]
    EmptyContent,

    #[error("Tweet content is too long: {actual} characters (max {max}).")]
    ContentTooLong { max: usize, actual: usize },

    /// User lookup or session failure
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl TweetError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            TweetError::EmptyContent | TweetError::ContentTooLong { .. } => StatusCode::BAD_REQUEST,
            TweetError::Auth(e) => e.status_code(),
            TweetError::Database(_) | TweetError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            TweetError::EmptyContent | TweetError::ContentTooLong { .. } => ErrorKind::BadRequest,
            TweetError::Auth(e) => e.kind(),
            TweetError::Database(_) | TweetError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Whether the create form should be re-rendered with this message
    pub fn is_form_error(&self) -> bool {
        matches!(
            self,
            TweetError::EmptyContent | TweetError::ContentTooLong { .. }
        )
    }

    /// Log the error with appropriate level
    pub fn log(&self) {
        match self {
            TweetError::Database(e) => {
                tracing::error!(error = %e, "Tweet database error");
            }
            TweetError::Internal(msg) => {
                tracing::error!(message = %msg, "Tweet internal error");
            }
            TweetError::Auth(e) => e.log(),
            _ => {
                tracing::debug!(error = %self, "Tweet error");
            }
        }
    }
}

impl From<TweetError> for AppError {
    fn from(err: TweetError) -> Self {
        match err {
            TweetError::Auth(e) => e.into_app_error(),
            TweetError::Database(e) => AppError::from(e),
            TweetError::Internal(msg) => AppError::internal(msg),
            other => AppError::new(other.kind(), other.to_string()),
        }
    }
}

impl From<AppError> for TweetError {
    fn from(err: AppError) -> Self {
        TweetError::Internal(err.to_string())
    }
}

impl IntoResponse for TweetError {
    fn into_response(self) -> Response {
        if let TweetError::Auth(e) = self {
            return e.into_response();
        }

        self.log();
        AppError::from(self).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::header;

    #[test]
    fn test_content_errors_are_form_errors() {
        let errors = [
            TweetError::EmptyContent,
            TweetError::ContentTooLong { max: 280, actual: 300 },
        ];
        for err in errors {
            assert!(err.is_form_error());
            assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
            assert_eq!(err.kind(), ErrorKind::BadRequest);
        }
        assert!(!TweetError::Internal("x".into()).is_form_error());
    }

    #[test]
    fn test_auth_errors_keep_their_response() {
        let response = TweetError::Auth(AuthError::SessionInvalid).into_response();
        assert_eq!(response.status(), StatusCode::FOUND);
        assert_eq!(response.headers()[header::LOCATION], "/login");

        let response = TweetError::Auth(AuthError::UserNotFound).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_app_error_becomes_internal() {
        let err = TweetError::from(AppError::internal("Template rendering failed"));
        assert!(matches!(err, TweetError::Internal(_)));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_internal_error_is_500() {
        let response = TweetError::Internal("boom".into()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}

//! Auth Session Entity
//!
//! Represents an authenticated user session.
//! Stored in database with cookie-based token reference.

use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use crate::domain::entity::user::User;
use crate::domain::value_object::user_id::UserId;
use crate::error::{AuthError, AuthResult};

/// Auth session entity
///
/// Holds a snapshot of the user taken at sign-in, refreshed when the owner
/// edits their profile.
#[derive(Debug, Clone)]
pub struct AuthSession {
    /// Session ID (UUID v4)
    pub session_id: Uuid,
    /// Reference to User
    pub user_id: UserId,
    /// Username at snapshot time
    pub username: String,
    /// Email at snapshot time
    pub email: String,
    /// Session expiration (Unix timestamp ms)
    pub expires_at_ms: i64,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Last activity timestamp
    pub last_activity_at: DateTime<Utc>,
}

impl AuthSession {
    /// Create a new auth session for `user`
    ///
    /// TTL is provided by the application layer (config), not hard-coded here.
    /// A TTL whose expiry falls outside the representable time range is an
    /// internal error.
    pub fn new(user: &User, ttl: Duration) -> AuthResult<Self> {
        let now = Utc::now();
        let expires_at = now
            .checked_add_signed(ttl)
            .ok_or_else(|| AuthError::Internal(format!("Session TTL out of range: {ttl}")))?;

        Ok(Self {
            session_id: Uuid::new_v4(),
            user_id: user.user_id,
            username: user.username.to_string(),
            email: user.email.to_string(),
            expires_at_ms: expires_at.timestamp_millis(),
            created_at: now,
            last_activity_at: now,
        })
    }

    /// Check if session has expired
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp_millis() > self.expires_at_ms
    }

    /// Update last activity timestamp
    pub fn touch(&mut self) {
        self.last_activity_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_object::{
        email::Email,
        user_name::UserName,
        user_password::{RawPassword, UserPassword},
    };

    fn user() -> User {
        let raw = RawPassword::new("Abc123".to_string()).unwrap();
        User::new(
            UserName::new("bob").unwrap(),
            Email::new("bob@example.com").unwrap(),
            UserPassword::from_raw(&raw).unwrap(),
        )
    }

    #[test]
    fn test_new_session_snapshot() {
        let user = user();
        let session = AuthSession::new(&user, Duration::hours(1)).unwrap();

        assert_eq!(session.user_id, user.user_id);
        assert_eq!(session.username, "bob");
        assert_eq!(session.email, "bob@example.com");
        assert!(!session.is_expired());
        assert!(session.expires_at_ms > session.created_at.timestamp_millis());
    }

    #[test]
    fn test_expired_session() {
        let session = AuthSession::new(&user(), Duration::milliseconds(-1)).unwrap();
        assert!(session.is_expired());
    }

    #[test]
    fn test_ttl_past_time_range_is_rejected() {
        let err = AuthSession::new(&user(), Duration::days(365 * 300_000)).unwrap_err();
        assert!(matches!(err, AuthError::Internal(_)));
    }

    #[test]
    fn test_touch() {
        let mut session = AuthSession::new(&user(), Duration::hours(1)).unwrap();
        let before = session.last_activity_at;
        session.touch();
        assert!(session.last_activity_at >= before);
    }
}

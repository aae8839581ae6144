//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use crate::domain::entity::{
    auth_session::AuthSession,
    user::{User, UserPatch},
};
use crate::domain::value_object::{email::Email, user_id::UserId, user_name::UserName};
use crate::error::AuthResult;
use uuid::Uuid;

/// User repository trait
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Create a new user
    ///
    /// Fails with `UsernameTaken` / `EmailTaken` on a uniqueness violation.
    async fn create(&self, user: &User) -> AuthResult<()>;

    /// Find user by ID
    async fn find_by_id(&self, user_id: &UserId) -> AuthResult<Option<User>>;

    /// Find user by (normalized) email
    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>>;

    /// Check if user name exists
    async fn exists_by_username(&self, username: &UserName) -> AuthResult<bool>;

    /// Check if email exists
    async fn exists_by_email(&self, email: &Email) -> AuthResult<bool>;

    /// Merge the provided fields into the stored user
    ///
    /// `UserNotFound` when no row matches.
    async fn update_by_id(&self, user_id: &UserId, patch: &UserPatch) -> AuthResult<()>;

    /// Delete user
    ///
    /// `UserNotFound` when no row matches.
    async fn delete_by_id(&self, user_id: &UserId) -> AuthResult<()>;
}

/// Auth session repository trait
#[trait_variant::make(AuthSessionRepository: Send)]
pub trait LocalAuthSessionRepository {
    /// Create a new session
    async fn create_session(&self, session: &AuthSession) -> AuthResult<()>;

    /// Find a session by ID, expired or not
    async fn find_session(&self, session_id: Uuid) -> AuthResult<Option<AuthSession>>;

    /// Update session (last activity)
    async fn update_session(&self, session: &AuthSession) -> AuthResult<()>;

    /// Refresh the user snapshot held by every session of `user_id`
    async fn update_snapshot(
        &self,
        user_id: &UserId,
        username: &UserName,
        email: &Email,
    ) -> AuthResult<u64>;

    /// Delete a session
    async fn delete_session(&self, session_id: Uuid) -> AuthResult<()>;

    /// Delete all sessions for a user
    async fn delete_sessions_for_user(&self, user_id: &UserId) -> AuthResult<u64>;

    /// Clean up expired sessions
    async fn cleanup_expired(&self) -> AuthResult<u64>;
}

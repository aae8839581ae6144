//! In-memory Repository
//!
//! Same contract as [`PgAuthRepository`](super::postgres::PgAuthRepository),
//! including the username/email uniqueness the database enforces. Used by
//! tests of this crate and, through the `memory` feature, of dependent crates.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use chrono::Utc;
use uuid::Uuid;

use crate::domain::entity::{
    auth_session::AuthSession,
    user::{User, UserPatch},
};
use crate::domain::repository::{AuthSessionRepository, UserRepository};
use crate::domain::value_object::{email::Email, user_id::UserId, user_name::UserName};
use crate::error::{AuthError, AuthResult};

#[derive(Default)]
struct MemoryState {
    users: HashMap<UserId, User>,
    sessions: HashMap<Uuid, AuthSession>,
}

/// In-memory auth repository
#[derive(Clone, Default)]
pub struct InMemoryAuthRepository {
    state: Arc<Mutex<MemoryState>>,
}

impl InMemoryAuthRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> AuthResult<MutexGuard<'_, MemoryState>> {
        self.state
            .lock()
            .map_err(|_| AuthError::Internal("in-memory store poisoned".to_string()))
    }

    /// Number of stored users
    pub fn user_count(&self) -> usize {
        self.lock().map(|s| s.users.len()).unwrap_or_default()
    }

    /// Number of stored sessions
    pub fn session_count(&self) -> usize {
        self.lock().map(|s| s.sessions.len()).unwrap_or_default()
    }

    /// Look up a user by username without going through the async trait
    pub fn user_by_username(&self, username: &str) -> Option<User> {
        self.lock().ok().and_then(|s| {
            s.users
                .values()
                .find(|u| u.username.as_str() == username)
                .cloned()
        })
    }

    /// Look up a user by id without going through the async trait
    pub fn user_by_id(&self, user_id: &UserId) -> Option<User> {
        self.lock().ok().and_then(|s| s.users.get(user_id).cloned())
    }

    /// Sessions currently held for `user_id`
    pub fn sessions_of(&self, user_id: &UserId) -> Vec<AuthSession> {
        self.lock()
            .map(|s| {
                s.sessions
                    .values()
                    .filter(|session| &session.user_id == user_id)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }
}

impl MemoryState {
    fn check_unique(
        &self,
        except: Option<&UserId>,
        username: Option<&UserName>,
        email: Option<&Email>,
    ) -> AuthResult<()> {
        let others = self
            .users
            .values()
            .filter(|u| Some(&u.user_id) != except);

        for user in others {
            if username.is_some_and(|name| &user.username == name) {
                return Err(AuthError::UsernameTaken);
            }
            if email.is_some_and(|email| &user.email == email) {
                return Err(AuthError::EmailTaken);
            }
        }
        Ok(())
    }
}

impl UserRepository for InMemoryAuthRepository {
    async fn create(&self, user: &User) -> AuthResult<()> {
        let mut state = self.lock()?;
        state.check_unique(None, Some(&user.username), Some(&user.email))?;
        state.users.insert(user.user_id, user.clone());
        Ok(())
    }

    async fn find_by_id(&self, user_id: &UserId) -> AuthResult<Option<User>> {
        Ok(self.lock()?.users.get(user_id).cloned())
    }

    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>> {
        Ok(self
            .lock()?
            .users
            .values()
            .find(|u| &u.email == email)
            .cloned())
    }

    async fn exists_by_username(&self, username: &UserName) -> AuthResult<bool> {
        Ok(self
            .lock()?
            .users
            .values()
            .any(|u| &u.username == username))
    }

    async fn exists_by_email(&self, email: &Email) -> AuthResult<bool> {
        Ok(self.lock()?.users.values().any(|u| &u.email == email))
    }

    async fn update_by_id(&self, user_id: &UserId, patch: &UserPatch) -> AuthResult<()> {
        let mut state = self.lock()?;
        state.check_unique(Some(user_id), patch.username.as_ref(), patch.email.as_ref())?;

        let user = state.users.get_mut(user_id).ok_or(AuthError::UserNotFound)?;
        user.apply(patch.clone());
        Ok(())
    }

    async fn delete_by_id(&self, user_id: &UserId) -> AuthResult<()> {
        let mut state = self.lock()?;
        state
            .users
            .remove(user_id)
            .ok_or(AuthError::UserNotFound)?;
        Ok(())
    }
}

impl AuthSessionRepository for InMemoryAuthRepository {
    async fn create_session(&self, session: &AuthSession) -> AuthResult<()> {
        self.lock()?
            .sessions
            .insert(session.session_id, session.clone());
        Ok(())
    }

    async fn find_session(&self, session_id: Uuid) -> AuthResult<Option<AuthSession>> {
        Ok(self
            .lock()?
            .sessions
            .get(&session_id)
            .cloned())
    }

    async fn update_session(&self, session: &AuthSession) -> AuthResult<()> {
        if let Some(stored) = self.lock()?.sessions.get_mut(&session.session_id) {
            stored.expires_at_ms = session.expires_at_ms;
            stored.last_activity_at = session.last_activity_at;
        }
        Ok(())
    }

    async fn update_snapshot(
        &self,
        user_id: &UserId,
        username: &UserName,
        email: &Email,
    ) -> AuthResult<u64> {
        let mut state = self.lock()?;
        let mut updated = 0;
        for session in state.sessions.values_mut() {
            if &session.user_id == user_id {
                session.username = username.to_string();
                session.email = email.to_string();
                updated += 1;
            }
        }
        Ok(updated)
    }

    async fn delete_session(&self, session_id: Uuid) -> AuthResult<()> {
        self.lock()?.sessions.remove(&session_id);
        Ok(())
    }

    async fn delete_sessions_for_user(&self, user_id: &UserId) -> AuthResult<u64> {
        let mut state = self.lock()?;
        let before = state.sessions.len();
        state.sessions.retain(|_, s| &s.user_id != user_id);
        Ok((before - state.sessions.len()) as u64)
    }

    async fn cleanup_expired(&self) -> AuthResult<u64> {
        let now_ms = Utc::now().timestamp_millis();
        let mut state = self.lock()?;
        let before = state.sessions.len();
        state.sessions.retain(|_, s| s.expires_at_ms >= now_ms);
        Ok((before - state.sessions.len()) as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_object::user_password::{RawPassword, UserPassword};

    fn user(name: &str, email: &str) -> User {
        let raw = RawPassword::new("Abc123".to_string()).unwrap();
        User::new(
            UserName::new(name).unwrap(),
            Email::new(email).unwrap(),
            UserPassword::from_raw(&raw).unwrap(),
        )
    }

    #[tokio::test]
    async fn test_create_enforces_uniqueness() {
        let repo = InMemoryAuthRepository::new();
        repo.create(&user("a", "a@b.com")).await.unwrap();

        assert!(matches!(
            repo.create(&user("a", "other@b.com")).await,
            Err(AuthError::UsernameTaken)
        ));
        assert!(matches!(
            repo.create(&user("other", "a@b.com")).await,
            Err(AuthError::EmailTaken)
        ));
        assert_eq!(repo.user_count(), 1);
    }

    #[tokio::test]
    async fn test_update_and_delete_missing_user() {
        let repo = InMemoryAuthRepository::new();
        let missing = UserId::new();

        assert!(matches!(
            repo.update_by_id(&missing, &UserPatch::default()).await,
            Err(AuthError::UserNotFound)
        ));
        assert!(matches!(
            repo.delete_by_id(&missing).await,
            Err(AuthError::UserNotFound)
        ));
    }

    #[tokio::test]
    async fn test_update_may_keep_own_email() {
        let repo = InMemoryAuthRepository::new();
        let alice = user("alice", "alice@b.com");
        repo.create(&alice).await.unwrap();

        let patch = UserPatch {
            email: Some(Email::new("alice@b.com").unwrap()),
            ..UserPatch::default()
        };
        repo.update_by_id(&alice.user_id, &patch).await.unwrap();
    }

    #[tokio::test]
    async fn test_session_lifecycle() {
        let repo = InMemoryAuthRepository::new();
        let alice = user("alice", "alice@b.com");
        let live = AuthSession::new(&alice, chrono::Duration::hours(1)).unwrap();
        let expired = AuthSession::new(&alice, chrono::Duration::milliseconds(-10)).unwrap();

        repo.create_session(&live).await.unwrap();
        repo.create_session(&expired).await.unwrap();

        assert!(repo.find_session(live.session_id).await.unwrap().is_some());
        let found = repo.find_session(expired.session_id).await.unwrap().unwrap();
        assert!(found.is_expired());

        assert_eq!(repo.cleanup_expired().await.unwrap(), 1);
        assert_eq!(repo.delete_sessions_for_user(&alice.user_id).await.unwrap(), 1);
        assert_eq!(repo.session_count(), 0);
    }
}

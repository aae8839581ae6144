//! Delete Account Use Case
//!
//! Deletes the owner's account and tears down all of its sessions.

use std::sync::Arc;

use crate::application::edit_profile::ensure_owner;
use crate::domain::repository::{AuthSessionRepository, UserRepository};
use crate::domain::value_object::user_id::UserId;
use crate::error::AuthResult;

/// Delete account use case
pub struct DeleteAccountUseCase<U, S>
where
    U: UserRepository,
    S: AuthSessionRepository,
{
    user_repo: Arc<U>,
    session_repo: Arc<S>,
}

impl<U, S> DeleteAccountUseCase<U, S>
where
    U: UserRepository,
    S: AuthSessionRepository,
{
    pub fn new(user_repo: Arc<U>, session_repo: Arc<S>) -> Self {
        Self {
            user_repo,
            session_repo,
        }
    }

    pub async fn execute(&self, actor: &UserId, target: &UserId) -> AuthResult<()> {
        ensure_owner(actor, target)?;

        self.user_repo.delete_by_id(target).await?;

        // Postgres cascades; other stores rely on this call
        let sessions_deleted = self.session_repo.delete_sessions_for_user(target).await?;

        tracing::info!(
            user_id = %target,
            sessions_deleted = sessions_deleted,
            "User account deleted"
        );

        Ok(())
    }
}

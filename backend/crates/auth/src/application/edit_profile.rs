//! Edit Profile Use Case
//!
//! Owner-only partial update of username, email and password.

use std::sync::Arc;

use crate::domain::entity::user::{User, UserPatch};
use crate::domain::repository::{AuthSessionRepository, UserRepository};
use crate::domain::value_object::{
    email::Email,
    user_id::UserId,
    user_name::UserName,
    user_password::{RawPassword, UserPassword},
};
use crate::error::{AuthError, AuthResult};

/// Edit profile input; empty fields are left unchanged
pub struct EditProfileInput {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Edit profile use case
pub struct EditProfileUseCase<U, S>
where
    U: UserRepository,
    S: AuthSessionRepository,
{
    user_repo: Arc<U>,
    session_repo: Arc<S>,
}

impl<U, S> EditProfileUseCase<U, S>
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

    /// Load the profile for the edit form
    pub async fn load(&self, actor: &UserId, target: &UserId) -> AuthResult<User> {
        ensure_owner(actor, target)?;

        self.user_repo
            .find_by_id(target)
            .await?
            .ok_or(AuthError::UserNotFound)
    }

    /// Apply the update and refresh the session snapshot
    pub async fn execute(
        &self,
        actor: &UserId,
        target: &UserId,
        input: EditProfileInput,
    ) -> AuthResult<User> {
        let mut user = self.load(actor, target).await?;

        let mut patch = UserPatch::default();

        if !input.username.trim().is_empty() {
            let username = UserName::new(&input.username)
                .map_err(|e| AuthError::Validation(e.to_string()))?;
            if username != user.username {
                if self.user_repo.exists_by_username(&username).await? {
                    return Err(AuthError::UsernameTaken);
                }
                patch.username = Some(username);
            }
        }

        if !input.email.trim().is_empty() {
            let email = Email::new(&input.email)?;
            if email != user.email {
                if self.user_repo.exists_by_email(&email).await? {
                    return Err(AuthError::EmailTaken);
                }
                patch.email = Some(email);
            }
        }

        if !input.password.is_empty() {
            let raw_password = RawPassword::new(input.password)?;
            patch.password_hash = Some(UserPassword::from_raw(&raw_password)?);
        }

        if patch.is_empty() {
            return Ok(user);
        }

        self.user_repo.update_by_id(&user.user_id, &patch).await?;
        user.apply(patch);

        let refreshed = self
            .session_repo
            .update_snapshot(&user.user_id, &user.username, &user.email)
            .await?;

        tracing::info!(
            user_id = %user.user_id,
            sessions_refreshed = refreshed,
            "User profile updated"
        );

        Ok(user)
    }
}

pub(crate) fn ensure_owner(actor: &UserId, target: &UserId) -> AuthResult<()> {
    if actor == target {
        Ok(())
    } else {
        Err(AuthError::NotOwner)
    }
}

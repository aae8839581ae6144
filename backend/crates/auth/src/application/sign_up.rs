//! Sign Up Use Case
//!
//! Creates a new user account and signs it in.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::session;
use crate::domain::entity::user::User;
use crate::domain::repository::{AuthSessionRepository, UserRepository};
use crate::domain::value_object::{
    email::Email,
    user_id::UserId,
    user_name::UserName,
    user_password::{RawPassword, UserPassword},
};
use crate::error::{AuthError, AuthResult};

/// Sign up input
pub struct SignUpInput {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Sign up output
pub struct SignUpOutput {
    /// Session token for cookie
    pub session_token: String,
    pub user_id: UserId,
}

/// Sign up use case
pub struct SignUpUseCase<U, S>
where
    U: UserRepository,
    S: AuthSessionRepository,
{
    user_repo: Arc<U>,
    session_repo: Arc<S>,
    config: Arc<AuthConfig>,
}

impl<U, S> SignUpUseCase<U, S>
where
    U: UserRepository,
    S: AuthSessionRepository,
{
    pub fn new(user_repo: Arc<U>, session_repo: Arc<S>, config: Arc<AuthConfig>) -> Self {
        Self {
            user_repo,
            session_repo,
            config,
        }
    }

    pub async fn execute(&self, input: SignUpInput) -> AuthResult<SignUpOutput> {
        if input.username.trim().is_empty()
            || input.email.trim().is_empty()
            || input.password.is_empty()
        {
            return Err(AuthError::MissingSignUpFields);
        }

        // Policy first, so a weak password is reported before shape errors
        let raw_password = RawPassword::new(input.password)?;

        let username =
            UserName::new(&input.username).map_err(|e| AuthError::Validation(e.to_string()))?;
        let email = Email::new(&input.email)?;

        if self.user_repo.exists_by_username(&username).await? {
            return Err(AuthError::UsernameTaken);
        }
        if self.user_repo.exists_by_email(&email).await? {
            return Err(AuthError::EmailTaken);
        }

        let password_hash = UserPassword::from_raw(&raw_password)?;
        let user = User::new(username, email, password_hash);

        // The unique constraints still decide concurrent sign-ups
        self.user_repo.create(&user).await?;

        let session_token =
            session::establish(self.session_repo.as_ref(), &self.config, &user).await?;

        tracing::info!(
            user_id = %user.user_id,
            username = %user.username,
            "User signed up"
        );

        Ok(SignUpOutput {
            session_token,
            user_id: user.user_id,
        })
    }
}

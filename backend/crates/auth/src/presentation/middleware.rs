//! Auth Middleware (access guard)
//!
//! `require_session` lets a request through only with a live session and
//! hands the identity to handlers as [`CurrentUser`]. `require_no_session`
//! keeps signed-in users away from the sign up and login pages.

use axum::extract::{FromRequestParts, Request, State};
use axum::http::request::Parts;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum_extra::extract::CookieJar;
use std::sync::Arc;
use uuid::Uuid;

use crate::application::CheckSessionUseCase;
use crate::application::config::AuthConfig;
use crate::domain::entity::auth_session::AuthSession;
use crate::domain::repository::AuthSessionRepository;
use crate::domain::value_object::user_id::UserId;
use crate::error::AuthError;
use crate::presentation::response::{redirect, redirect_with_cookie};

/// Middleware state
#[derive(Clone)]
pub struct AuthMiddlewareState<R>
where
    R: AuthSessionRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
}

/// Identity of the signed-in user, inserted by [`require_session`]
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub user_id: UserId,
    pub username: String,
    pub email: String,
    pub session_id: Uuid,
}

impl From<AuthSession> for CurrentUser {
    fn from(session: AuthSession) -> Self {
        Self {
            user_id: session.user_id,
            username: session.username,
            email: session.email,
            session_id: session.session_id,
        }
    }
}

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<CurrentUser>()
            .cloned()
            .ok_or(AuthError::SessionInvalid)
    }
}

/// Resolve the session cookie, if any
///
/// `Ok(None)` covers a missing, forged or expired cookie. Store failures
/// are returned as errors.
pub async fn resolve_session<R>(
    state: &AuthMiddlewareState<R>,
    jar: &CookieJar,
) -> Result<Option<AuthSession>, AuthError>
where
    R: AuthSessionRepository + Clone + Send + Sync + 'static,
{
    let Some(cookie) = jar.get(&state.config.session_cookie_name) else {
        return Ok(None);
    };

    let use_case = CheckSessionUseCase::new(state.repo.clone(), state.config.clone());
    match use_case.execute(cookie.value()).await {
        Ok(session) => Ok(Some(session)),
        Err(AuthError::SessionInvalid) => Ok(None),
        Err(e) => Err(e),
    }
}

/// Middleware that requires a valid auth session
pub async fn require_session<R>(
    State(state): State<AuthMiddlewareState<R>>,
    jar: CookieJar,
    mut req: Request,
    next: Next,
) -> Response
where
    R: AuthSessionRepository + Clone + Send + Sync + 'static,
{
    match resolve_session(&state, &jar).await {
        Ok(Some(session)) => {
            req.extensions_mut().insert(CurrentUser::from(session));
            next.run(req).await
        }
        Ok(None) if jar.get(&state.config.session_cookie_name).is_some() => {
            tracing::debug!("Stale session cookie");
            redirect_with_cookie("/login", state.config.cookie().build_delete_cookie())
        }
        Ok(None) => redirect("/login"),
        Err(e) => e.into_response(),
    }
}

/// Middleware that only lets visitors without a session through
pub async fn require_no_session<R>(
    State(state): State<AuthMiddlewareState<R>>,
    jar: CookieJar,
    req: Request,
    next: Next,
) -> Response
where
    R: AuthSessionRepository + Clone + Send + Sync + 'static,
{
    match resolve_session(&state, &jar).await {
        Ok(Some(_)) => redirect("/userProfile"),
        Ok(None) => next.run(req).await,
        Err(e) => e.into_response(),
    }
}

//! HTTP Handlers

use axum::Form;
use axum::extract::{Path, State};
use axum::response::{Html, IntoResponse, Response};
use axum_extra::extract::CookieJar;
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::{
    DeleteAccountUseCase, EditProfileUseCase, SignInUseCase, SignOutUseCase, SignUpUseCase,
};
use crate::domain::repository::{AuthSessionRepository, UserRepository};
use crate::domain::value_object::user_id::UserId;
use crate::error::{AuthError, AuthResult};
use crate::presentation::dto::{EditProfileForm, SignInForm, SignUpForm};
use crate::presentation::middleware::{AuthMiddlewareState, CurrentUser, resolve_session};
use crate::presentation::response::{form_error, redirect, redirect_with_cookie};
use crate::presentation::views;

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<R>
where
    R: UserRepository + AuthSessionRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
}

impl<R> AuthAppState<R>
where
    R: UserRepository + AuthSessionRepository + Clone + Send + Sync + 'static,
{
    pub fn guard(&self) -> AuthMiddlewareState<R> {
        AuthMiddlewareState {
            repo: self.repo.clone(),
            config: self.config.clone(),
        }
    }
}

/// Parse a `{id}` path segment; anything that is not a user id is not found
pub fn parse_user_id(raw: &str) -> AuthResult<UserId> {
    raw.parse().map_err(|_| AuthError::UserNotFound)
}

// ============================================================================
// Home
// ============================================================================

/// GET /
pub async fn home<R>(State(state): State<AuthAppState<R>>, jar: CookieJar) -> AuthResult<Html<String>>
where
    R: UserRepository + AuthSessionRepository + Clone + Send + Sync + 'static,
{
    let current = resolve_session(&state.guard(), &jar)
        .await?
        .map(CurrentUser::from);

    Ok(Html(views::home(current.as_ref())?))
}

// ============================================================================
// Sign Up
// ============================================================================

/// GET /signup
pub async fn sign_up_form() -> AuthResult<Html<String>> {
    Ok(Html(views::signup(None, "", "")?))
}

/// POST /signup
pub async fn sign_up<R>(
    State(state): State<AuthAppState<R>>,
    Form(form): Form<SignUpForm>,
) -> AuthResult<Response>
where
    R: UserRepository + AuthSessionRepository + Clone + Send + Sync + 'static,
{
    let use_case = SignUpUseCase::new(state.repo.clone(), state.repo.clone(), state.config.clone());

    // Kept for re-rendering; the password never is
    let (username, email) = (form.username.clone(), form.email.clone());

    match use_case.execute(form.into()).await {
        Ok(output) => Ok(redirect_with_cookie(
            "/userProfile",
            state.config.cookie().build_set_cookie(&output.session_token),
        )),
        Err(e) if e.is_form_error() => Ok(form_error(
            &e,
            views::signup(Some(&e.to_string()), &username, &email)?,
        )),
        Err(e) => Err(e),
    }
}

// ============================================================================
// Sign In
// ============================================================================

/// GET /login
pub async fn sign_in_form() -> AuthResult<Html<String>> {
    Ok(Html(views::login(None, "")?))
}

/// POST /login
pub async fn sign_in<R>(
    State(state): State<AuthAppState<R>>,
    Form(form): Form<SignInForm>,
) -> AuthResult<Response>
where
    R: UserRepository + AuthSessionRepository + Clone + Send + Sync + 'static,
{
    let use_case = SignInUseCase::new(state.repo.clone(), state.repo.clone(), state.config.clone());

    let email = form.email.clone();

    match use_case.execute(form.into()).await {
        Ok(output) => Ok(redirect_with_cookie(
            "/userProfile",
            state.config.cookie().build_set_cookie(&output.session_token),
        )),
        Err(e) if e.is_form_error() => Ok(form_error(&e, views::login(Some(&e.to_string()), &email)?)),
        Err(e) => Err(e),
    }
}

// ============================================================================
// Sign Out
// ============================================================================

/// POST /logout
pub async fn sign_out<R>(
    State(state): State<AuthAppState<R>>,
    current: CurrentUser,
) -> AuthResult<Response>
where
    R: UserRepository + AuthSessionRepository + Clone + Send + Sync + 'static,
{
    SignOutUseCase::new(state.repo.clone())
        .execute(current.session_id)
        .await?;

    Ok(redirect_with_cookie("/", state.config.cookie().build_delete_cookie()))
}

// ============================================================================
// Edit Profile (owner only)
// ============================================================================

/// GET /userProfile/{id}/edit
pub async fn edit_profile_form<R>(
    State(state): State<AuthAppState<R>>,
    current: CurrentUser,
    Path(id): Path<String>,
) -> AuthResult<Html<String>>
where
    R: UserRepository + AuthSessionRepository + Clone + Send + Sync + 'static,
{
    let target = parse_user_id(&id)?;
    let user = EditProfileUseCase::new(state.repo.clone(), state.repo.clone())
        .load(&current.user_id, &target)
        .await?;

    Ok(Html(views::edit_profile(&user, None)?))
}

/// POST /userProfile/{id}/edit
pub async fn edit_profile<R>(
    State(state): State<AuthAppState<R>>,
    current: CurrentUser,
    Path(id): Path<String>,
    Form(form): Form<EditProfileForm>,
) -> AuthResult<Response>
where
    R: UserRepository + AuthSessionRepository + Clone + Send + Sync + 'static,
{
    let target = parse_user_id(&id)?;
    let use_case = EditProfileUseCase::new(state.repo.clone(), state.repo.clone());

    match use_case.execute(&current.user_id, &target, form.into()).await {
        Ok(_) => Ok(redirect("/userProfile")),
        Err(e) if e.is_form_error() => {
            let user = use_case.load(&current.user_id, &target).await?;
            Ok(form_error(&e, views::edit_profile(&user, Some(&e.to_string()))?))
        }
        Err(e) => Err(e),
    }
}

// ============================================================================
// Delete Account (owner only)
// ============================================================================

/// POST /userProfile/{id}/delete
pub async fn delete_account<R>(
    State(state): State<AuthAppState<R>>,
    current: CurrentUser,
    Path(id): Path<String>,
) -> AuthResult<impl IntoResponse>
where
    R: UserRepository + AuthSessionRepository + Clone + Send + Sync + 'static,
{
    let target = parse_user_id(&id)?;
    DeleteAccountUseCase::new(state.repo.clone(), state.repo.clone())
        .execute(&current.user_id, &target)
        .await?;

    Ok(redirect_with_cookie("/signup", state.config.cookie().build_delete_cookie()))
}

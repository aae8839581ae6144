//! Auth Router

use axum::{
    Router, middleware,
    routing::{get, post},
};
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::repository::{AuthSessionRepository, UserRepository};
use crate::infra::postgres::PgAuthRepository;
use crate::presentation::handlers::{self, AuthAppState};
use crate::presentation::middleware::{require_no_session, require_session};

/// Create the Auth router with PostgreSQL repository
pub fn auth_router(repo: PgAuthRepository, config: AuthConfig) -> Router {
    auth_router_generic(repo, config)
}

/// Create a generic Auth router for any repository implementation
///
/// | Route | Guard |
/// |---|---|
/// | `GET /` | none |
/// | `GET/POST /signup`, `GET/POST /login` | no session |
/// | `GET/POST /userProfile/{id}/edit`, `POST /userProfile/{id}/delete`, `POST /logout` | session |
pub fn auth_router_generic<R>(repo: R, config: AuthConfig) -> Router
where
    R: UserRepository + AuthSessionRepository + Clone + Send + Sync + 'static,
{
    let state = AuthAppState {
        repo: Arc::new(repo),
        config: Arc::new(config),
    };
    let guard = state.guard();

    let guest = Router::new()
        .route(
            "/signup",
            get(handlers::sign_up_form).post(handlers::sign_up::<R>),
        )
        .route(
            "/login",
            get(handlers::sign_in_form).post(handlers::sign_in::<R>),
        )
        .route_layer(middleware::from_fn_with_state(
            guard.clone(),
            require_no_session::<R>,
        ));

    let member = Router::new()
        .route(
            "/userProfile/{id}/edit",
            get(handlers::edit_profile_form::<R>).post(handlers::edit_profile::<R>),
        )
        .route(
            "/userProfile/{id}/delete",
            post(handlers::delete_account::<R>),
        )
        .route("/logout", post(handlers::sign_out::<R>))
        .route_layer(middleware::from_fn_with_state(guard, require_session::<R>));

    Router::new()
        .route("/", get(handlers::home::<R>))
        .merge(guest)
        .merge(member)
        .with_state(state)
}

//! Tweet Router

use auth::AuthConfig;
use auth::PgAuthRepository;
use auth::domain::repository::{AuthSessionRepository, UserRepository};
use auth::middleware::require_session;
use axum::{Router, middleware, routing::get};
use std::sync::Arc;

use crate::domain::repository::TweetRepository;
use crate::infra::postgres::PgTweetRepository;
use crate::presentation::handlers::{self, TweetAppState};

/// Create the Tweet router with PostgreSQL repositories
pub fn tweet_router(
    users: PgAuthRepository,
    tweets: PgTweetRepository,
    config: AuthConfig,
) -> Router {
    tweet_router_generic(users, tweets, config)
}

/// Create a generic Tweet router; every route requires a session
pub fn tweet_router_generic<R, T>(users: R, tweets: T, config: AuthConfig) -> Router
where
    R: UserRepository + AuthSessionRepository + Clone + Send + Sync + 'static,
    T: TweetRepository + Clone + Send + Sync + 'static,
{
    let state = TweetAppState {
        users: Arc::new(users),
        tweets: Arc::new(tweets),
        config: Arc::new(config),
    };
    let guard = state.guard();

    Router::new()
        .route("/userProfile", get(handlers::own_profile::<R, T>))
        .route("/userProfile/{id}", get(handlers::user_profile::<R, T>))
        .route(
            "/create-tweet",
            get(handlers::create_tweet_form).post(handlers::create_tweet::<R, T>),
        )
        .route("/all-tweets", get(handlers::all_tweets::<R, T>))
        .route_layer(middleware::from_fn_with_state(guard, require_session::<R>))
        .with_state(state)
}

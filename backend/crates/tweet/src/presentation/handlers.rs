//! HTTP Handlers

use auth::application::SignOutUseCase;
use auth::application::config::AuthConfig;
use auth::domain::repository::{AuthSessionRepository, UserRepository};
use auth::middleware::AuthMiddlewareState;
use auth::presentation::handlers::parse_user_id;
use auth::presentation::response::{redirect, redirect_with_cookie};
use auth::{AuthError, CurrentUser};
use axum::Form;
use axum::extract::{Path, State};
use axum::response::{Html, IntoResponse, Response};
use std::sync::Arc;

use crate::application::{CreateTweetUseCase, ListTweetsUseCase, ViewProfileUseCase};
use crate::domain::repository::TweetRepository;
use crate::error::{TweetError, TweetResult};
use crate::presentation::dto::CreateTweetForm;
use crate::presentation::views;

/// Shared state for tweet handlers
#[derive(Clone)]
pub struct TweetAppState<R, T>
where
    R: UserRepository + AuthSessionRepository + Clone + Send + Sync + 'static,
    T: TweetRepository + Clone + Send + Sync + 'static,
{
    pub users: Arc<R>,
    pub tweets: Arc<T>,
    pub config: Arc<AuthConfig>,
}

impl<R, T> TweetAppState<R, T>
where
    R: UserRepository + AuthSessionRepository + Clone + Send + Sync + 'static,
    T: TweetRepository + Clone + Send + Sync + 'static,
{
    pub fn guard(&self) -> AuthMiddlewareState<R> {
        AuthMiddlewareState {
            repo: self.users.clone(),
            config: self.config.clone(),
        }
    }
}

/// GET /userProfile
///
/// A session whose user has been deleted is torn down.
pub async fn own_profile<R, T>(
    State(state): State<TweetAppState<R, T>>,
    current: CurrentUser,
) -> TweetResult<Response>
where
    R: UserRepository + AuthSessionRepository + Clone + Send + Sync + 'static,
    T: TweetRepository + Clone + Send + Sync + 'static,
{
    let use_case = ViewProfileUseCase::new(state.users.clone(), state.tweets.clone());

    match use_case.execute(&current.user_id).await {
        Ok(profile) => Ok(Html(views::own_profile(&current, &profile)?).into_response()),
        Err(TweetError::Auth(AuthError::UserNotFound)) => {
            tracing::warn!(user_id = %current.user_id, "Session refers to a deleted user");
            SignOutUseCase::new(state.users.clone())
                .execute(current.session_id)
                .await?;
            Ok(redirect_with_cookie(
                "/login",
                state.config.cookie().build_delete_cookie(),
            ))
        }
        Err(e) => Err(e),
    }
}

/// GET /userProfile/{id}
pub async fn user_profile<R, T>(
    State(state): State<TweetAppState<R, T>>,
    current: CurrentUser,
    Path(id): Path<String>,
) -> TweetResult<Html<String>>
where
    R: UserRepository + AuthSessionRepository + Clone + Send + Sync + 'static,
    T: TweetRepository + Clone + Send + Sync + 'static,
{
    let user_id = parse_user_id(&id)?;
    let profile = ViewProfileUseCase::new(state.users.clone(), state.tweets.clone())
        .execute(&user_id)
        .await?;

    Ok(Html(views::user_profile(&current, &profile)?))
}

/// GET /create-tweet
pub async fn create_tweet_form(current: CurrentUser) -> TweetResult<Html<String>> {
    Ok(Html(views::create_tweet(&current, None, "", "")?))
}

/// POST /create-tweet
pub async fn create_tweet<R, T>(
    State(state): State<TweetAppState<R, T>>,
    current: CurrentUser,
    Form(form): Form<CreateTweetForm>,
) -> TweetResult<Response>
where
    R: UserRepository + AuthSessionRepository + Clone + Send + Sync + 'static,
    T: TweetRepository + Clone + Send + Sync + 'static,
{
    let (content, gif) = (form.content.clone(), form.gif.clone());

    match CreateTweetUseCase::new(state.tweets.clone())
        .execute(current.user_id, form.into())
        .await
    {
        Ok(_) => Ok(redirect("/all-tweets")),
        Err(e) if e.is_form_error() => {
            e.log();
            let html = views::create_tweet(&current, Some(&e.to_string()), &content, &gif)?;
            Ok((e.status_code(), Html(html)).into_response())
        }
        Err(e) => Err(e),
    }
}

/// GET /all-tweets
pub async fn all_tweets<R, T>(
    State(state): State<TweetAppState<R, T>>,
    current: CurrentUser,
) -> TweetResult<Html<String>>
where
    R: UserRepository + AuthSessionRepository + Clone + Send + Sync + 'static,
    T: TweetRepository + Clone + Send + Sync + 'static,
{
    let tweets = ListTweetsUseCase::new(state.tweets.clone()).execute().await?;
    Ok(Html(views::all_tweets(&current, &tweets)?))
}

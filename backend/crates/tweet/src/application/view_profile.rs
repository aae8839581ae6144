//! View Profile Use Case
//!
//! A user together with the tweets they wrote.

use auth::AuthError;
use auth::domain::entity::user::User;
use auth::domain::repository::UserRepository;
use kernel::id::UserId;
use std::sync::Arc;

use crate::domain::entities::TweetWithCreator;
use crate::domain::repository::TweetRepository;
use crate::error::TweetResult;

/// Data behind a profile page
#[derive(Debug, Clone)]
pub struct ProfilePage {
    pub user: User,
    pub tweets: Vec<TweetWithCreator>,
}

pub struct ViewProfileUseCase<U, T>
where
    U: UserRepository,
    T: TweetRepository,
{
    user_repo: Arc<U>,
    tweet_repo: Arc<T>,
}

impl<U, T> ViewProfileUseCase<U, T>
where
    U: UserRepository,
    T: TweetRepository,
{
    pub fn new(user_repo: Arc<U>, tweet_repo: Arc<T>) -> Self {
        Self {
            user_repo,
            tweet_repo,
        }
    }

    /// Fails with `AuthError::UserNotFound` when the user does not exist
    pub async fn execute(&self, user_id: &UserId) -> TweetResult<ProfilePage> {
        let user = self
            .user_repo
            .find_by_id(user_id)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        let tweets = self.tweet_repo.find_by_creator(&user.user_id).await?;

        Ok(ProfilePage { user, tweets })
    }
}

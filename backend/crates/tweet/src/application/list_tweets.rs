//! List Tweets Use Case

use std::sync::Arc;

use crate::domain::entities::TweetWithCreator;
use crate::domain::repository::TweetRepository;
use crate::error::TweetResult;

pub struct ListTweetsUseCase<T>
where
    T: TweetRepository,
{
    tweet_repo: Arc<T>,
}

impl<T> ListTweetsUseCase<T>
where
    T: TweetRepository,
{
    pub fn new(tweet_repo: Arc<T>) -> Self {
        Self { tweet_repo }
    }

    /// Every tweet, newest first
    pub async fn execute(&self) -> TweetResult<Vec<TweetWithCreator>> {
        let tweets = self.tweet_repo.find_all().await?;
        tracing::debug!(count = tweets.len(), "Listed all tweets");
        Ok(tweets)
    }
}

//! Create Tweet Use Case

use kernel::id::UserId;
use std::sync::Arc;

use crate::domain::entities::Tweet;
use crate::domain::repository::TweetRepository;
use crate::domain::value_objects::{Gif, TweetContent};
use crate::error::TweetResult;

/// Input DTO for create tweet
#[derive(Debug, Clone, Default)]
pub struct CreateTweetInput {
    pub content: String,
    pub gif: String,
}

/// Create Tweet Use Case
pub struct CreateTweetUseCase<T>
where
    T: TweetRepository,
{
    tweet_repo: Arc<T>,
}

impl<T> CreateTweetUseCase<T>
where
    T: TweetRepository,
{
    pub fn new(tweet_repo: Arc<T>) -> Self {
        Self { tweet_repo }
    }

    /// Store a tweet owned by `creator_id`
    pub async fn execute(&self, creator_id: UserId, input: CreateTweetInput) -> TweetResult<Tweet> {
        let content = TweetContent::new(&input.content)?;
        let tweet = Tweet::new(creator_id, content, Gif::parse(&input.gif));

        self.tweet_repo.create(&tweet).await?;

        tracing::info!(
            tweet_id = %tweet.tweet_id,
            creator_id = %tweet.creator_id,
            has_gif = tweet.gif.is_some(),
            "Tweet created"
        );

        Ok(tweet)
    }
}

//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use kernel::id::UserId;

use crate::domain::entities::{Tweet, TweetWithCreator};
use crate::error::TweetResult;

/// Tweet repository trait
///
/// Listings are newest first with the creator expanded.
#[trait_variant::make(TweetRepository: Send)]
pub trait LocalTweetRepository {
    /// Store a new tweet
    async fn create(&self, tweet: &Tweet) -> TweetResult<()>;

    /// Every tweet
    async fn find_all(&self) -> TweetResult<Vec<TweetWithCreator>>;

    /// Tweets written by one user
    async fn find_by_creator(&self, creator_id: &UserId) -> TweetResult<Vec<TweetWithCreator>>;
}

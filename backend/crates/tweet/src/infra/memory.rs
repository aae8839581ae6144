//! In-memory Repository (tests)
//!
//! Expands creators from an [`InMemoryAuthRepository`], so deleting a user
//! there orphans their tweets the same way the LEFT JOIN does.

use std::sync::{Arc, Mutex, MutexGuard};

use auth::InMemoryAuthRepository;
use kernel::id::UserId;

use crate::domain::entities::{Creator, Tweet, TweetWithCreator};
use crate::domain::repository::TweetRepository;
use crate::error::{TweetError, TweetResult};

#[derive(Clone)]
pub struct InMemoryTweetRepository {
    tweets: Arc<Mutex<Vec<Tweet>>>,
    users: InMemoryAuthRepository,
}

impl InMemoryTweetRepository {
    pub fn new(users: InMemoryAuthRepository) -> Self {
        Self {
            tweets: Arc::new(Mutex::new(Vec::new())),
            users,
        }
    }

    fn lock(&self) -> TweetResult<MutexGuard<'_, Vec<Tweet>>> {
        self.tweets
            .lock()
            .map_err(|_| TweetError::Internal("in-memory store poisoned".to_string()))
    }

    /// Every stored tweet in insertion order
    pub fn stored(&self) -> Vec<Tweet> {
        self.lock().map(|t| t.clone()).unwrap_or_default()
    }

    fn expand(&self, tweet: Tweet) -> TweetWithCreator {
        let creator = self.users.user_by_id(&tweet.creator_id).map(|u| Creator {
            user_id: u.user_id,
            username: u.username.into_inner(),
        });
        TweetWithCreator { tweet, creator }
    }

    fn newest_first(&self, filter: impl Fn(&Tweet) -> bool) -> TweetResult<Vec<TweetWithCreator>> {
        let mut tweets: Vec<Tweet> = self.lock()?.iter().filter(|t| filter(t)).cloned().collect();
        // Stable sort keeps later inserts ahead on equal timestamps
        tweets.reverse();
        tweets.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(tweets.into_iter().map(|t| self.expand(t)).collect())
    }
}

impl TweetRepository for InMemoryTweetRepository {
    async fn create(&self, tweet: &Tweet) -> TweetResult<()> {
        self.lock()?.push(tweet.clone());
        Ok(())
    }

    async fn find_all(&self) -> TweetResult<Vec<TweetWithCreator>> {
        self.newest_first(|_| true)
    }

    async fn find_by_creator(&self, creator_id: &UserId) -> TweetResult<Vec<TweetWithCreator>> {
        self.newest_first(|t| &t.creator_id == creator_id)
    }
}

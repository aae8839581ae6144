//! Domain Entities

use chrono::{DateTime, Utc};
use kernel::id::{TweetId, UserId};

use crate::domain::value_objects::{Gif, TweetContent};

/// Shown in place of a creator whose account no longer exists
pub const DELETED_CREATOR: &str = "[deleted user]";

/// Tweet entity
#[derive(Debug, Clone)]
pub struct Tweet {
    pub tweet_id: TweetId,
    pub content: TweetContent,
    pub gif: Option<Gif>,
    pub creator_id: UserId,
    pub created_at: DateTime<Utc>,
}

impl Tweet {
    pub fn new(creator_id: UserId, content: TweetContent, gif: Option<Gif>) -> Self {
        Self {
            tweet_id: TweetId::new(),
            content,
            gif,
            creator_id,
            created_at: Utc::now(),
        }
    }
}

/// Public part of the user who wrote a tweet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Creator {
    pub user_id: UserId,
    pub username: String,
}

/// A tweet with its creator expanded
///
/// `creator` is `None` when the owning account has been deleted.
#[derive(Debug, Clone)]
pub struct TweetWithCreator {
    pub tweet: Tweet,
    pub creator: Option<Creator>,
}

impl TweetWithCreator {
    pub fn creator_name(&self) -> &str {
        self.creator
            .as_ref()
            .map(|c| c.username.as_str())
            .unwrap_or(DELETED_CREATOR)
    }
}

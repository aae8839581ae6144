//! PostgreSQL Repository Implementation

use chrono::{DateTime, Utc};
use kernel::id::{TweetId, UserId};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entities::{Creator, Tweet, TweetWithCreator};
use crate::domain::repository::TweetRepository;
use crate::domain::value_objects::{Gif, TweetContent};
use crate::error::TweetResult;

/// Columns shared by both listings; the creator comes from a LEFT JOIN
const SELECT_WITH_CREATOR: &str = r#"
    SELECT
        t.tweet_id,
        t.content,
        t.gif,
        t.creator_id,
        t.created_at,
        u.username AS creator_username
    FROM tweets t
    LEFT JOIN users u ON u.user_id = t.creator_id
"#;

/// PostgreSQL-backed repository
#[derive(Clone)]
pub struct PgTweetRepository {
    pool: PgPool,
}

impl PgTweetRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl TweetRepository for PgTweetRepository {
    async fn create(&self, tweet: &Tweet) -> TweetResult<()> {
        sqlx::query(
            r#"
            INSERT INTO tweets (
                tweet_id,
                content,
                gif,
                creator_id,
                created_at
            ) VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(tweet.tweet_id.as_uuid())
        .bind(tweet.content.as_str())
        .bind(tweet.gif.as_ref().map(|g| g.as_str()))
        .bind(tweet.creator_id.as_uuid())
        .bind(tweet.created_at)
        .execute(&self.pool)
        .await?;

        tracing::debug!(tweet_id = %tweet.tweet_id, "Tweet row inserted");
        Ok(())
    }

    async fn find_all(&self) -> TweetResult<Vec<TweetWithCreator>> {
        let query = format!("{SELECT_WITH_CREATOR} ORDER BY t.created_at DESC");

        let rows = sqlx::query_as::<_, TweetRow>(&query)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(TweetRow::into_tweet).collect())
    }

    async fn find_by_creator(&self, creator_id: &UserId) -> TweetResult<Vec<TweetWithCreator>> {
        let query =
            format!("{SELECT_WITH_CREATOR} WHERE t.creator_id = $1 ORDER BY t.created_at DESC");

        let rows = sqlx::query_as::<_, TweetRow>(&query)
            .bind(creator_id.as_uuid())
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(TweetRow::into_tweet).collect())
    }
}

// Internal row type for sqlx mapping
#[derive(sqlx::FromRow)]
struct TweetRow {
    tweet_id: Uuid,
    content: String,
    gif: Option<String>,
    creator_id: Uuid,
    created_at: DateTime<Utc>,
    creator_username: Option<String>,
}

impl TweetRow {
    fn into_tweet(self) -> TweetWithCreator {
        let creator_id = UserId::from_uuid(self.creator_id);
        TweetWithCreator {
            creator: self.creator_username.map(|username| Creator {
                user_id: creator_id,
                username,
            }),
            tweet: Tweet {
                tweet_id: TweetId::from_uuid(self.tweet_id),
                content: TweetContent::from_db(self.content),
                gif: self.gif.map(Gif::from_db),
                creator_id,
                created_at: self.created_at,
            },
        }
    }
}

//! HTML views for profiles and tweet listings

use std::sync::LazyLock;

use auth::CurrentUser;
use kernel::html::Templates;
use minijinja::context;
use serde::Serialize;

use crate::application::ProfilePage;
use crate::domain::entities::TweetWithCreator;
use crate::domain::value_objects::MAX_TWEET_LENGTH;
use crate::error::TweetResult;

static TEMPLATES: LazyLock<Templates> = LazyLock::new(|| {
    Templates::new(&[
        ("tweet_list.html", include_str!("../../templates/tweet_list.html")),
        ("own_profile.html", include_str!("../../templates/own_profile.html")),
        ("user_profile.html", include_str!("../../templates/user_profile.html")),
        ("create_tweet.html", include_str!("../../templates/create_tweet.html")),
        ("all_tweets.html", include_str!("../../templates/all_tweets.html")),
    ])
});

/// One listed tweet as the templates see it
#[derive(Serialize)]
struct TweetItem<'a> {
    author: &'a str,
    /// Absent for tweets of deleted users, which get no profile link
    author_id: Option<String>,
    created_at: String,
    content: &'a str,
    gif: Option<&'a str>,
}

impl<'a> From<&'a TweetWithCreator> for TweetItem<'a> {
    fn from(item: &'a TweetWithCreator) -> Self {
        Self {
            author: item.creator_name(),
            author_id: item.creator.as_ref().map(|c| c.user_id.to_string()),
            created_at: item.tweet.created_at.format("%Y-%m-%d %H:%M").to_string(),
            content: item.tweet.content.as_str(),
            gif: item.tweet.gif.as_ref().map(|g| g.as_str()),
        }
    }
}

fn items(tweets: &[TweetWithCreator]) -> Vec<TweetItem<'_>> {
    tweets.iter().map(TweetItem::from).collect()
}

/// Own profile: account details, edit link and own tweets
pub fn own_profile(viewer: &CurrentUser, profile: &ProfilePage) -> TweetResult<String> {
    let user = &profile.user;
    Ok(TEMPLATES.render(
        "own_profile.html",
        context! {
            username => viewer.username.as_str(),
            profile_id => user.user_id.to_string(),
            profile_username => user.username.as_str(),
            profile_email => user.email.as_str(),
            tweets => items(&profile.tweets),
        },
    )?)
}

/// Somebody's public profile
pub fn user_profile(viewer: &CurrentUser, profile: &ProfilePage) -> TweetResult<String> {
    Ok(TEMPLATES.render(
        "user_profile.html",
        context! {
            username => viewer.username.as_str(),
            profile_username => profile.user.username.as_str(),
            tweets => items(&profile.tweets),
        },
    )?)
}

/// Tweet form, optionally with the previous input and an error
pub fn create_tweet(
    viewer: &CurrentUser,
    error: Option<&str>,
    content: &str,
    gif: &str,
) -> TweetResult<String> {
    Ok(TEMPLATES.render(
        "create_tweet.html",
        context! {
            username => viewer.username.as_str(),
            error => error,
            max_length => MAX_TWEET_LENGTH,
            content => content,
            gif => gif,
        },
    )?)
}

/// Every tweet
pub fn all_tweets(viewer: &CurrentUser, tweets: &[TweetWithCreator]) -> TweetResult<String> {
    Ok(TEMPLATES.render(
        "all_tweets.html",
        context! { username => viewer.username.as_str(), tweets => items(tweets) },
    )?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Creator, Tweet};
    use crate::domain::value_objects::{Gif, TweetContent};
    use kernel::id::UserId;
    use uuid::Uuid;

    fn viewer() -> CurrentUser {
        CurrentUser {
            user_id: UserId::new(),
            username: "viewer".into(),
            email: "v@b.com".into(),
            session_id: Uuid::new_v4(),
        }
    }

    fn item(content: &str, creator: Option<&str>) -> TweetWithCreator {
        let tweet = Tweet::new(
            UserId::new(),
            TweetContent::new(content).unwrap(),
            Gif::parse("https://example.com/a.gif"),
        );
        TweetWithCreator {
            creator: creator.map(|name| Creator {
                user_id: tweet.creator_id,
                username: name.into(),
            }),
            tweet,
        }
    }

    #[test]
    fn test_all_tweets_escapes_content() {
        let html = all_tweets(&viewer(), &[item("<script>x</script>", Some("<b>"))]).unwrap();
        assert!(html.contains("&lt;script&gt;x&lt;"));
        assert!(html.contains("&lt;b&gt;"));
        assert!(!html.contains("<script>"));
        assert!(html.contains("<img src=\"https:"));
        assert!(html.contains("example.com"));
    }

    #[test]
    fn test_orphan_tweet_has_no_profile_link() {
        let tweet = item("hi", None);
        let html = all_tweets(&viewer(), std::slice::from_ref(&tweet)).unwrap();
        assert!(html.contains("[deleted user]"));
        assert!(!html.contains(&tweet.tweet.creator_id.to_string()));
    }

    #[test]
    fn test_empty_listing() {
        assert!(all_tweets(&viewer(), &[]).unwrap().contains("No tweets yet."));
    }

    #[test]
    fn test_create_form_keeps_input() {
        let html =
            create_tweet(&viewer(), Some("Tweet content cannot be empty."), "a&b", "").unwrap();
        assert!(html.contains(">a&amp;b</textarea>"));
        assert!(html.contains("maxlength=\"280\""));
        assert!(html.contains("Tweet content cannot be empty."));
    }
}

//! Domain Value Objects

use crate::error::{TweetError, TweetResult};

/// Maximum tweet length in characters
pub const MAX_TWEET_LENGTH: usize = 280;

/// Tweet body: trimmed, 1..=280 characters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TweetContent(String);

impl TweetContent {
    pub fn new(input: &str) -> TweetResult<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(TweetError::EmptyContent);
        }

        let length = trimmed.chars().count();
        if length > MAX_TWEET_LENGTH {
            return Err(TweetError::ContentTooLong {
                max: MAX_TWEET_LENGTH,
                actual: length,
            });
        }

        Ok(Self(trimmed.to_string()))
    }

    /// Rebuild from a stored row
    pub fn from_db(value: String) -> Self {
        Self(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Optional media link attached to a tweet; blank input means none
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gif(String);

impl Gif {
    pub fn parse(input: &str) -> Option<Self> {
        let trimmed = input.trim();
        (!trimmed.is_empty()).then(|| Self(trimmed.to_string()))
    }

    pub fn from_db(value: String) -> Self {
        Self(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_is_trimmed() {
        let content = TweetContent::new("  hello  ").unwrap();
        assert_eq!(content.as_str(), "hello");
    }

    #[test]
    fn test_content_blank_rejected() {
        assert!(matches!(TweetContent::new(""), Err(TweetError::EmptyContent)));
        assert!(matches!(TweetContent::new(" \n\t"), Err(TweetError::EmptyContent)));
    }

    #[test]
    fn test_content_length_counts_chars() {
        assert!(TweetContent::new(&"あ".repeat(MAX_TWEET_LENGTH)).is_ok());

        let err = TweetContent::new(&"a".repeat(MAX_TWEET_LENGTH + 1)).unwrap_err();
        assert!(matches!(
            err,
            TweetError::ContentTooLong { max: 280, actual: 281 }
        ));
    }

    #[test]
    fn test_gif_blank_is_none() {
        assert_eq!(Gif::parse(""), None);
        assert_eq!(Gif::parse("   "), None);
        assert_eq!(
            Gif::parse(" https://example.com/cat.gif ").unwrap().as_str(),
            "https://example.com/cat.gif"
        );
    }
}

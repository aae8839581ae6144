//! Application Layer - Use Cases

pub mod create_tweet;
pub mod list_tweets;
pub mod view_profile;

pub use create_tweet::{CreateTweetInput, CreateTweetUseCase};
pub use list_tweets::ListTweetsUseCase;
pub use view_profile::{ProfilePage, ViewProfileUseCase};

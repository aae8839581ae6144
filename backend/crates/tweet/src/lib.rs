//! Tweet Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Tweet entity, content rules, repository trait
//! - `application/` - Use cases
//! - `infra/` - Database implementation
//! - `presentation/` - HTTP handlers and views
//!
//! Every route sits behind the session guard of the `auth` crate. Listings
//! expand each tweet's creator; tweets of a deleted user stay listed without
//! one.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use error::{TweetError, TweetResult};
pub use infra::postgres::PgTweetRepository;
pub use presentation::router::{tweet_router, tweet_router_generic};

pub mod models {
    pub use crate::domain::entities::*;
    pub use crate::domain::value_objects::*;
    pub use crate::presentation::dto::*;
}

#[cfg(test)]
mod tests;

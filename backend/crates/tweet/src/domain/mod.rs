//! Domain Layer - Business logic and entities
//!
//! This layer contains:
//! - Domain entities (Tweet, TweetWithCreator)
//! - Domain value objects (TweetContent, Gif)
//! - Repository traits (interfaces)

pub mod entities;
pub mod repository;
pub mod value_objects;

//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Password hashing (Argon2id) and the sign-up strength policy
//! - Cookie management
//! - Secret/configuration decoding helpers

pub mod config;
pub mod cookie;
pub mod password;

//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Business logic, entities, repository traits
//! - `application/` - Use cases and application services
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, forms, views, router, access guard
//!
//! ## Features
//! - Sign up with username + email + password
//! - Sign in with email + password
//! - Server-side sessions referenced by a signed cookie token
//! - Profile edit and account deletion (owner only)
//!
//! ## Security Model
//! - Passwords hashed with Argon2id, never stored or logged in clear text
//! - Session cookie is `HttpOnly`, HMAC-signed, and only names a server-side record
//! - Deleting an account destroys every session of that account

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::{AuthConfig, MAX_SESSION_TTL};
pub use error::{AuthError, AuthResult};
pub use infra::postgres::PgAuthRepository;
pub use presentation::middleware::CurrentUser;
pub use presentation::router::{auth_router, auth_router_generic};

#[cfg(any(test, feature = "memory"))]
pub use infra::memory::InMemoryAuthRepository;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}

pub mod middleware {
    pub use crate::presentation::middleware::*;
}

//! Presentation Layer
//!
//! HTTP handlers, form DTOs, views, router, and middleware.

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod router;
pub mod views;

pub use handlers::AuthAppState;
pub use middleware::{AuthMiddlewareState, CurrentUser, require_no_session, require_session};
pub use router::{auth_router, auth_router_generic};

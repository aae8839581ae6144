//! Infrastructure Layer
//!
//! Database implementations.

pub mod postgres;

#[cfg(any(test, feature = "memory"))]
pub mod memory;

pub use postgres::PgAuthRepository;

//! Database layer - connection pool, schema, and the user repository
//!
//! # Design Principles
//!
//! - Connection pool, dependency-injected at construction - no globals
//! - Rely on DB constraints, handle conflicts - no check-then-insert
//! - Mutations report NotFound via affected-row counts - no pre-lookup

pub mod health;
pub mod migrations;
pub mod pool;
pub mod users;

pub use health::{probe, HealthReport};
pub use pool::create_pool;
pub use users::{DbError, User, UserRepo};

//! userapi-server: HTTP CRUD service over a `users` table
//!
//! Three layers, composed linearly: the router dispatches to handlers,
//! handlers validate input and call the repository, and the repository
//! owns all SQL against the pooled Postgres connection.

pub mod config;
pub mod db;
pub mod http;
pub mod models;

pub use config::ServerConfig;
pub use http::error::ApiError;
pub use http::server::{build_router, run_server, AppState};

//! Authentication stubs
//!
//! The register and login endpoints accept the request and return 200
//! with an empty body. No credentials are checked and nothing is stored.

use std::sync::Arc;

use axum::{http::StatusCode, routing::post, Router};

use crate::http::server::AppState;

/// POST /register - stub
async fn register() -> StatusCode {
    tracing::info!("register called (stub)");
    StatusCode::OK
}

/// POST /login - stub
async fn login() -> StatusCode {
    tracing::info!("login called (stub)");
    StatusCode::OK
}

/// Auth routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
}

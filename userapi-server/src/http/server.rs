//! Axum server setup
//!
//! Router assembly under the /v1 prefix, CORS and tracing layers, and
//! graceful shutdown on SIGTERM/Ctrl+C. The pool is closed once the
//! server has drained.

use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use sqlx::PgPool;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::routes;
use crate::config::ServerConfig;

/// Shared application state
///
/// The pool is the only shared resource; it is internally synchronized
/// and safe for concurrent handlers.
pub struct AppState {
    pub pool: PgPool,
}

/// Build the application router with all routes nested under /v1.
///
/// The nest strips the version prefix before the inner route table is
/// consulted, so handlers see unprefixed paths.
pub fn build_router(state: Arc<AppState>) -> Router {
    let v1 = Router::new()
        .merge(routes::home::router())
        .merge(routes::users::router())
        .merge(routes::auth::router());

    // The nest matches `/v1` but not `/v1/`; wire the home handler to the
    // trailing-slash form explicitly so both spellings reach it.
    Router::new()
        .nest("/v1", v1)
        .route("/v1/", get(routes::home::home))
        .with_state(state)
}

/// Run the HTTP server.
pub async fn run_server(pool: PgPool, config: ServerConfig) -> Result<(), ServerError> {
    let state = Arc::new(AppState { pool: pool.clone() });

    let cors = if config.cors_permissive {
        tracing::warn!("CORS: Permissive mode enabled - all origins allowed");
        CorsLayer::permissive()
    } else {
        // Localhost only
        CorsLayer::new()
            .allow_origin([
                "http://localhost:8080".parse().unwrap(),
                "http://127.0.0.1:8080".parse().unwrap(),
            ])
            .allow_methods(Any)
            .allow_headers(Any)
    };

    let app = build_router(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // Teardown: release pooled connections before exiting
    pool.close().await;
    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, starting shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting shutdown");
        }
    }
}

/// Server error type
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

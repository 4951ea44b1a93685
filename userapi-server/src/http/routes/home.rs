//! Home and health endpoints

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::db::{self, HealthReport};
use crate::http::server::AppState;

/// Home response
#[derive(Serialize)]
pub struct HomeResponse {
    pub message: &'static str,
}

/// GET / - main handler
///
/// Fires a health probe as a side effect; the verdict is logged and
/// otherwise discarded.
pub(crate) async fn home(State(state): State<Arc<AppState>>) -> Json<HomeResponse> {
    let report = db::probe(&state.pool).await;
    tracing::info!(status = report.status, "Home Handler called");

    Json(HomeResponse {
        message: "Main Handler",
    })
}

/// GET /health - store connectivity and pool statistics
///
/// Always 200; the body's `status` field carries the verdict.
async fn health(State(state): State<Arc<AppState>>) -> Json<HealthReport> {
    Json(db::probe(&state.pool).await)
}

/// Home routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(home))
        .route("/health", get(health))
}

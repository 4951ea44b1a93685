//! User CRUD endpoints

use std::sync::Arc;

use axum::{
    extract::rejection::JsonRejection,
    extract::State,
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::db::{User, UserRepo};
use crate::http::error::ApiError;
use crate::http::extractors::ValidUserId;
use crate::http::server::AppState;
use crate::models::ValidationError;

/// Create/update request body
#[derive(Deserialize)]
pub struct UserRequest {
    pub username: String,
    pub email: String,
}

/// Confirmation response for mutations
#[derive(Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// An undecodable body is a 400, not axum's default 415/422.
fn decode_body(body: Result<Json<UserRequest>, JsonRejection>) -> Result<UserRequest, ApiError> {
    let Json(req) = body.map_err(|_| {
        ApiError::Validation(ValidationError::InvalidFormat {
            field: "body",
            reason: "expected JSON with username and email",
        })
    })?;
    Ok(req)
}

/// GET /users - list all users
async fn list_users(State(state): State<Arc<AppState>>) -> Result<Json<Vec<User>>, ApiError> {
    let users = UserRepo::new(&state.pool).list().await?;
    Ok(Json(users))
}

/// GET /users/{id} - get a single user
async fn get_user(
    State(state): State<Arc<AppState>>,
    ValidUserId(id): ValidUserId,
) -> Result<Json<User>, ApiError> {
    let user = UserRepo::new(&state.pool).get(id).await?;
    Ok(Json(user))
}

/// POST /users - create a new user
async fn create_user(
    State(state): State<Arc<AppState>>,
    body: Result<Json<UserRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<User>), ApiError> {
    let req = decode_body(body)?;
    let user = UserRepo::new(&state.pool)
        .create(&req.username, &req.email)
        .await?;

    Ok((StatusCode::CREATED, Json(user)))
}

/// PUT /users/{id} - overwrite username and email
async fn update_user(
    State(state): State<Arc<AppState>>,
    ValidUserId(id): ValidUserId,
    body: Result<Json<UserRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let req = decode_body(body)?;
    if req.username.is_empty() {
        return Err(ValidationError::Empty { field: "username" }.into());
    }
    if req.email.is_empty() {
        return Err(ValidationError::Empty { field: "email" }.into());
    }

    let message = UserRepo::new(&state.pool)
        .update(id, &req.username, &req.email)
        .await?;

    Ok(Json(MessageResponse { message }))
}

/// DELETE /users/{id} - hard-delete a user
async fn delete_user(
    State(state): State<Arc<AppState>>,
    ValidUserId(id): ValidUserId,
) -> Result<Json<MessageResponse>, ApiError> {
    let message = UserRepo::new(&state.pool).delete(id).await?;
    Ok(Json(MessageResponse { message }))
}

/// User routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/users", get(list_users).post(create_user))
        .route(
            "/users/{id}",
            get(get_user).put(update_user).delete(delete_user),
        )
}

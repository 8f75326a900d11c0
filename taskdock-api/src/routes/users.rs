//! User CRUD endpoints
//!
//! # Endpoints
//!
//! - `GET /api/users` - List users, newest first
//! - `POST /api/users` - Create a user (201)
//! - `GET /api/users/:id` - Get a single user
//! - `PUT /api/users/:id` - Partial update
//! - `DELETE /api/users/:id` - Delete, returns the pre-delete snapshot

use crate::{app::AppState, error::ApiResult};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use taskdock_shared::models::user::{CreateUser, UpdateUser, User};

/// User list response
#[derive(Debug, Serialize)]
pub struct UserListResponse {
    /// Users, newest-created first
    pub users: Vec<User>,

    /// Number of users returned
    pub count: usize,
}

/// Lists all users
pub async fn list_users(State(state): State<AppState>) -> ApiResult<Json<UserListResponse>> {
    let users = User::list(&state.db).await?;
    let count = users.len();
    Ok(Json(UserListResponse { users, count }))
}

/// Creates a user
///
/// # Example
///
/// ```text
/// POST /api/users
/// Content-Type: application/json
///
/// { "name": "Jane Smith", "email": "jane@example.com", "role": "admin" }
/// ```
///
/// # Errors
///
/// - `400 Bad Request`: Missing or blank name/email
/// - `409 Conflict`: Email already exists
/// - `500 Internal Server Error`: Store failure
pub async fn create_user(
    State(state): State<AppState>,
    Json(req): Json<CreateUser>,
) -> ApiResult<(StatusCode, Json<User>)> {
    let user = User::create(&state.db, req).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// Gets a single user by id
///
/// # Errors
///
/// - `404 Not Found`: Unknown user id
/// - `500 Internal Server Error`: Store failure
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<User>> {
    let user = User::get_by_id(&state.db, id).await?;
    Ok(Json(user))
}

/// Partially updates a user
///
/// Only the supplied fields change; supplying none is a 400.
///
/// # Errors
///
/// - `400 Bad Request`: No updatable field supplied, or blank name/email
/// - `404 Not Found`: Unknown user id
/// - `409 Conflict`: New email collides with another user's
/// - `500 Internal Server Error`: Store failure
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateUser>,
) -> ApiResult<Json<User>> {
    let user = User::update(&state.db, id, req).await?;
    Ok(Json(user))
}

/// Deletes a user
///
/// The response body is the record as it was just before deletion. Tasks
/// owned by the user are kept; they become unowned.
///
/// # Errors
///
/// - `404 Not Found`: Unknown user id
/// - `500 Internal Server Error`: Store failure
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<User>> {
    let user = User::delete(&state.db, id).await?;
    Ok(Json(user))
}

//! Task CRUD endpoints
//!
//! Handlers here are thin: they parse the request into the typed inputs
//! the task model expects, call it, and let `ApiError` map domain errors
//! to status codes.
//!
//! # Endpoints
//!
//! - `GET /api/tasks` - List tasks, newest first, joined to owners
//! - `POST /api/tasks` - Create a task (201)
//! - `PUT /api/tasks/:id` - Partial update
//! - `DELETE /api/tasks/:id` - Delete, returns the pre-delete snapshot

use crate::{app::AppState, error::ApiResult};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use taskdock_shared::models::task::{CreateTask, Task, UpdateTask};

/// Task list response
#[derive(Debug, Serialize)]
pub struct TaskListResponse {
    /// Tasks, newest-created first
    pub tasks: Vec<Task>,

    /// Number of tasks returned
    pub count: usize,
}

/// Lists all tasks
pub async fn list_tasks(State(state): State<AppState>) -> ApiResult<Json<TaskListResponse>> {
    let tasks = Task::list(&state.db).await?;
    let count = tasks.len();
    Ok(Json(TaskListResponse { tasks, count }))
}

/// Creates a task
///
/// # Example
///
/// ```text
/// POST /api/tasks
/// Content-Type: application/json
///
/// { "title": "Write the deploy runbook", "owner_id": 1 }
/// ```
///
/// # Errors
///
/// - `400 Bad Request`: Missing or blank title, or unknown owner
/// - `500 Internal Server Error`: Store failure
pub async fn create_task(
    State(state): State<AppState>,
    Json(req): Json<CreateTask>,
) -> ApiResult<(StatusCode, Json<Task>)> {
    let task = Task::create(&state.db, req).await?;
    Ok((StatusCode::CREATED, Json(task)))
}

/// Partially updates a task
///
/// Only the supplied fields change; omitting both is a 400.
///
/// # Errors
///
/// - `400 Bad Request`: No updatable field supplied, or blank title
/// - `404 Not Found`: Unknown task id
/// - `500 Internal Server Error`: Store failure
pub async fn update_task(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateTask>,
) -> ApiResult<Json<Task>> {
    let task = Task::update(&state.db, id, req).await?;
    Ok(Json(task))
}

/// Deletes a task
///
/// The response body is the record as it was just before deletion.
///
/// # Errors
///
/// - `404 Not Found`: Unknown task id
/// - `500 Internal Server Error`: Store failure
pub async fn delete_task(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<Task>> {
    let task = Task::delete(&state.db, id).await?;
    Ok(Json(task))
}

//! Task model and database operations
//!
//! Tasks optionally reference an owning user. The reference is soft:
//! every read LEFT JOINs the users table, so a task whose owner was
//! deleted simply comes back with no owner instead of failing.
//!
//! # Schema
//!
//! ```sql
//! CREATE TABLE tasks (
//!     id         BIGSERIAL PRIMARY KEY,
//!     title      VARCHAR(255) NOT NULL,
//!     completed  BOOLEAN      NOT NULL DEFAULT FALSE,
//!     owner_id   BIGINT       REFERENCES users(id) ON DELETE SET NULL,
//!     created_at TIMESTAMPTZ  NOT NULL DEFAULT NOW(),
//!     updated_at TIMESTAMPTZ  NOT NULL DEFAULT NOW()
//! );
//! ```
//!
//! # Example
//!
//! ```no_run
//! use taskdock_shared::models::task::{CreateTask, Task, UpdateTask};
//! use taskdock_shared::db::pool::{create_pool, DatabaseConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = create_pool(DatabaseConfig::default()).await?;
//!
//! let task = Task::create(
//!     &pool,
//!     CreateTask {
//!         title: Some("Write the deploy runbook".to_string()),
//!         owner_id: None,
//!     },
//! )
//! .await?;
//!
//! // Mark it done without touching the title
//! Task::update(
//!     &pool,
//!     task.id,
//!     UpdateTask {
//!         completed: Some(true),
//!         ..Default::default()
//!     },
//! )
//! .await?;
//! # Ok(())
//! # }
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::db::patch::PatchSet;
use crate::error::{ModelError, ModelResult};

/// Task record as read back from the store
///
/// Every read is the joined projection: `owner_name` carries the owning
/// user's name when `owner_id` is set and the user still exists.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Task {
    /// Unique task ID, assigned by the store
    pub id: i64,

    /// Task title
    pub title: String,

    /// Completion flag (false on creation)
    pub completed: bool,

    /// Owning user's id (None if unowned, or the owner was deleted)
    pub owner_id: Option<i64>,

    /// Owning user's name, resolved by the read-time join
    pub owner_name: Option<String>,

    /// When the task was created
    pub created_at: DateTime<Utc>,

    /// When the task was last updated
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a new task
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateTask {
    /// Task title (required, must be non-empty)
    pub title: Option<String>,

    /// Owning user's id
    pub owner_id: Option<i64>,
}

/// Input for updating a task
///
/// Only supplied fields are written; unsupplied fields keep their stored
/// values. Supplying neither field is a validation failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateTask {
    /// New title
    pub title: Option<String>,

    /// New completion flag
    pub completed: Option<bool>,
}

impl UpdateTask {
    /// Columns this payload patches; `$1` is reserved for the row id
    fn patch(&self) -> PatchSet {
        let mut patch = PatchSet::new(2);
        if self.title.is_some() {
            patch.push("title");
        }
        if self.completed.is_some() {
            patch.push("completed");
        }
        patch
    }
}

/// Aggregate task counts
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TaskCounts {
    /// All tasks
    pub total: i64,

    /// Tasks with `completed = TRUE`
    pub completed: i64,

    /// Tasks with `completed = FALSE`
    pub pending: i64,
}

impl Task {
    /// Lists all tasks, newest-created first
    ///
    /// Each row is joined to its owning user (id and name) when present.
    pub async fn list(pool: &PgPool) -> ModelResult<Vec<Self>> {
        let tasks = sqlx::query_as::<_, Task>(
            r#"
            SELECT t.id, t.title, t.completed, t.owner_id, u.name AS owner_name,
                   t.created_at, t.updated_at
            FROM tasks t
            LEFT JOIN users u ON u.id = t.owner_id
            ORDER BY t.created_at DESC, t.id DESC
            "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(tasks)
    }

    /// Finds a task by ID (joined projection)
    pub async fn find_by_id(pool: &PgPool, id: i64) -> ModelResult<Option<Self>> {
        let task = sqlx::query_as::<_, Task>(
            r#"
            SELECT t.id, t.title, t.completed, t.owner_id, u.name AS owner_name,
                   t.created_at, t.updated_at
            FROM tasks t
            LEFT JOIN users u ON u.id = t.owner_id
            WHERE t.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(task)
    }

    /// Creates a new task
    ///
    /// The row starts with `completed = FALSE`. The return value is the
    /// re-read joined projection, not the insert image.
    ///
    /// # Errors
    ///
    /// - [`ModelError::Validation`] if the title is absent or blank, or
    ///   `owner_id` references a nonexistent user
    /// - [`ModelError::Store`] if the database operation fails
    pub async fn create(pool: &PgPool, data: CreateTask) -> ModelResult<Self> {
        let title = match data.title {
            Some(ref title) if !title.trim().is_empty() => title.clone(),
            _ => return Err(ModelError::Validation("title is required".to_string())),
        };

        let (id,): (i64,) =
            sqlx::query_as("INSERT INTO tasks (title, owner_id) VALUES ($1, $2) RETURNING id")
                .bind(title)
                .bind(data.owner_id)
                .fetch_one(pool)
                .await
                .map_err(ModelError::from_owner_reference)?;

        Self::find_by_id(pool, id)
            .await?
            .ok_or_else(|| ModelError::NotFound(format!("task {}", id)))
    }

    /// Applies a partial update to a task
    ///
    /// Exactly the supplied fields are written, in one parameterized
    /// statement, plus `updated_at`. The canonical row is then re-fetched
    /// for the return value: another writer may have changed other
    /// fields in between, and the response must reflect true store state.
    ///
    /// # Errors
    ///
    /// - [`ModelError::Validation`] if no field is supplied (no-op
    ///   updates are rejected before the store is touched), or the new
    ///   title is blank
    /// - [`ModelError::NotFound`] if no task with `id` exists
    /// - [`ModelError::Store`] if the database operation fails
    pub async fn update(pool: &PgPool, id: i64, data: UpdateTask) -> ModelResult<Self> {
        let patch = data.patch();
        if patch.is_empty() {
            return Err(ModelError::Validation(
                "no updatable fields supplied".to_string(),
            ));
        }

        if let Some(ref title) = data.title {
            if title.trim().is_empty() {
                return Err(ModelError::Validation("title must not be empty".to_string()));
            }
        }

        let statement = format!(
            "UPDATE tasks SET updated_at = NOW(), {} WHERE id = $1",
            patch.set_clause()
        );

        let mut query = sqlx::query(&statement).bind(id);
        if let Some(title) = data.title {
            query = query.bind(title);
        }
        if let Some(completed) = data.completed {
            query = query.bind(completed);
        }

        let result = query.execute(pool).await?;
        if result.rows_affected() == 0 {
            return Err(ModelError::NotFound(format!("task {}", id)));
        }

        Self::find_by_id(pool, id)
            .await?
            .ok_or_else(|| ModelError::NotFound(format!("task {}", id)))
    }

    /// Deletes a task and returns the pre-delete snapshot
    ///
    /// # Errors
    ///
    /// - [`ModelError::NotFound`] if no task with `id` exists
    /// - [`ModelError::Store`] if the database operation fails
    pub async fn delete(pool: &PgPool, id: i64) -> ModelResult<Self> {
        let snapshot = Self::find_by_id(pool, id)
            .await?
            .ok_or_else(|| ModelError::NotFound(format!("task {}", id)))?;

        let result = sqlx::query("DELETE FROM tasks WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        // The row can vanish between the snapshot read and the delete
        if result.rows_affected() == 0 {
            return Err(ModelError::NotFound(format!("task {}", id)));
        }

        Ok(snapshot)
    }

    /// Counts tasks: total, completed, and pending, in one statement
    pub async fn count_stats(pool: &PgPool) -> ModelResult<TaskCounts> {
        let (total, completed, pending): (i64, i64, i64) = sqlx::query_as(
            r#"
            SELECT COUNT(*),
                   COUNT(*) FILTER (WHERE completed),
                   COUNT(*) FILTER (WHERE NOT completed)
            FROM tasks
            "#,
        )
        .fetch_one(pool)
        .await?;

        Ok(TaskCounts {
            total,
            completed,
            pending,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_task_default_is_empty_patch() {
        let update = UpdateTask::default();
        assert!(update.patch().is_empty());
    }

    #[test]
    fn test_update_task_patch_tracks_supplied_fields() {
        let update = UpdateTask {
            title: Some("new title".to_string()),
            completed: None,
        };
        let patch = update.patch();
        assert_eq!(patch.len(), 1);
        assert_eq!(patch.set_clause(), "title = $2");

        let update = UpdateTask {
            title: Some("new title".to_string()),
            completed: Some(true),
        };
        assert_eq!(update.patch().set_clause(), "title = $2, completed = $3");
    }

    #[test]
    fn test_update_task_patch_completed_only() {
        let update = UpdateTask {
            title: None,
            completed: Some(false),
        };
        // completed binds right after the row id even when title is absent
        assert_eq!(update.patch().set_clause(), "completed = $2");
    }

    // Integration tests for database operations are in tests/model_tests.rs
}

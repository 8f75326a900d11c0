//! Aggregate statistics over tasks and users
//!
//! The snapshot issues one aggregate query per table and combines the
//! results. No transaction spans the two queries: a task or user mutating
//! between them is an accepted inconsistency window, not an error. The
//! report timestamp and process uptime are the boundary layer's to
//! supply.

use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::error::ModelResult;
use crate::models::task::Task;
use crate::models::user::User;

/// Point-in-time aggregate counts
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct StatsSnapshot {
    /// All tasks
    pub total_tasks: i64,

    /// Tasks with `completed = TRUE`
    pub completed_tasks: i64,

    /// Tasks with `completed = FALSE`
    pub pending_tasks: i64,

    /// All users
    pub total_users: i64,
}

impl StatsSnapshot {
    /// Computes the snapshot from the store
    ///
    /// Two independent aggregate queries, no caching, no incremental
    /// maintenance.
    pub async fn compute(pool: &PgPool) -> ModelResult<Self> {
        let tasks = Task::count_stats(pool).await?;
        let total_users = User::count(pool).await?;

        Ok(Self {
            total_tasks: tasks.total,
            completed_tasks: tasks.completed,
            pending_tasks: tasks.pending,
            total_users,
        })
    }
}

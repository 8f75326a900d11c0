//! Aggregate statistics endpoint
//!
//! # Endpoint
//!
//! ```text
//! GET /api/stats
//! ```
//!
//! The counts come from the data layer's snapshot; the timestamp and
//! uptime are supplied here, at the boundary. The snapshot's two
//! aggregate queries are not wrapped in a transaction; a mutation
//! landing between them is accepted.

use crate::{app::AppState, error::ApiResult};
use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use taskdock_shared::models::stats::StatsSnapshot;

/// Statistics report
#[derive(Debug, Serialize, Deserialize)]
pub struct StatsResponse {
    /// All tasks
    pub total_tasks: i64,

    /// Tasks with `completed = true`
    pub completed_tasks: i64,

    /// Tasks with `completed = false`
    pub pending_tasks: i64,

    /// All users
    pub total_users: i64,

    /// Seconds since the server started
    pub server_uptime_seconds: u64,

    /// When this report was produced
    pub timestamp: DateTime<Utc>,
}

/// Statistics handler
pub async fn get_stats(State(state): State<AppState>) -> ApiResult<Json<StatsResponse>> {
    let snapshot = StatsSnapshot::compute(&state.db).await?;

    Ok(Json(StatsResponse {
        total_tasks: snapshot.total_tasks,
        completed_tasks: snapshot.completed_tasks,
        pending_tasks: snapshot.pending_tasks,
        total_users: snapshot.total_users,
        server_uptime_seconds: state.uptime_seconds(),
        timestamp: Utc::now(),
    }))
}

//! Health check endpoint
//!
//! Verifies the server is running and the database is reachable.
//!
//! # Endpoint
//!
//! ```text
//! GET /api/health
//! ```
//!
//! # Response
//!
//! ```json
//! {
//!   "status": "healthy",
//!   "version": "0.1.0",
//!   "database": "connected",
//!   "uptime_seconds": 42,
//!   "timestamp": "2026-01-01T00:00:00Z"
//! }
//! ```

use crate::{app::AppState, error::ApiResult};
use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,

    /// Application version
    pub version: String,

    /// Database status
    pub database: String,

    /// Seconds since the server started
    pub uptime_seconds: u64,

    /// When this report was produced
    pub timestamp: DateTime<Utc>,
}

/// Health check handler
///
/// Returns service health status including database connectivity. The
/// service reports `degraded` instead of failing when the database probe
/// errors, so monitoring can still read the response.
pub async fn health_check(State(state): State<AppState>) -> ApiResult<Json<HealthResponse>> {
    let database_status = match sqlx::query("SELECT 1").fetch_one(&state.db).await {
        Ok(_) => "connected",
        Err(_) => "disconnected",
    };

    Ok(Json(HealthResponse {
        status: if database_status == "connected" {
            "healthy".to_string()
        } else {
            "degraded".to_string()
        },
        version: env!("CARGO_PKG_VERSION").to_string(),
        database: database_status.to_string(),
        uptime_seconds: state.uptime_seconds(),
        timestamp: Utc::now(),
    }))
}

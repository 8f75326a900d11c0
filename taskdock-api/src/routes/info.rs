//! Service info endpoint
//!
//! # Endpoint
//!
//! ```text
//! GET /api
//! ```
//!
//! Lists the available endpoints so the API is explorable from the root.

use axum::Json;
use serde::Serialize;

/// Service info response
#[derive(Debug, Serialize)]
pub struct ApiInfo {
    /// Welcome message
    pub message: String,

    /// Application version
    pub version: String,

    /// Available endpoints
    pub endpoints: Vec<&'static str>,
}

/// Service info handler
pub async fn api_info() -> Json<ApiInfo> {
    Json(ApiInfo {
        message: "Welcome to the Taskdock API".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        endpoints: vec![
            "GET /api/health",
            "GET /api/tasks",
            "POST /api/tasks",
            "PUT /api/tasks/:id",
            "DELETE /api/tasks/:id",
            "GET /api/users",
            "POST /api/users",
            "GET /api/users/:id",
            "PUT /api/users/:id",
            "DELETE /api/users/:id",
            "GET /api/stats",
        ],
    })
}

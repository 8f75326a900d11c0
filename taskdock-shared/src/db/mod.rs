//! Database layer for Taskdock
//!
//! This module provides connection pooling, migrations, and the shared
//! partial-update builder. Models live in the `models` module at crate
//! root level.
//!
//! # Modules
//!
//! - `pool`: PostgreSQL connection pool management with health checks
//! - `migrations`: Database migration runner
//! - `patch`: SET-clause builder for partial updates
//!
//! # Example
//!
//! ```no_run
//! use taskdock_shared::db::pool::{create_pool, DatabaseConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DatabaseConfig {
//!         url: std::env::var("DATABASE_URL")?,
//!         ..Default::default()
//!     };
//!
//!     let pool = create_pool(config).await?;
//!     Ok(())
//! }
//! ```

pub mod migrations;
pub mod patch;
pub mod pool;

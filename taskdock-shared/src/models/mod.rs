//! Database models for Taskdock
//!
//! This module contains the models and their CRUD operations.
//!
//! # Models
//!
//! - `task`: Tasks with an optional owning user, joined at read time
//! - `user`: User accounts with unique emails
//! - `stats`: Aggregate counts over both tables
//!
//! # Example
//!
//! ```no_run
//! use taskdock_shared::models::user::{CreateUser, User};
//! use taskdock_shared::db::pool::{create_pool, DatabaseConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = create_pool(DatabaseConfig::default()).await?;
//!
//! let user = User::create(
//!     &pool,
//!     CreateUser {
//!         name: Some("John Doe".to_string()),
//!         email: Some("user@example.com".to_string()),
//!         role: None,
//!     },
//! )
//! .await?;
//! # Ok(())
//! # }
//! ```

pub mod stats;
pub mod task;
pub mod user;

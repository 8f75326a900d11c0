//! API route handlers
//!
//! This module contains all route handlers organized by resource:
//!
//! - `health`: Health check endpoint
//! - `info`: Service info endpoint
//! - `tasks`: Task CRUD endpoints
//! - `users`: User CRUD endpoints
//! - `stats`: Aggregate statistics endpoint

pub mod health;
pub mod info;
pub mod stats;
pub mod tasks;
pub mod users;

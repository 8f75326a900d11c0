//! # Taskdock Shared Library
//!
//! This crate contains the data layer shared by the Taskdock API server:
//! connection pooling, migrations, models, and the domain error taxonomy.
//!
//! ## Module Organization
//!
//! - `db`: Connection pool, migrations, and the partial-update builder
//! - `models`: Database models and their CRUD operations
//! - `error`: Domain error types

pub mod db;
pub mod error;
pub mod models;

/// Current version of the Taskdock shared library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}

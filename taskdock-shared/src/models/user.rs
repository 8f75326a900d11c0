//! User model and database operations
//!
//! Emails are unique across all users. The unique-violation signal from
//! the store is the only database error this module translates: it
//! becomes [`ModelError::Conflict`] so the boundary can report a domain
//! conflict instead of a server fault.
//!
//! # Schema
//!
//! ```sql
//! CREATE TABLE users (
//!     id         BIGSERIAL PRIMARY KEY,
//!     name       VARCHAR(255) NOT NULL,
//!     email      VARCHAR(255) NOT NULL UNIQUE,
//!     role       VARCHAR(50)  NOT NULL DEFAULT 'user',
//!     created_at TIMESTAMPTZ  NOT NULL DEFAULT NOW()
//! );
//! ```
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
//!         name: Some("Jane Smith".to_string()),
//!         email: Some("jane@example.com".to_string()),
//!         role: Some("admin".to_string()),
//!     },
//! )
//! .await?;
//! println!("Created user {}", user.id);
//! # Ok(())
//! # }
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::db::patch::PatchSet;
use crate::error::{ModelError, ModelResult};

/// User record
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    /// Unique user ID, assigned by the store
    pub id: i64,

    /// Display name
    pub name: String,

    /// Email address, unique across all users
    pub email: String,

    /// Role label (defaults to "user" at creation)
    pub role: String,

    /// When the account was created
    pub created_at: DateTime<Utc>,
}

/// Input for creating a new user
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateUser {
    /// Display name (required, must be non-empty)
    pub name: Option<String>,

    /// Email address (required, must be non-empty and unique)
    pub email: Option<String>,

    /// Role label; "user" when unspecified
    pub role: Option<String>,
}

/// Input for updating a user
///
/// Only supplied fields are written; unsupplied fields keep their stored
/// values. Supplying no field is a validation failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateUser {
    /// New display name
    pub name: Option<String>,

    /// New email address (must stay unique)
    pub email: Option<String>,

    /// New role label
    pub role: Option<String>,
}

impl UpdateUser {
    /// Columns this payload patches; `$1` is reserved for the row id
    fn patch(&self) -> PatchSet {
        let mut patch = PatchSet::new(2);
        if self.name.is_some() {
            patch.push("name");
        }
        if self.email.is_some() {
            patch.push("email");
        }
        if self.role.is_some() {
            patch.push("role");
        }
        patch
    }
}

impl User {
    /// Lists all users, newest-created first
    pub async fn list(pool: &PgPool) -> ModelResult<Vec<Self>> {
        let users = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, role, created_at
            FROM users
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(users)
    }

    /// Finds a user by ID
    pub async fn find_by_id(pool: &PgPool, id: i64) -> ModelResult<Option<Self>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, role, created_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(user)
    }

    /// Gets a user by ID, failing when absent
    ///
    /// # Errors
    ///
    /// - [`ModelError::NotFound`] if no user with `id` exists
    /// - [`ModelError::Store`] if the database operation fails
    pub async fn get_by_id(pool: &PgPool, id: i64) -> ModelResult<Self> {
        Self::find_by_id(pool, id)
            .await?
            .ok_or_else(|| ModelError::NotFound(format!("user {}", id)))
    }

    /// Creates a new user
    ///
    /// `role` falls back to `"user"` when unspecified or blank.
    ///
    /// # Errors
    ///
    /// - [`ModelError::Validation`] if name or email is absent or blank
    /// - [`ModelError::Conflict`] if the email already exists
    /// - [`ModelError::Store`] if the database operation fails
    pub async fn create(pool: &PgPool, data: CreateUser) -> ModelResult<Self> {
        let name = match data.name {
            Some(ref name) if !name.trim().is_empty() => name.clone(),
            _ => return Err(ModelError::Validation("name is required".to_string())),
        };
        let email = match data.email {
            Some(ref email) if !email.trim().is_empty() => email.clone(),
            _ => return Err(ModelError::Validation("email is required".to_string())),
        };
        let role = match data.role {
            Some(ref role) if !role.trim().is_empty() => role.clone(),
            _ => "user".to_string(),
        };

        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (name, email, role)
            VALUES ($1, $2, $3)
            RETURNING id, name, email, role, created_at
            "#,
        )
        .bind(name)
        .bind(email)
        .bind(role)
        .fetch_one(pool)
        .await
        .map_err(ModelError::from_email_unique)?;

        Ok(user)
    }

    /// Applies a partial update to a user
    ///
    /// Exactly the supplied fields are written, in one parameterized
    /// statement, then the canonical row is re-fetched for the return
    /// value.
    ///
    /// # Errors
    ///
    /// - [`ModelError::Validation`] if no field is supplied, or a
    ///   supplied name/email is blank
    /// - [`ModelError::NotFound`] if no user with `id` exists
    /// - [`ModelError::Conflict`] if the new email collides with another
    ///   user's
    /// - [`ModelError::Store`] if the database operation fails
    pub async fn update(pool: &PgPool, id: i64, data: UpdateUser) -> ModelResult<Self> {
        let patch = data.patch();
        if patch.is_empty() {
            return Err(ModelError::Validation(
                "no updatable fields supplied".to_string(),
            ));
        }

        if let Some(ref name) = data.name {
            if name.trim().is_empty() {
                return Err(ModelError::Validation("name must not be empty".to_string()));
            }
        }
        if let Some(ref email) = data.email {
            if email.trim().is_empty() {
                return Err(ModelError::Validation("email must not be empty".to_string()));
            }
        }

        let statement = format!("UPDATE users SET {} WHERE id = $1", patch.set_clause());

        let mut query = sqlx::query(&statement).bind(id);
        if let Some(name) = data.name {
            query = query.bind(name);
        }
        if let Some(email) = data.email {
            query = query.bind(email);
        }
        if let Some(role) = data.role {
            query = query.bind(role);
        }

        let result = query
            .execute(pool)
            .await
            .map_err(ModelError::from_email_unique)?;
        if result.rows_affected() == 0 {
            return Err(ModelError::NotFound(format!("user {}", id)));
        }

        Self::find_by_id(pool, id)
            .await?
            .ok_or_else(|| ModelError::NotFound(format!("user {}", id)))
    }

    /// Deletes a user and returns the pre-delete snapshot
    ///
    /// Tasks referencing the user are not cascaded; their `owner_id`
    /// becomes NULL and subsequent task reads degrade to "no owner".
    ///
    /// # Errors
    ///
    /// - [`ModelError::NotFound`] if no user with `id` exists
    /// - [`ModelError::Store`] if the database operation fails
    pub async fn delete(pool: &PgPool, id: i64) -> ModelResult<Self> {
        let snapshot = Self::find_by_id(pool, id)
            .await?
            .ok_or_else(|| ModelError::NotFound(format!("user {}", id)))?;

        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        // The row can vanish between the snapshot read and the delete
        if result.rows_affected() == 0 {
            return Err(ModelError::NotFound(format!("user {}", id)));
        }

        Ok(snapshot)
    }

    /// Counts total number of users
    pub async fn count(pool: &PgPool) -> ModelResult<i64> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users")
            .fetch_one(pool)
            .await?;

        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_user_default_is_empty_patch() {
        let update = UpdateUser::default();
        assert!(update.patch().is_empty());
    }

    #[test]
    fn test_update_user_patch_tracks_supplied_fields() {
        let update = UpdateUser {
            name: None,
            email: Some("new@example.com".to_string()),
            role: None,
        };
        assert_eq!(update.patch().set_clause(), "email = $2");

        let update = UpdateUser {
            name: Some("New Name".to_string()),
            email: Some("new@example.com".to_string()),
            role: Some("admin".to_string()),
        };
        assert_eq!(
            update.patch().set_clause(),
            "name = $2, email = $3, role = $4"
        );
    }

    #[test]
    fn test_update_user_patch_skips_absent_middle_field() {
        let update = UpdateUser {
            name: Some("New Name".to_string()),
            email: None,
            role: Some("admin".to_string()),
        };
        // role binds $3 because email is absent from the patch
        assert_eq!(update.patch().set_clause(), "name = $2, role = $3");
    }

    // Integration tests for database operations are in tests/model_tests.rs
}

//! Domain error taxonomy for the data layer
//!
//! Every model operation returns [`ModelResult`]. The taxonomy separates
//! caller-fault conditions (validation, not-found, conflict) from store
//! faults so the boundary layer can map them to distinct HTTP outcomes.
//!
//! Only the store's uniqueness-violation signal is translated into
//! [`ModelError::Conflict`]; every other database error passes through
//! untouched as [`ModelError::Store`]. No operation is retried here.

use thiserror::Error;

/// Result alias used by all model operations
pub type ModelResult<T> = Result<T, ModelError>;

/// Unified data-layer error type
#[derive(Debug, Error)]
pub enum ModelError {
    /// A required field is missing/empty, or an update supplied no fields
    #[error("validation failed: {0}")]
    Validation(String),

    /// The operation targeted an id that does not exist
    #[error("not found: {0}")]
    NotFound(String),

    /// A uniqueness constraint was violated (e.g. duplicate email)
    #[error("conflict: {0}")]
    Conflict(String),

    /// Connectivity or statement failure, not attributable to caller input
    #[error("store error: {0}")]
    Store(#[from] sqlx::Error),
}

impl ModelError {
    /// Translates a unique-violation on the users email index into
    /// [`ModelError::Conflict`]; everything else stays a store error.
    ///
    /// The constraint name is inspected the same way the boundary would
    /// otherwise have to: Postgres reports the violated index
    /// (`users_email_key`), so matching on `email` is sufficient.
    pub fn from_email_unique(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(ref db_err) = err {
            if let Some(constraint) = db_err.constraint() {
                if constraint.contains("email") {
                    return ModelError::Conflict("email already exists".to_string());
                }
            }
        }
        ModelError::Store(err)
    }

    /// Translates a foreign-key violation on `tasks.owner_id` into
    /// [`ModelError::Validation`]: referencing a nonexistent user at
    /// write time is caller fault, not a store fault.
    pub fn from_owner_reference(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(ref db_err) = err {
            if let Some(constraint) = db_err.constraint() {
                if constraint.contains("owner") {
                    return ModelError::Validation("owner user does not exist".to_string());
                }
            }
        }
        ModelError::Store(err)
    }

    /// True when the error is caller fault (retrying the same request
    /// will not succeed); false for store faults.
    pub fn is_caller_fault(&self) -> bool {
        !matches!(self, ModelError::Store(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ModelError::Validation("title is required".to_string());
        assert_eq!(err.to_string(), "validation failed: title is required");

        let err = ModelError::NotFound("task 42".to_string());
        assert_eq!(err.to_string(), "not found: task 42");

        let err = ModelError::Conflict("email already exists".to_string());
        assert_eq!(err.to_string(), "conflict: email already exists");
    }

    #[test]
    fn test_caller_fault_classification() {
        assert!(ModelError::Validation("x".into()).is_caller_fault());
        assert!(ModelError::NotFound("x".into()).is_caller_fault());
        assert!(ModelError::Conflict("x".into()).is_caller_fault());
        assert!(!ModelError::Store(sqlx::Error::PoolClosed).is_caller_fault());
    }

    #[test]
    fn test_non_database_errors_stay_store_errors() {
        let err = ModelError::from_email_unique(sqlx::Error::PoolClosed);
        assert!(matches!(err, ModelError::Store(_)));

        let err = ModelError::from_owner_reference(sqlx::Error::PoolClosed);
        assert!(matches!(err, ModelError::Store(_)));
    }
}

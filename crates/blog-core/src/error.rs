//! Domain-level error types.

use thiserror::Error;
use uuid::Uuid;

/// Domain errors - business logic failures.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound { entity_type: &'static str, id: Uuid },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Entity not found")]
    NotFound,

    #[error("Constraint violation: {0}")]
    Constraint(String),
}

impl DomainError {
    /// Lift a repository failure for the given post id.
    pub fn from_repo(err: RepoError, id: Uuid) -> Self {
        match err {
            RepoError::NotFound => DomainError::NotFound {
                entity_type: "BlogPost",
                id,
            },
            other => other.into(),
        }
    }
}

impl From<RepoError> for DomainError {
    fn from(err: RepoError) -> Self {
        match &err {
            RepoError::Constraint(msg) => DomainError::Validation(msg.clone()),
            RepoError::NotFound => DomainError::Internal(err.to_string()),
            RepoError::Connection(msg) | RepoError::Query(msg) => DomainError::Internal(msg.clone()),
        }
    }
}

//! Domain errors for the Questlog scheduling engine.

use thiserror::Error;
use uuid::Uuid;

/// Domain-level errors that can occur in the Questlog system.
///
/// The recurrence engine itself is permissive and never fails on odd input;
/// these errors belong to the storage port seam and to the opt-in strict
/// validation layered on top of rule normalization.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Task not found: {0}")]
    TaskNotFound(Uuid),

    #[error("Validation failed: {0}")]
    ValidationFailed(String),

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

pub type DomainResult<T> = Result<T, DomainError>;

impl From<serde_json::Error> for DomainError {
    fn from(err: serde_json::Error) -> Self {
        DomainError::SerializationError(err.to_string())
    }
}

//! Domain errors for the SCM insights fact retriever.

use thiserror::Error;

/// Domain-level errors that can occur while retrieving facts.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Catalog request failed: {0}")]
    CatalogUnavailable(String),

    #[error("Service authentication failed: {0}")]
    AuthFailed(String),

    #[error("Cache backend error: {0}")]
    CacheFailed(String),

    #[error("Entity not found: {0}")]
    EntityNotFound(String),

    #[error("Invalid entity reference: {0}")]
    InvalidEntityRef(String),

    #[error("Invalid location: {0}")]
    InvalidLocation(String),

    #[error("Validation failed: {0}")]
    ValidationFailed(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Fact retriever not found: {0}")]
    RetrieverNotFound(String),
}

pub type DomainResult<T> = Result<T, DomainError>;

impl From<serde_json::Error> for DomainError {
    fn from(err: serde_json::Error) -> Self {
        DomainError::SerializationError(err.to_string())
    }
}

impl From<serde_yaml::Error> for DomainError {
    fn from(err: serde_yaml::Error) -> Self {
        DomainError::SerializationError(err.to_string())
    }
}

//! Error and result types for the todo service.
//!
//! # Design
//! `ServiceError` separates the two expected failure kinds (validation and
//! not-found) from storage faults. The `Display` output of each expected
//! variant is the exact message clients see, so the HTTP layer can route on
//! the variant while still returning the literal text.

use thiserror::Error;

use crate::entity::TodoId;
use crate::validation::ValidationError;

/// Message carried by every not-found failure.
pub const NOT_FOUND_MESSAGE: &str = "Todo item not found";

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Outcome of every `TodoService` operation.
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Failure returned by `TodoService`.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The request payload broke a validation rule.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No todo item exists with the requested id.
    #[error("{}", NOT_FOUND_MESSAGE)]
    NotFound,

    /// The storage layer failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl ServiceError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ServiceError::NotFound)
    }
}

/// Failure returned by a `TodoRepository` implementation.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// `update` was called for an id that is no longer stored.
    #[error("todo item {0} does not exist")]
    Missing(TodoId),

    /// The underlying store reported an error.
    #[error("storage failure: {0}")]
    Storage(#[source] BoxError),
}

impl RepositoryError {
    pub fn storage<E>(err: E) -> Self
    where
        E: Into<BoxError>,
    {
        RepositoryError::Storage(err.into())
    }
}

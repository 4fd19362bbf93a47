//! Storage port for todo items.

use async_trait::async_trait;

use crate::entity::{NewTodoItem, TodoId, TodoItem};
use crate::error::RepositoryError;

/// CRUD access to persisted todo items.
///
/// Absence is never an error: `get_by_id` returns `None` and `delete` returns
/// `false` when no item matches.
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// All items, newest `created_at` first. Ties go to the higher id.
    async fn get_all(&self) -> Result<Vec<TodoItem>, RepositoryError>;

    async fn get_by_id(&self, id: TodoId) -> Result<Option<TodoItem>, RepositoryError>;

    /// Persist a new item and return it with its assigned id.
    async fn create(&self, item: NewTodoItem) -> Result<TodoItem, RepositoryError>;

    /// Replace every mutable field of an existing item.
    ///
    /// Callers check existence first; a vanished row yields
    /// `RepositoryError::Missing`.
    async fn update(&self, item: TodoItem) -> Result<TodoItem, RepositoryError>;

    /// Remove an item. Returns whether a row was deleted.
    async fn delete(&self, id: TodoId) -> Result<bool, RepositoryError>;

    async fn exists(&self, id: TodoId) -> Result<bool, RepositoryError>;
}

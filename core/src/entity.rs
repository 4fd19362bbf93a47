//! Persistent todo item entity.

use chrono::{DateTime, Utc};

/// Storage-assigned identifier of a todo item.
pub type TodoId = i64;

/// A todo item as it exists in storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoItem {
    pub id: TodoId,
    pub title: String,
    pub description: Option<String>,
    pub is_completed: bool,
    pub created_at: DateTime<Utc>,
    /// `None` until the first update.
    pub updated_at: Option<DateTime<Utc>>,
}

/// A todo item that has not been persisted yet. Storage assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTodoItem {
    pub title: String,
    pub description: Option<String>,
    pub is_completed: bool,
    pub created_at: DateTime<Utc>,
}

impl NewTodoItem {
    /// Attach a storage-assigned id.
    pub fn with_id(self, id: TodoId) -> TodoItem {
        TodoItem {
            id,
            title: self.title,
            description: self.description,
            is_completed: self.is_completed,
            created_at: self.created_at,
            updated_at: None,
        }
    }
}

impl TodoItem {
    /// Earliest timestamp the next `updated_at` may carry.
    ///
    /// `updated_at` never moves backwards, even if the wall clock does.
    pub fn last_modified(&self) -> DateTime<Utc> {
        self.updated_at.unwrap_or(self.created_at)
    }
}

//! In-process `TodoRepository` backed by a `BTreeMap`.

use std::cmp::Reverse;
use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::entity::{NewTodoItem, TodoId, TodoItem};
use crate::error::RepositoryError;
use crate::repository::TodoRepository;

#[derive(Debug)]
struct Store {
    items: BTreeMap<TodoId, TodoItem>,
    next_id: TodoId,
}

/// Volatile repository used by tests and local runs without a database.
///
/// Ids start at 1 and are never reused, matching an autoincrement column.
#[derive(Debug)]
pub struct InMemoryTodoRepository {
    store: RwLock<Store>,
}

impl InMemoryTodoRepository {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(Store {
                items: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }

    pub async fn len(&self) -> usize {
        self.store.read().await.items.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl Default for InMemoryTodoRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TodoRepository for InMemoryTodoRepository {
    async fn get_all(&self) -> Result<Vec<TodoItem>, RepositoryError> {
        let store = self.store.read().await;
        let mut items: Vec<TodoItem> = store.items.values().cloned().collect();
        items.sort_by_key(|item| Reverse((item.created_at, item.id)));
        Ok(items)
    }

    async fn get_by_id(&self, id: TodoId) -> Result<Option<TodoItem>, RepositoryError> {
        Ok(self.store.read().await.items.get(&id).cloned())
    }

    async fn create(&self, item: NewTodoItem) -> Result<TodoItem, RepositoryError> {
        let mut store = self.store.write().await;
        let id = store.next_id;
        store.next_id += 1;
        let item = item.with_id(id);
        store.items.insert(id, item.clone());
        Ok(item)
    }

    async fn update(&self, item: TodoItem) -> Result<TodoItem, RepositoryError> {
        let mut store = self.store.write().await;
        let slot = store
            .items
            .get_mut(&item.id)
            .ok_or(RepositoryError::Missing(item.id))?;
        *slot = item.clone();
        Ok(item)
    }

    async fn delete(&self, id: TodoId) -> Result<bool, RepositoryError> {
        Ok(self.store.write().await.items.remove(&id).is_some())
    }

    async fn exists(&self, id: TodoId) -> Result<bool, RepositoryError> {
        Ok(self.store.read().await.items.contains_key(&id))
    }
}

//! Application service: validation and orchestration over `TodoRepository`.
//!
//! # Design
//! `TodoService` is stateless apart from the shared repository handle, so a
//! single instance can serve all requests concurrently. Validation always runs
//! before any storage call; for updates that means a blank title is reported
//! even when the target id does not exist.

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info, warn};

use crate::dto::{CreateTodoItemDto, TodoItemDto, UpdateTodoItemDto};
use crate::entity::{NewTodoItem, TodoId};
use crate::error::{ServiceError, ServiceResult};
use crate::repository::TodoRepository;
use crate::validation;

#[derive(Clone)]
pub struct TodoService {
    repository: Arc<dyn TodoRepository>,
}

impl TodoService {
    pub fn new(repository: Arc<dyn TodoRepository>) -> Self {
        Self { repository }
    }

    /// All items in repository order (newest first).
    pub async fn get_all(&self) -> ServiceResult<Vec<TodoItemDto>> {
        let items = self.repository.get_all().await?;
        debug!(count = items.len(), "listed todo items");
        Ok(items.into_iter().map(TodoItemDto::from).collect())
    }

    pub async fn get_by_id(&self, id: TodoId) -> ServiceResult<TodoItemDto> {
        self.repository
            .get_by_id(id)
            .await?
            .map(TodoItemDto::from)
            .ok_or(ServiceError::NotFound)
    }

    pub async fn create(&self, dto: CreateTodoItemDto) -> ServiceResult<TodoItemDto> {
        let title = validation::validate(dto.title.as_deref(), dto.description.as_deref())?;

        let item = NewTodoItem {
            title: title.trim().to_string(),
            description: dto.description.as_deref().map(|d| d.trim().to_string()),
            is_completed: false,
            created_at: Utc::now(),
        };

        let created = self.repository.create(item).await?;
        info!(todo_id = created.id, "todo item created");
        Ok(created.into())
    }

    /// Replace the item's title, description and completion flag wholesale.
    pub async fn update(&self, id: TodoId, dto: UpdateTodoItemDto) -> ServiceResult<TodoItemDto> {
        let title = validation::validate(dto.title.as_deref(), dto.description.as_deref())?;

        let mut item = self
            .repository
            .get_by_id(id)
            .await?
            .ok_or(ServiceError::NotFound)?;

        item.title = title.trim().to_string();
        item.description = dto.description.as_deref().map(|d| d.trim().to_string());
        item.is_completed = dto.is_completed;
        item.updated_at = Some(Utc::now().max(item.last_modified()));

        let updated = self.repository.update(item).await?;
        info!(
            todo_id = updated.id,
            is_completed = updated.is_completed,
            "todo item updated"
        );
        Ok(updated.into())
    }

    /// Delete an item. `Ok(false)` means the row vanished between the
    /// existence check and the delete.
    pub async fn delete(&self, id: TodoId) -> ServiceResult<bool> {
        if !self.repository.exists(id).await? {
            return Err(ServiceError::NotFound);
        }

        let deleted = self.repository.delete(id).await?;
        if deleted {
            info!(todo_id = id, "todo item deleted");
        } else {
            warn!(todo_id = id, "todo item disappeared before delete");
        }
        Ok(deleted)
    }
}

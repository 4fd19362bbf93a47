//! Transfer objects exposed at the HTTP boundary.
//!
//! # Design
//! Field names are camelCase on the wire. `title` is optional on the request
//! DTOs so that a missing title reaches the service and fails validation with
//! "Title is required" rather than being rejected by the JSON extractor.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entity::{TodoId, TodoItem};

/// Request payload for creating a todo item.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTodoItemDto {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Request payload for replacing a todo item's mutable fields.
///
/// Every field is applied: an omitted `description` clears the stored one and
/// an omitted `isCompleted` resets it to `false`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTodoItemDto {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub is_completed: bool,
}

/// A todo item as returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoItemDto {
    pub id: TodoId,
    pub title: String,
    pub description: Option<String>,
    pub is_completed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<TodoItem> for TodoItemDto {
    fn from(item: TodoItem) -> Self {
        Self {
            id: item.id,
            title: item.title,
            description: item.description,
            is_completed: item.is_completed,
            created_at: item.created_at,
            updated_at: item.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn todo_item_dto_serializes_camel_case() {
        let dto = TodoItemDto {
            id: 1,
            title: "Buy milk".to_string(),
            description: None,
            is_completed: false,
            created_at: Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap(),
            updated_at: None,
        };
        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["title"], "Buy milk");
        assert_eq!(json["isCompleted"], false);
        assert_eq!(json["createdAt"], "2024-01-02T03:04:05Z");
        assert!(json["description"].is_null());
        assert!(json["updatedAt"].is_null());
    }

    #[test]
    fn create_dto_tolerates_missing_title() {
        let dto: CreateTodoItemDto = serde_json::from_str(r#"{"description":"x"}"#).unwrap();
        assert!(dto.title.is_none());
        assert_eq!(dto.description.as_deref(), Some("x"));
    }

    #[test]
    fn update_dto_defaults_is_completed_to_false() {
        let dto: UpdateTodoItemDto = serde_json::from_str(r#"{"title":"t"}"#).unwrap();
        assert_eq!(dto.title.as_deref(), Some("t"));
        assert!(dto.description.is_none());
        assert!(!dto.is_completed);
    }

    #[test]
    fn update_dto_reads_is_completed() {
        let dto: UpdateTodoItemDto =
            serde_json::from_str(r#"{"title":"t","isCompleted":true}"#).unwrap();
        assert!(dto.is_completed);
    }

    #[test]
    fn entity_maps_field_for_field() {
        let created_at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let updated_at = Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap();
        let item = TodoItem {
            id: 9,
            title: "Walk dog".to_string(),
            description: Some("twice".to_string()),
            is_completed: true,
            created_at,
            updated_at: Some(updated_at),
        };

        let dto = TodoItemDto::from(item);
        assert_eq!(dto.id, 9);
        assert_eq!(dto.title, "Walk dog");
        assert_eq!(dto.description.as_deref(), Some("twice"));
        assert!(dto.is_completed);
        assert_eq!(dto.created_at, created_at);
        assert_eq!(dto.updated_at, Some(updated_at));
    }
}

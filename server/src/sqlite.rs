//! `TodoRepository` backed by an sqlx SQLite pool.
//!
//! Timestamps are stored as Unix milliseconds, so values read back are
//! truncated to millisecond precision. Every write returns the row as stored
//! via `RETURNING`, which keeps the caller's view consistent with later reads.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};
use todo_core::{NewTodoItem, RepositoryError, TodoId, TodoItem, TodoRepository};

const COLUMNS: &str = "id, title, description, is_completed, created_at, updated_at";

#[derive(Debug, FromRow)]
struct TodoRow {
    id: i64,
    title: String,
    description: Option<String>,
    is_completed: bool,
    created_at: i64,
    updated_at: Option<i64>,
}

impl TryFrom<TodoRow> for TodoItem {
    type Error = RepositoryError;

    fn try_from(row: TodoRow) -> Result<Self, Self::Error> {
        Ok(TodoItem {
            id: row.id,
            title: row.title,
            description: row.description,
            is_completed: row.is_completed,
            created_at: from_millis(row.created_at)?,
            updated_at: row.updated_at.map(from_millis).transpose()?,
        })
    }
}

fn from_millis(millis: i64) -> Result<DateTime<Utc>, RepositoryError> {
    DateTime::from_timestamp_millis(millis)
        .ok_or_else(|| RepositoryError::storage(format!("timestamp out of range: {millis}")))
}

fn storage(err: sqlx::Error) -> RepositoryError {
    RepositoryError::storage(err)
}

#[derive(Clone)]
pub struct SqliteTodoRepository {
    pool: SqlitePool,
}

impl SqliteTodoRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TodoRepository for SqliteTodoRepository {
    async fn get_all(&self) -> Result<Vec<TodoItem>, RepositoryError> {
        let rows: Vec<TodoRow> = sqlx::query_as(&format!(
            "SELECT {COLUMNS} FROM todo_items ORDER BY created_at DESC, id DESC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(storage)?;

        rows.into_iter().map(TodoItem::try_from).collect()
    }

    async fn get_by_id(&self, id: TodoId) -> Result<Option<TodoItem>, RepositoryError> {
        let row: Option<TodoRow> =
            sqlx::query_as(&format!("SELECT {COLUMNS} FROM todo_items WHERE id = ?"))
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(storage)?;

        row.map(TodoItem::try_from).transpose()
    }

    async fn create(&self, item: NewTodoItem) -> Result<TodoItem, RepositoryError> {
        let row: TodoRow = sqlx::query_as(&format!(
            "INSERT INTO todo_items (title, description, is_completed, created_at) \
             VALUES (?, ?, ?, ?) RETURNING {COLUMNS}"
        ))
        .bind(&item.title)
        .bind(&item.description)
        .bind(item.is_completed)
        .bind(item.created_at.timestamp_millis())
        .fetch_one(&self.pool)
        .await
        .map_err(storage)?;

        TodoItem::try_from(row)
    }

    async fn update(&self, item: TodoItem) -> Result<TodoItem, RepositoryError> {
        let row: Option<TodoRow> = sqlx::query_as(&format!(
            "UPDATE todo_items SET title = ?, description = ?, is_completed = ?, updated_at = ? \
             WHERE id = ? RETURNING {COLUMNS}"
        ))
        .bind(&item.title)
        .bind(&item.description)
        .bind(item.is_completed)
        .bind(item.updated_at.map(|ts| ts.timestamp_millis()))
        .bind(item.id)
        .fetch_optional(&self.pool)
        .await
        .map_err(storage)?;

        row.ok_or(RepositoryError::Missing(item.id))?.try_into()
    }

    async fn delete(&self, id: TodoId) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM todo_items WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(storage)?;
        Ok(result.rows_affected() > 0)
    }

    async fn exists(&self, id: TodoId) -> Result<bool, RepositoryError> {
        let found: i64 = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM todo_items WHERE id = ?)")
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(storage)?;
        Ok(found != 0)
    }
}

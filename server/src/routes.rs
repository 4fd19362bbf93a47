use axum::{
    extract::{Path, State},
    http::{header, HeaderMap, HeaderValue, StatusCode},
    routing::get,
    Json, Router,
};
use todo_core::{CreateTodoItemDto, TodoId, TodoItemDto, UpdateTodoItemDto};

use crate::error::ApiError;
use crate::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/todos", get(list_todos).post(create_todo))
        .route("/todos/{id}", get(get_todo).put(update_todo).delete(delete_todo))
        .with_state(state)
}

async fn list_todos(State(state): State<AppState>) -> Result<Json<Vec<TodoItemDto>>, ApiError> {
    Ok(Json(state.service.get_all().await?))
}

async fn get_todo(
    State(state): State<AppState>,
    Path(id): Path<TodoId>,
) -> Result<Json<TodoItemDto>, ApiError> {
    Ok(Json(state.service.get_by_id(id).await?))
}

async fn create_todo(
    State(state): State<AppState>,
    Json(input): Json<CreateTodoItemDto>,
) -> Result<(StatusCode, HeaderMap, Json<TodoItemDto>), ApiError> {
    let todo = state.service.create(input).await?;

    let mut headers = HeaderMap::new();
    if let Ok(location) = HeaderValue::from_str(&format!("/todos/{}", todo.id)) {
        headers.insert(header::LOCATION, location);
    }
    Ok((StatusCode::CREATED, headers, Json(todo)))
}

async fn update_todo(
    State(state): State<AppState>,
    Path(id): Path<TodoId>,
    Json(input): Json<UpdateTodoItemDto>,
) -> Result<Json<TodoItemDto>, ApiError> {
    Ok(Json(state.service.update(id, input).await?))
}

async fn delete_todo(
    State(state): State<AppState>,
    Path(id): Path<TodoId>,
) -> Result<StatusCode, ApiError> {
    state.service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

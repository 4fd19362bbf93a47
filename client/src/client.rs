//! Stateless HTTP request builder and response parser for the todo API.
//!
//! # Design
//! `TodoClient` holds only a `base_url`. Each CRUD operation is split into a
//! `build_*` method that produces an `HttpRequest` and a `parse_*` method
//! that consumes an `HttpResponse`, so the caller owns all I/O.

use serde::de::DeserializeOwned;
use serde::Serialize;
use todo_core::{CreateTodoItemDto, TodoId, TodoItemDto, UpdateTodoItemDto};

use crate::error::ClientError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};

/// A created item together with the `Location` the server reported for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Created {
    pub item: TodoItemDto,
    pub location: Option<String>,
}

/// Synchronous, stateless client for the todo API.
#[derive(Debug, Clone)]
pub struct TodoClient {
    base_url: String,
}

impl TodoClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn build_list_todos(&self) -> HttpRequest {
        self.request(HttpMethod::Get, "/todos".to_string(), None)
    }

    pub fn build_get_todo(&self, id: TodoId) -> HttpRequest {
        self.request(HttpMethod::Get, format!("/todos/{id}"), None)
    }

    pub fn build_create_todo(&self, input: &CreateTodoItemDto) -> Result<HttpRequest, ClientError> {
        let body = encode(input)?;
        Ok(self.request(HttpMethod::Post, "/todos".to_string(), Some(body)))
    }

    pub fn build_update_todo(
        &self,
        id: TodoId,
        input: &UpdateTodoItemDto,
    ) -> Result<HttpRequest, ClientError> {
        let body = encode(input)?;
        Ok(self.request(HttpMethod::Put, format!("/todos/{id}"), Some(body)))
    }

    pub fn build_delete_todo(&self, id: TodoId) -> HttpRequest {
        self.request(HttpMethod::Delete, format!("/todos/{id}"), None)
    }

    pub fn parse_list_todos(&self, response: HttpResponse) -> Result<Vec<TodoItemDto>, ClientError> {
        check_status(&response, 200)?;
        decode(&response.body)
    }

    pub fn parse_get_todo(&self, response: HttpResponse) -> Result<TodoItemDto, ClientError> {
        check_status(&response, 200)?;
        decode(&response.body)
    }

    pub fn parse_create_todo(&self, response: HttpResponse) -> Result<Created, ClientError> {
        check_status(&response, 201)?;
        Ok(Created {
            item: decode(&response.body)?,
            location: response.header("location").map(str::to_string),
        })
    }

    pub fn parse_update_todo(&self, response: HttpResponse) -> Result<TodoItemDto, ClientError> {
        check_status(&response, 200)?;
        decode(&response.body)
    }

    pub fn parse_delete_todo(&self, response: HttpResponse) -> Result<(), ClientError> {
        check_status(&response, 204)
    }

    fn request(&self, method: HttpMethod, path: String, body: Option<String>) -> HttpRequest {
        let headers = match body {
            Some(_) => vec![("content-type".to_string(), "application/json".to_string())],
            None => Vec::new(),
        };
        HttpRequest {
            method,
            path: format!("{}{path}", self.base_url),
            headers,
            body,
        }
    }
}

fn encode<T: Serialize>(value: &T) -> Result<String, ClientError> {
    serde_json::to_string(value).map_err(|e| ClientError::SerializationError(e.to_string()))
}

fn decode<T: DeserializeOwned>(body: &str) -> Result<T, ClientError> {
    serde_json::from_str(body).map_err(|e| ClientError::DeserializationError(e.to_string()))
}

/// Map non-success status codes to the appropriate `ClientError` variant.
fn check_status(response: &HttpResponse, expected: u16) -> Result<(), ClientError> {
    match response.status {
        status if status == expected => Ok(()),
        404 => Err(ClientError::NotFound(response.body.clone())),
        400 => Err(ClientError::BadRequest(response.body.clone())),
        status => Err(ClientError::HttpError {
            status,
            body: response.body.clone(),
        }),
    }
}

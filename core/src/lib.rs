//! Domain and application layer for the todo service.
//!
//! # Overview
//! Owns the `TodoItem` entity, the boundary DTOs, validation rules, the
//! `TodoRepository` storage port and the `TodoService` that orchestrates
//! them. Nothing here performs network or disk I/O; storage is reached only
//! through the repository trait.
//!
//! # Design
//! - Every service operation returns `ServiceResult<T>`. Expected outcomes
//!   (validation failure, missing item) are `Err` variants, never panics.
//! - `InMemoryTodoRepository` ships alongside the trait so the service can be
//!   exercised without a database. The SQLite implementation lives in the
//!   server crate.
//! - DTOs serialize in camelCase to match the HTTP contract.

pub mod dto;
pub mod entity;
pub mod error;
pub mod memory;
pub mod repository;
pub mod service;
pub mod validation;

pub use dto::{CreateTodoItemDto, TodoItemDto, UpdateTodoItemDto};
pub use entity::{NewTodoItem, TodoId, TodoItem};
pub use error::{RepositoryError, ServiceError, ServiceResult, NOT_FOUND_MESSAGE};
pub use memory::InMemoryTodoRepository;
pub use repository::TodoRepository;
pub use service::TodoService;
pub use validation::{ValidationError, DESCRIPTION_MAX_CHARS, TITLE_MAX_CHARS};

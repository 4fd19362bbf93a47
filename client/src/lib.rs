//! Synchronous API client for the todo service.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern). The caller executes the
//! actual HTTP round-trip.
//!
//! # Design
//! - `TodoClient` is stateless; it holds only `base_url`.
//! - Each CRUD operation is split into `build_*` and `parse_*`.
//! - Payload and response types are the DTOs from `todo-core`, so client and
//!   server cannot drift apart on field names.

pub mod client;
pub mod error;
pub mod http;

pub use client::{Created, TodoClient};
pub use error::ClientError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
